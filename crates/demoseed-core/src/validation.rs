use std::collections::BTreeSet;

use crate::config::SeedConfig;
use crate::error::{Error, Result};

/// Longest backdating window, in days, for clients and orders.
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Largest `items_per_order.max` accepted.
pub const MAX_ITEMS_PER_ORDER: u32 = 1_000;

/// Validate the preconditions of a generation run.
///
/// This checks:
/// - clients exist whenever orders are requested
/// - the catalog is non-empty with unique ids and positive prices
/// - payment types are present
/// - item count, quantity and day windows are well-formed and bounded
/// - the client window ends before the order window starts
/// - the largest possible order total fits in an `i64`
pub fn validate_config(config: &SeedConfig) -> Result<()> {
    if config.order_count > 0 && config.client_count == 0 {
        return Err(Error::InvalidConfig(
            "client_count must be > 0 when orders are generated".to_string(),
        ));
    }

    if config.catalog.is_empty() {
        return Err(Error::InvalidConfig(
            "catalog must contain at least one product".to_string(),
        ));
    }

    let mut product_ids = BTreeSet::new();
    for product in &config.catalog {
        if !product_ids.insert(product.id) {
            return Err(Error::InvalidConfig(format!(
                "duplicate product id: {}",
                product.id
            )));
        }
        if product.price <= 0 {
            return Err(Error::InvalidConfig(format!(
                "product '{}' must have a positive price",
                product.name
            )));
        }
    }

    if config.payment_types.is_empty() {
        return Err(Error::InvalidConfig(
            "payment_types must not be empty".to_string(),
        ));
    }

    for (label, range) in [
        ("items_per_order", config.items_per_order),
        ("quantity", config.quantity),
    ] {
        if range.min == 0 {
            return Err(Error::InvalidConfig(format!("{label}.min must be >= 1")));
        }
        if range.min > range.max {
            return Err(Error::InvalidConfig(format!(
                "{label}.min must be <= {label}.max"
            )));
        }
    }

    if config.items_per_order.max > MAX_ITEMS_PER_ORDER {
        return Err(Error::InvalidConfig(format!(
            "items_per_order.max must be <= {MAX_ITEMS_PER_ORDER}"
        )));
    }

    let window = config.client_age_days;
    if window.min_days < 0 || window.min_days >= window.max_days {
        return Err(Error::InvalidConfig(
            "client_age_days must satisfy 0 <= min_days < max_days".to_string(),
        ));
    }
    if window.max_days > MAX_WINDOW_DAYS {
        return Err(Error::InvalidConfig(format!(
            "client_age_days.max_days must be <= {MAX_WINDOW_DAYS}"
        )));
    }

    if config.order_window_days <= 0 || config.order_window_days > MAX_WINDOW_DAYS {
        return Err(Error::InvalidConfig(format!(
            "order_window_days must be in 1..={MAX_WINDOW_DAYS}"
        )));
    }

    // Clients must predate every order that can reference them.
    if window.min_days < config.order_window_days {
        return Err(Error::InvalidConfig(format!(
            "client_age_days.min_days ({}) must be >= order_window_days ({})",
            window.min_days, config.order_window_days
        )));
    }

    let max_units = i64::from(config.quantity.max) * i64::from(config.items_per_order.max);
    for product in &config.catalog {
        if product.price.checked_mul(max_units).is_none() {
            return Err(Error::InvalidConfig(format!(
                "product '{}' price {} overflows the largest order total",
                product.name, product.price
            )));
        }
    }

    Ok(())
}
