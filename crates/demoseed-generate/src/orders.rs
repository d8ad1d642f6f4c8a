use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use demoseed_core::{Client, Order, OrderItem, SeedConfig};

use crate::errors::GenerationError;
use crate::sampling::{days_before, random_uuid, timestamp_between};

/// Orders and their line items from one run.
#[derive(Debug, Clone, Default)]
pub struct OrderBatch {
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
}

/// Generate `config.order_count` orders, each owned by a random client and
/// carrying `config.items_per_order` random catalog items.
///
/// Items snapshot the product price; the order total is the sum of the
/// item subtotals.
pub fn generate_orders(
    config: &SeedConfig,
    clients: &[Client],
    now: DateTime<Utc>,
    rng: &mut dyn RngCore,
) -> Result<OrderBatch, GenerationError> {
    let window_start = days_before(now, config.order_window_days).ok_or_else(|| {
        GenerationError::InvalidConfig(format!(
            "order_window_days {} is out of range",
            config.order_window_days
        ))
    })?;
    let mut batch = OrderBatch::default();

    for _ in 0..config.order_count {
        let order_id = random_uuid(rng);
        let client = clients.choose(rng).ok_or_else(|| {
            GenerationError::InvalidConfig("no clients to attach orders to".to_string())
        })?;
        let created_at = timestamp_between(window_start, now, rng);

        let mut total = 0_i64;
        let item_count =
            rng.random_range(config.items_per_order.min..=config.items_per_order.max);
        for _ in 0..item_count {
            let product = config.catalog.choose(rng).ok_or_else(|| {
                GenerationError::InvalidConfig("catalog is empty".to_string())
            })?;
            let quantity = rng.random_range(config.quantity.min..=config.quantity.max);
            let item = OrderItem {
                id: random_uuid(rng),
                order_id,
                product_id: product.id,
                quantity,
                price_at_moment: product.price,
                company_id: config.company_id,
            };
            total = item
                .subtotal()
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or_else(|| {
                    GenerationError::InvalidConfig(format!(
                        "order total overflows with product '{}'",
                        product.name
                    ))
                })?;
            batch.items.push(item);
        }

        let payment_type = config.payment_types.choose(rng).ok_or_else(|| {
            GenerationError::InvalidConfig("payment_types is empty".to_string())
        })?;

        batch.orders.push(Order {
            id: order_id,
            client_id: client.id,
            total,
            status: config.status.clone(),
            payment_type: payment_type.clone(),
            user_id: None,
            created_at,
            company_id: config.company_id,
            deleted_at: None,
        });
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use chrono::{Duration, TimeZone};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use uuid::Uuid;

    fn client(id: u128) -> Client {
        Client {
            id: Uuid::from_u128(id),
            name: "Ana Díaz".to_string(),
            phone: "+54 9 11 5555-0000".to_string(),
            address: "Calle Italia 10, Rosario, Santa Fe".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
            user_id: None,
            company_id: demoseed_core::DEMO_COMPANY_ID,
            is_active: true,
            deleted_at: None,
            birth_date: None,
        }
    }

    #[test]
    fn totals_match_item_subtotals() {
        let config = SeedConfig::default();
        let clients = vec![client(1), client(2), client(3)];
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        let batch = generate_orders(&config, &clients, now, &mut rng).expect("orders");

        assert_eq!(batch.orders.len(), 100);
        let mut sums: HashMap<Uuid, (i64, u32)> = HashMap::new();
        for item in &batch.items {
            let entry = sums.entry(item.order_id).or_default();
            entry.0 += item.subtotal().expect("subtotal fits");
            entry.1 += 1;
        }
        for order in &batch.orders {
            let (sum, count) = sums.get(&order.id).copied().unwrap_or_default();
            assert_eq!(order.total, sum);
            assert!((1..=3).contains(&count));
            assert!(clients.iter().any(|c| c.id == order.client_id));
            assert!(order.created_at >= now - Duration::days(30));
            assert!(order.created_at <= now);
            assert_eq!(order.status, "completado");
            assert!(config.payment_types.contains(&order.payment_type));
        }
    }

    #[test]
    fn items_snapshot_catalog_prices() {
        let config = SeedConfig::default();
        let clients = vec![client(1)];
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let batch = generate_orders(&config, &clients, now, &mut rng).expect("orders");

        for item in &batch.items {
            let product = config
                .catalog
                .iter()
                .find(|product| product.id == item.product_id)
                .expect("catalog product");
            assert_eq!(item.price_at_moment, product.price);
            assert!((1..=2).contains(&item.quantity));
        }
    }

    #[test]
    fn fixed_item_count_is_honoured() {
        let config = SeedConfig {
            order_count: 4,
            items_per_order: demoseed_core::CountRange::new(2, 2),
            ..SeedConfig::default()
        };
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let batch = generate_orders(&config, &[client(1)], now, &mut rng).expect("orders");

        assert_eq!(batch.items.len(), 8);
    }

    #[test]
    fn fails_without_clients() {
        let config = SeedConfig::default();
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let err = generate_orders(&config, &[], now, &mut rng).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidConfig(_)));
    }

    #[test]
    fn overflowing_total_is_an_error() {
        let mut config = SeedConfig {
            items_per_order: demoseed_core::CountRange::new(3, 3),
            quantity: demoseed_core::CountRange::new(2, 2),
            ..SeedConfig::default()
        };
        for product in &mut config.catalog {
            product.price = i64::MAX / 4;
        }
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(13);

        let err = generate_orders(&config, &[client(1)], now, &mut rng).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidConfig(_)));
    }

    #[test]
    fn out_of_range_order_window_is_an_error() {
        let config = SeedConfig {
            order_window_days: i64::MAX,
            ..SeedConfig::default()
        };
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(14);

        let err = generate_orders(&config, &[client(1)], now, &mut rng).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidConfig(_)));
    }
}
