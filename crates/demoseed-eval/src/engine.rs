use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use demoseed_core::{Client, Order, OrderItem, SeedConfig};

use crate::errors::EvalError;
use crate::model::{EvaluateOptions, EvaluationReport, Violation};

/// Evaluate a generated dataset against the generation config.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    options: EvaluateOptions,
}

impl EvaluationEngine {
    pub fn new(options: EvaluateOptions) -> Self {
        Self { options }
    }

    /// Load the three CSV files from `dataset_dir` (file names from
    /// `config.output`) and check row counts, key uniqueness, foreign keys,
    /// price snapshots and order totals.
    pub fn run(
        &self,
        dataset_dir: &Path,
        config: &SeedConfig,
    ) -> Result<EvaluationReport, EvalError> {
        let start = Instant::now();
        let output = &config.output;

        let clients: Vec<Client> = load_table_csv(
            &dataset_dir.join(&output.clients_file),
            Client::COLUMNS,
        )?;
        let orders: Vec<Order> =
            load_table_csv(&dataset_dir.join(&output.orders_file), Order::COLUMNS)?;
        let items: Vec<OrderItem> =
            load_table_csv(&dataset_dir.join(&output.items_file), OrderItem::COLUMNS)?;

        let mut report = EvaluationReport::new(dataset_dir.to_path_buf());
        report.rows.clients = clients.len() as u64;
        report.rows.orders = orders.len() as u64;
        report.rows.items = items.len() as u64;

        let mut checks = Checks {
            report: &mut report,
            max_violations: self.options.max_violations,
        };
        evaluate_row_counts(&mut checks, config, &clients, &orders, &items);
        evaluate_unique_ids(&mut checks, &clients, &orders, &items);
        evaluate_company(&mut checks, config, &clients, &orders, &items);
        evaluate_orders(&mut checks, &clients, &orders);
        evaluate_items(&mut checks, config, &orders, &items);

        if report.is_clean() {
            info!(
                dir = %dataset_dir.display(),
                checks = report.checks.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "dataset verified"
            );
        } else {
            warn!(
                dir = %dataset_dir.display(),
                violations = report.violations_total,
                "dataset has violations"
            );
        }

        Ok(report)
    }
}

struct Checks<'a> {
    report: &'a mut EvaluationReport,
    max_violations: usize,
}

impl Checks<'_> {
    fn record(
        &mut self,
        check: &str,
        passed: bool,
        entity: &str,
        id: Option<Uuid>,
        message: impl FnOnce() -> String,
    ) {
        let stats = self.report.checks.entry(check.to_string()).or_default();
        stats.checked += 1;
        if passed {
            return;
        }
        stats.violations += 1;
        self.report.violations_total += 1;
        if self.report.violations.len() < self.max_violations {
            self.report.violations.push(Violation {
                check: check.to_string(),
                entity: entity.to_string(),
                id: id.map(|id| id.to_string()),
                message: message(),
            });
        }
    }
}

fn load_table_csv<T: DeserializeOwned>(path: &Path, columns: &[&str]) -> Result<Vec<T>, EvalError> {
    if !path.exists() {
        return Err(EvalError::InvalidDataset(format!(
            "missing file {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();
    if headers != columns {
        return Err(EvalError::InvalidDataset(format!(
            "{}: expected columns [{}], found [{}]",
            path.display(),
            columns.join(", "),
            headers.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

fn evaluate_row_counts(
    checks: &mut Checks<'_>,
    config: &SeedConfig,
    clients: &[Client],
    orders: &[Order],
    items: &[OrderItem],
) {
    checks.record(
        "row_count",
        clients.len() == config.client_count,
        "clients",
        None,
        || {
            format!(
                "expected {} clients, found {}",
                config.client_count,
                clients.len()
            )
        },
    );
    checks.record(
        "row_count",
        orders.len() == config.order_count,
        "orders",
        None,
        || {
            format!(
                "expected {} orders, found {}",
                config.order_count,
                orders.len()
            )
        },
    );

    let min_items = config
        .order_count
        .saturating_mul(config.items_per_order.min as usize);
    let max_items = config
        .order_count
        .saturating_mul(config.items_per_order.max as usize);
    checks.record(
        "row_count",
        (min_items..=max_items).contains(&items.len()),
        "order_items",
        None,
        || {
            format!(
                "expected {min_items}..={max_items} order items, found {}",
                items.len()
            )
        },
    );
}

fn evaluate_unique_ids(
    checks: &mut Checks<'_>,
    clients: &[Client],
    orders: &[Order],
    items: &[OrderItem],
) {
    let mut seen = HashSet::new();
    let ids = clients
        .iter()
        .map(|c| ("clients", c.id))
        .chain(orders.iter().map(|o| ("orders", o.id)))
        .chain(items.iter().map(|i| ("order_items", i.id)));
    for (entity, id) in ids {
        let fresh = seen.insert(id);
        checks.record("unique_id", fresh, entity, Some(id), || {
            format!("duplicate id {id}")
        });
    }
}

fn evaluate_company(
    checks: &mut Checks<'_>,
    config: &SeedConfig,
    clients: &[Client],
    orders: &[Order],
    items: &[OrderItem],
) {
    let company_ids = clients
        .iter()
        .map(|c| ("clients", c.id, c.company_id))
        .chain(orders.iter().map(|o| ("orders", o.id, o.company_id)))
        .chain(items.iter().map(|i| ("order_items", i.id, i.company_id)));
    for (entity, id, company_id) in company_ids {
        checks.record(
            "company_id",
            company_id == config.company_id,
            entity,
            Some(id),
            || format!("company {company_id} differs from {}", config.company_id),
        );
    }
}

fn evaluate_orders(checks: &mut Checks<'_>, clients: &[Client], orders: &[Order]) {
    let clients_by_id: HashMap<Uuid, &Client> = clients.iter().map(|c| (c.id, c)).collect();

    for order in orders {
        let client = clients_by_id.get(&order.client_id);
        checks.record("client_fk", client.is_some(), "orders", Some(order.id), || {
            format!("client {} not found", order.client_id)
        });
        if let Some(client) = client {
            checks.record(
                "client_precedes_order",
                client.created_at < order.created_at,
                "orders",
                Some(order.id),
                || {
                    format!(
                        "client created {} after order {}",
                        client.created_at, order.created_at
                    )
                },
            );
        }
    }
}

fn evaluate_items(
    checks: &mut Checks<'_>,
    config: &SeedConfig,
    orders: &[Order],
    items: &[OrderItem],
) {
    let prices: HashMap<Uuid, i64> = config.catalog.iter().map(|p| (p.id, p.price)).collect();
    // `None` once an order's item sum overflows.
    let mut per_order: HashMap<Uuid, (Option<i64>, u32)> =
        orders.iter().map(|order| (order.id, (Some(0), 0))).collect();

    for item in items {
        match per_order.get_mut(&item.order_id) {
            Some(entry) => {
                entry.0 = entry
                    .0
                    .zip(item.subtotal())
                    .and_then(|(sum, subtotal)| sum.checked_add(subtotal));
                entry.1 += 1;
                checks.record("order_fk", true, "order_items", Some(item.id), String::new);
            }
            None => checks.record("order_fk", false, "order_items", Some(item.id), || {
                format!("order {} not found", item.order_id)
            }),
        }

        let price = prices.get(&item.product_id);
        checks.record(
            "product_fk",
            price.is_some(),
            "order_items",
            Some(item.id),
            || format!("product {} not in catalog", item.product_id),
        );
        if let Some(&price) = price {
            checks.record(
                "price_snapshot",
                item.price_at_moment == price,
                "order_items",
                Some(item.id),
                || {
                    format!(
                        "price_at_moment {} differs from catalog price {price}",
                        item.price_at_moment
                    )
                },
            );
        }

        checks.record(
            "quantity_range",
            config.quantity.contains(item.quantity),
            "order_items",
            Some(item.id),
            || format!("quantity {} out of range", item.quantity),
        );
    }

    for order in orders {
        let (sum, count) = per_order
            .get(&order.id)
            .copied()
            .unwrap_or((Some(0), 0));
        checks.record(
            "items_per_order",
            config.items_per_order.contains(count),
            "orders",
            Some(order.id),
            || format!("{count} items out of range"),
        );
        checks.record(
            "order_total",
            sum == Some(order.total),
            "orders",
            Some(order.id),
            || match sum {
                Some(sum) => format!("total {} differs from item sum {sum}", order.total),
                None => format!("item sum overflows, total {}", order.total),
            },
        );
    }
}
