use std::fs;

use tempfile::TempDir;
use uuid::Uuid;

use demoseed_core::{Order, OrderItem, OutputConfig, SeedConfig};
use demoseed_eval::{EvalError, EvaluateOptions, EvaluationEngine};
use demoseed_generate::GenerationEngine;
use demoseed_generate::output::csv::write_records_csv;

fn generated_dataset(label: &str) -> (SeedConfig, TempDir) {
    let dir = tempfile::Builder::new()
        .prefix(&format!("demoseed_eval_{label}_"))
        .tempdir()
        .expect("create temp dir");
    let config = SeedConfig {
        seed: Some(404),
        output: OutputConfig {
            dir: dir.path().to_path_buf(),
            ..OutputConfig::default()
        },
        ..SeedConfig::default()
    };
    GenerationEngine::default()
        .run(&config)
        .expect("generate dataset");
    (config, dir)
}

fn read_orders(config: &SeedConfig) -> Vec<Order> {
    let mut reader = csv::Reader::from_path(config.output.orders_path()).expect("open orders");
    reader
        .deserialize()
        .collect::<Result<Vec<Order>, _>>()
        .expect("parse orders")
}

fn rewrite_orders(config: &SeedConfig, orders: &[Order]) {
    write_records_csv(&config.output.orders_path(), Order::COLUMNS, orders)
        .expect("rewrite orders");
}

#[test]
fn generated_dataset_is_clean() {
    let (config, dir) = generated_dataset("clean");

    let report = EvaluationEngine::default()
        .run(dir.path(), &config)
        .expect("evaluate");

    assert!(report.is_clean(), "violations: {:?}", report.violations);
    assert_eq!(report.rows.clients, 20);
    assert_eq!(report.rows.orders, 100);
    assert_eq!(report.checks["order_total"].checked, 100);
    assert_eq!(report.checks["order_fk"].checked, report.rows.items);
}

#[test]
fn tampered_total_is_reported() {
    let (config, dir) = generated_dataset("total");
    let mut orders = read_orders(&config);
    orders[0].total += 1;
    let tampered = orders[0].id.to_string();
    rewrite_orders(&config, &orders);

    let report = EvaluationEngine::default()
        .run(dir.path(), &config)
        .expect("evaluate");

    assert_eq!(report.checks["order_total"].violations, 1);
    assert_eq!(report.violations_total, 1);
    assert_eq!(report.violations[0].id.as_deref(), Some(tampered.as_str()));
}

#[test]
fn dropped_order_leaves_dangling_items() {
    let (config, dir) = generated_dataset("dangling");
    let mut orders = read_orders(&config);
    orders.remove(0);
    rewrite_orders(&config, &orders);

    let report = EvaluationEngine::default()
        .run(dir.path(), &config)
        .expect("evaluate");

    assert!(report.checks["order_fk"].violations >= 1);
    assert_eq!(report.checks["row_count"].violations, 1);
    assert!(!report.is_clean());
}

#[test]
fn violation_list_is_capped() {
    let (config, dir) = generated_dataset("capped");
    let other = SeedConfig {
        company_id: Uuid::from_u128(1),
        ..config.clone()
    };

    let report = EvaluationEngine::new(EvaluateOptions { max_violations: 5 })
        .run(dir.path(), &other)
        .expect("evaluate");

    assert_eq!(report.violations.len(), 5);
    assert!(report.checks["company_id"].violations > 5);
}

#[test]
fn missing_file_is_invalid_dataset() {
    let (config, dir) = generated_dataset("missing");
    fs::remove_file(config.output.items_path()).expect("remove items");

    let err = EvaluationEngine::default()
        .run(dir.path(), &config)
        .unwrap_err();

    assert!(matches!(err, EvalError::InvalidDataset(_)));
}

#[test]
fn overflowing_item_sum_is_a_total_violation() {
    let (config, dir) = generated_dataset("overflow");
    let mut orders = read_orders(&config);
    let first = orders[0].id;
    let mut items: Vec<OrderItem> = {
        let mut reader =
            csv::Reader::from_path(config.output.items_path()).expect("open items");
        reader
            .deserialize()
            .collect::<Result<Vec<OrderItem>, _>>()
            .expect("parse items")
    };
    for item in items.iter_mut().filter(|item| item.order_id == first) {
        item.price_at_moment = i64::MAX;
        item.quantity = 2;
    }
    orders[0].total = i64::MAX;
    rewrite_orders(&config, &orders);
    write_records_csv(&config.output.items_path(), OrderItem::COLUMNS, &items)
        .expect("rewrite items");

    let report = EvaluationEngine::default()
        .run(dir.path(), &config)
        .expect("evaluate");

    assert_eq!(report.checks["order_total"].violations, 1);
    assert!(!report.is_clean());
}
