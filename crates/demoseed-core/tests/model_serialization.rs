use chrono::{TimeZone, Utc};
use demoseed_core::{DEMO_COMPANY_ID, Order, OrderItem, SeedConfig};
use uuid::Uuid;

#[test]
fn serializes_order_with_absent_fields_as_null() {
    let order = Order {
        id: Uuid::from_u128(1),
        client_id: Uuid::from_u128(2),
        total: 19000,
        status: "completado".to_string(),
        payment_type: "Tarjeta".to_string(),
        user_id: None,
        created_at: Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap(),
        company_id: DEMO_COMPANY_ID,
        deleted_at: None,
    };

    let json = serde_json::to_value(&order).expect("serialize order");
    assert_eq!(json["total"], 19000);
    assert_eq!(json["user_id"], serde_json::Value::Null);
    assert_eq!(json["created_at"], "2026-10-01T12:00:00Z");
    assert_eq!(json["company_id"], "17ea9272-bf9d-406d-bca3-01fc75d08032");
}

#[test]
fn subtotal_multiplies_snapshot_price() {
    let item = OrderItem {
        id: Uuid::from_u128(1),
        order_id: Uuid::from_u128(2),
        product_id: Uuid::from_u128(3),
        quantity: 2,
        price_at_moment: 9500,
        company_id: DEMO_COMPANY_ID,
    };
    assert_eq!(item.subtotal(), Some(19000));
}

#[test]
fn subtotal_overflow_is_none() {
    let item = OrderItem {
        id: Uuid::from_u128(1),
        order_id: Uuid::from_u128(2),
        product_id: Uuid::from_u128(3),
        quantity: 3,
        price_at_moment: i64::MAX / 2,
        company_id: DEMO_COMPANY_ID,
    };
    assert_eq!(item.subtotal(), None);
}

#[test]
fn config_round_trips_through_json() {
    let config = SeedConfig {
        seed: Some(7),
        ..SeedConfig::default()
    };
    let json = serde_json::to_string(&config).expect("serialize config");
    let back: SeedConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(back, config);
}
