use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog product. Prices are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub category: String,
}

/// Demo client row.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<Uuid>,
    pub company_id: Uuid,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub birth_date: Option<NaiveDate>,
}

/// Demo order row. `total` is the sum of its items' subtotals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub client_id: Uuid,
    pub total: i64,
    pub status: String,
    pub payment_type: String,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub company_id: Uuid,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Demo order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    /// Product price captured when the item was created.
    pub price_at_moment: i64,
    pub company_id: Uuid,
}

impl Client {
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "phone",
        "address",
        "created_at",
        "user_id",
        "company_id",
        "is_active",
        "deleted_at",
        "birth_date",
    ];
}

impl Order {
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "client_id",
        "total",
        "status",
        "payment_type",
        "user_id",
        "created_at",
        "company_id",
        "deleted_at",
    ];
}

impl OrderItem {
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "order_id",
        "product_id",
        "quantity",
        "price_at_moment",
        "company_id",
    ];

    /// `price_at_moment * quantity`, `None` on overflow.
    pub fn subtotal(&self) -> Option<i64> {
        self.price_at_moment.checked_mul(i64::from(self.quantity))
    }
}
