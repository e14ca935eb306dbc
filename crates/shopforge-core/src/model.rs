use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type CustomerId = u64;
pub type CategoryId = u64;
pub type ProductId = u64;
pub type OrderId = u64;
pub type OrderDetailId = u64;

/// Registered customer. Never mutated by the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    /// Unique across the whole store.
    pub email: String,
    /// Opaque placeholder credential; never a real hash input.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    /// First and last name joined the way order snapshots capture them.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Product category. Referenced by products, never owned by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Unique across the whole store.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    /// Non-negative, 2 fractional digits.
    pub price: Decimal,
    pub stock_quantity: u32,
}

/// Order header. `customer_name` is a snapshot captured at creation time and
/// intentionally never re-synced. `total_amount` starts at zero and is set
/// exactly once by reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub ordered_at: NaiveDateTime,
    pub customer_name: String,
    pub total_amount: Decimal,
}

/// One line of an order. Immutable after insertion; `unit_price` is the
/// product's price at assignment time, independent of later price changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: OrderDetailId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderDetail {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Insert row for a customer; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub ordered_at: NaiveDateTime,
    pub customer_name: String,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderDetail {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub unit_price: Decimal,
    pub quantity: u32,
}
