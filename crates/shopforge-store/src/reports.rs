//! Reporting queries over the generated dataset.
//!
//! These are the consumers of the fixture, not part of the generation
//! pipeline itself: daily revenue, top products and big spenders within a
//! month, substring product search, and same-category recommendations.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use shopforge_core::{CustomerId, Product, ProductId};

use crate::error::StoreError;
use crate::store::MemoryStore;

/// Revenue aggregated over one order date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub orders: u64,
    pub total_revenue: Decimal,
}

/// Revenue attributed to one product within a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRevenue {
    pub product_id: ProductId,
    pub name: String,
    pub units_sold: u64,
    pub revenue: Decimal,
}

/// Spend accumulated by one customer within a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSpend {
    pub customer_id: CustomerId,
    pub email: String,
    pub orders: u64,
    pub total_spent: Decimal,
}

impl MemoryStore {
    /// Revenue per order date, ordered by date ascending.
    pub fn daily_revenue(&self) -> Vec<DailyRevenue> {
        let mut by_date: BTreeMap<NaiveDate, (u64, Decimal)> = BTreeMap::new();
        for order in self.orders() {
            let entry = by_date.entry(order.ordered_at.date()).or_default();
            entry.0 += 1;
            entry.1 += order.total_amount;
        }
        by_date
            .into_iter()
            .map(|(date, (orders, total_revenue))| DailyRevenue {
                date,
                orders,
                total_revenue,
            })
            .collect()
    }

    /// Revenue for a single order date, if any order fell on it.
    pub fn revenue_for_day(&self, date: NaiveDate) -> Option<DailyRevenue> {
        self.daily_revenue()
            .into_iter()
            .find(|entry| entry.date == date)
    }

    /// Top `limit` products by revenue within the given month, joined over
    /// order details and their order headers. Ties break on product id.
    pub fn top_products(&self, year: i32, month: u32, limit: usize) -> Vec<ProductRevenue> {
        let mut by_product: BTreeMap<ProductId, (u64, Decimal)> = BTreeMap::new();
        for detail in self.order_details() {
            let Some(order) = self.order(detail.order_id) else {
                continue;
            };
            if !in_month(order.ordered_at.date(), year, month) {
                continue;
            }
            let entry = by_product.entry(detail.product_id).or_default();
            entry.0 += u64::from(detail.quantity);
            entry.1 += detail.line_total();
        }

        let mut ranked: Vec<ProductRevenue> = by_product
            .into_iter()
            .map(|(product_id, (units_sold, revenue))| ProductRevenue {
                product_id,
                name: self
                    .product(product_id)
                    .map(|product| product.name.clone())
                    .unwrap_or_default(),
                units_sold,
                revenue,
            })
            .collect();
        ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue).then(a.product_id.cmp(&b.product_id)));
        ranked.truncate(limit);
        ranked
    }

    /// Customers whose order totals within the given month exceed
    /// `threshold`, ordered by spend descending.
    pub fn big_spenders(&self, year: i32, month: u32, threshold: Decimal) -> Vec<CustomerSpend> {
        let mut by_customer: BTreeMap<CustomerId, (u64, Decimal)> = BTreeMap::new();
        for order in self.orders() {
            if !in_month(order.ordered_at.date(), year, month) {
                continue;
            }
            let entry = by_customer.entry(order.customer_id).or_default();
            entry.0 += 1;
            entry.1 += order.total_amount;
        }

        let mut ranked: Vec<CustomerSpend> = by_customer
            .into_iter()
            .filter(|(_, (_, total))| *total > threshold)
            .map(|(customer_id, (orders, total_spent))| CustomerSpend {
                customer_id,
                email: self
                    .customer(customer_id)
                    .map(|customer| customer.email.clone())
                    .unwrap_or_default(),
                orders,
                total_spent,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.total_spent
                .cmp(&a.total_spent)
                .then(a.customer_id.cmp(&b.customer_id))
        });
        ranked
    }

    /// Case-insensitive substring search over product name and description.
    pub fn search_products(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product
                        .description
                        .as_deref()
                        .map(|description| description.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .collect()
    }

    /// Up to `limit` products from the same category, excluding the product
    /// itself.
    pub fn related_products(
        &self,
        product_id: ProductId,
        limit: usize,
    ) -> Result<Vec<&Product>, StoreError> {
        let product = self.product(product_id).ok_or(StoreError::UnknownRow {
            table: "products",
            id: product_id,
        })?;
        Ok(self
            .products()
            .filter(|candidate| {
                candidate.category_id == product.category_id && candidate.id != product_id
            })
            .take(limit)
            .collect())
    }
}

fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}
