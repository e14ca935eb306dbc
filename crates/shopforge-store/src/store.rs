use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::debug;

use shopforge_core::{
    Category, CategoryId, Customer, CustomerId, NewCategory, NewCustomer, NewOrder,
    NewOrderDetail, NewProduct, Order, OrderDetail, OrderDetailId, OrderId, Product, ProductId,
};

use crate::error::StoreError;

/// In-memory relational store with sequential id assignment per table.
///
/// All mutations are bulk, set-based operations. Every batch is validated
/// in full before the first row is committed, so a constraint violation
/// never leaves a partially inserted batch behind.
#[derive(Debug, Default)]
pub struct MemoryStore {
    customers: BTreeMap<CustomerId, Customer>,
    categories: BTreeMap<CategoryId, Category>,
    products: BTreeMap<ProductId, Product>,
    orders: BTreeMap<OrderId, Order>,
    order_details: BTreeMap<OrderDetailId, OrderDetail>,

    // Unique indexes and the detail-by-order join index.
    emails: HashMap<String, CustomerId>,
    category_names: HashMap<String, CategoryId>,
    details_by_order: BTreeMap<OrderId, Vec<OrderDetailId>>,

    next_customer_id: CustomerId,
    next_category_id: CategoryId,
    next_product_id: ProductId,
    next_order_id: OrderId,
    next_detail_id: OrderDetailId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- bulk inserts -----------------------------------------------------

    /// Bulk insert customers; returns the assigned ids in insertion order.
    pub fn insert_customers(
        &mut self,
        rows: Vec<NewCustomer>,
    ) -> Result<Vec<CustomerId>, StoreError> {
        let mut batch_emails: HashMap<&str, ()> = HashMap::with_capacity(rows.len());
        for row in &rows {
            if self.emails.contains_key(&row.email)
                || batch_emails.insert(row.email.as_str(), ()).is_some()
            {
                return Err(StoreError::UniquenessViolation {
                    table: "customers",
                    column: "email",
                    value: row.email.clone(),
                });
            }
        }

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            self.next_customer_id += 1;
            let id = self.next_customer_id;
            self.emails.insert(row.email.clone(), id);
            self.customers.insert(
                id,
                Customer {
                    id,
                    email: row.email,
                    password_hash: row.password_hash,
                    first_name: row.first_name,
                    last_name: row.last_name,
                },
            );
            ids.push(id);
        }
        debug!(rows = ids.len(), "customers inserted");
        Ok(ids)
    }

    /// Bulk insert categories; returns the assigned ids in insertion order.
    pub fn insert_categories(
        &mut self,
        rows: Vec<NewCategory>,
    ) -> Result<Vec<CategoryId>, StoreError> {
        let mut batch_names: HashMap<&str, ()> = HashMap::with_capacity(rows.len());
        for row in &rows {
            if self.category_names.contains_key(&row.name)
                || batch_names.insert(row.name.as_str(), ()).is_some()
            {
                return Err(StoreError::UniquenessViolation {
                    table: "categories",
                    column: "name",
                    value: row.name.clone(),
                });
            }
        }

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            self.next_category_id += 1;
            let id = self.next_category_id;
            self.category_names.insert(row.name.clone(), id);
            self.categories.insert(id, Category { id, name: row.name });
            ids.push(id);
        }
        debug!(rows = ids.len(), "categories inserted");
        Ok(ids)
    }

    /// Bulk insert products; every `category_id` must resolve.
    pub fn insert_products(&mut self, rows: Vec<NewProduct>) -> Result<Vec<ProductId>, StoreError> {
        for row in &rows {
            if !self.categories.contains_key(&row.category_id) {
                return Err(StoreError::ReferentialViolation {
                    table: "products",
                    column: "category_id",
                    referenced: "categories",
                    id: row.category_id,
                });
            }
            check_non_negative("products", "price", row.price)?;
        }

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            self.next_product_id += 1;
            let id = self.next_product_id;
            self.products.insert(
                id,
                Product {
                    id,
                    category_id: row.category_id,
                    name: row.name,
                    description: row.description,
                    price: row.price,
                    stock_quantity: row.stock_quantity,
                },
            );
            ids.push(id);
        }
        debug!(rows = ids.len(), "products inserted");
        Ok(ids)
    }

    /// Bulk insert order headers; every `customer_id` must resolve.
    pub fn insert_orders(&mut self, rows: Vec<NewOrder>) -> Result<Vec<OrderId>, StoreError> {
        for row in &rows {
            if !self.customers.contains_key(&row.customer_id) {
                return Err(StoreError::ReferentialViolation {
                    table: "orders",
                    column: "customer_id",
                    referenced: "customers",
                    id: row.customer_id,
                });
            }
            check_non_negative("orders", "total_amount", row.total_amount)?;
        }

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            self.next_order_id += 1;
            let id = self.next_order_id;
            self.orders.insert(
                id,
                Order {
                    id,
                    customer_id: row.customer_id,
                    ordered_at: row.ordered_at,
                    customer_name: row.customer_name,
                    total_amount: row.total_amount,
                },
            );
            self.details_by_order.insert(id, Vec::new());
            ids.push(id);
        }
        debug!(rows = ids.len(), "orders inserted");
        Ok(ids)
    }

    /// Bulk insert order details; order and product references must resolve,
    /// quantity must be at least 1 and unit_price non-negative.
    pub fn insert_order_details(
        &mut self,
        rows: Vec<NewOrderDetail>,
    ) -> Result<Vec<OrderDetailId>, StoreError> {
        for row in &rows {
            if !self.orders.contains_key(&row.order_id) {
                return Err(StoreError::ReferentialViolation {
                    table: "order_details",
                    column: "order_id",
                    referenced: "orders",
                    id: row.order_id,
                });
            }
            if !self.products.contains_key(&row.product_id) {
                return Err(StoreError::ReferentialViolation {
                    table: "order_details",
                    column: "product_id",
                    referenced: "products",
                    id: row.product_id,
                });
            }
            check_non_negative("order_details", "unit_price", row.unit_price)?;
            if row.quantity < 1 {
                return Err(StoreError::CheckViolation {
                    table: "order_details",
                    column: "quantity",
                    message: "quantity must be at least 1".to_string(),
                });
            }
        }

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            self.next_detail_id += 1;
            let id = self.next_detail_id;
            self.details_by_order
                .entry(row.order_id)
                .or_default()
                .push(id);
            self.order_details.insert(
                id,
                OrderDetail {
                    id,
                    order_id: row.order_id,
                    product_id: row.product_id,
                    unit_price: row.unit_price,
                    quantity: row.quantity,
                },
            );
            ids.push(id);
        }
        debug!(rows = ids.len(), "order details inserted");
        Ok(ids)
    }

    // ---- bulk update ------------------------------------------------------

    /// Batched write-back of recomputed order totals. Returns the number of
    /// rows updated; fails without touching anything if any id is unknown or
    /// any total is negative.
    pub fn update_order_totals(
        &mut self,
        totals: &[(OrderId, Decimal)],
    ) -> Result<u64, StoreError> {
        for (order_id, total) in totals {
            if !self.orders.contains_key(order_id) {
                return Err(StoreError::UnknownRow {
                    table: "orders",
                    id: *order_id,
                });
            }
            check_non_negative("orders", "total_amount", *total)?;
        }

        for (order_id, total) in totals {
            if let Some(order) = self.orders.get_mut(order_id) {
                order.total_amount = *total;
            }
        }
        Ok(totals.len() as u64)
    }

    // ---- identifier snapshots ---------------------------------------------

    /// Ordered snapshot of live customer ids. Sampling a parent row means
    /// indexing this snapshot, never assuming a contiguous id range.
    pub fn customer_ids(&self) -> Vec<CustomerId> {
        self.customers.keys().copied().collect()
    }

    pub fn category_ids(&self) -> Vec<CategoryId> {
        self.categories.keys().copied().collect()
    }

    pub fn product_ids(&self) -> Vec<ProductId> {
        self.products.keys().copied().collect()
    }

    // ---- point lookups ----------------------------------------------------

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub fn order_details_for(&self, order_id: OrderId) -> Vec<&OrderDetail> {
        self.details_by_order
            .get(&order_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.order_details.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    // ---- table scans ------------------------------------------------------

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn order_details(&self) -> impl Iterator<Item = &OrderDetail> {
        self.order_details.values()
    }

    // ---- counts -----------------------------------------------------------

    pub fn customer_count(&self) -> u64 {
        self.customers.len() as u64
    }

    pub fn category_count(&self) -> u64 {
        self.categories.len() as u64
    }

    pub fn product_count(&self) -> u64 {
        self.products.len() as u64
    }

    pub fn order_count(&self) -> u64 {
        self.orders.len() as u64
    }

    pub fn order_detail_count(&self) -> u64 {
        self.order_details.len() as u64
    }

    // ---- cascade delete ---------------------------------------------------

    /// Delete a customer and cascade to its orders and their details.
    pub fn delete_customer(&mut self, id: CustomerId) -> Result<(), StoreError> {
        let customer = self.customers.remove(&id).ok_or(StoreError::UnknownRow {
            table: "customers",
            id,
        })?;
        self.emails.remove(&customer.email);

        let orphaned: Vec<OrderId> = self
            .orders
            .values()
            .filter(|order| order.customer_id == id)
            .map(|order| order.id)
            .collect();
        for order_id in orphaned {
            self.remove_order_cascade(order_id);
        }
        Ok(())
    }

    /// Delete a category and cascade to its products and their details.
    pub fn delete_category(&mut self, id: CategoryId) -> Result<(), StoreError> {
        let category = self.categories.remove(&id).ok_or(StoreError::UnknownRow {
            table: "categories",
            id,
        })?;
        self.category_names.remove(&category.name);

        let orphaned: Vec<ProductId> = self
            .products
            .values()
            .filter(|product| product.category_id == id)
            .map(|product| product.id)
            .collect();
        for product_id in orphaned {
            self.remove_product_cascade(product_id);
        }
        Ok(())
    }

    /// Delete a product and cascade to its order details.
    pub fn delete_product(&mut self, id: ProductId) -> Result<(), StoreError> {
        if self.products.remove(&id).is_none() {
            return Err(StoreError::UnknownRow {
                table: "products",
                id,
            });
        }
        self.remove_details_of_product(id);
        Ok(())
    }

    /// Delete an order and cascade to its details.
    pub fn delete_order(&mut self, id: OrderId) -> Result<(), StoreError> {
        if self.orders.remove(&id).is_none() {
            return Err(StoreError::UnknownRow { table: "orders", id });
        }
        if let Some(detail_ids) = self.details_by_order.remove(&id) {
            for detail_id in detail_ids {
                self.order_details.remove(&detail_id);
            }
        }
        Ok(())
    }

    fn remove_order_cascade(&mut self, id: OrderId) {
        self.orders.remove(&id);
        if let Some(detail_ids) = self.details_by_order.remove(&id) {
            for detail_id in detail_ids {
                self.order_details.remove(&detail_id);
            }
        }
    }

    fn remove_product_cascade(&mut self, id: ProductId) {
        self.products.remove(&id);
        self.remove_details_of_product(id);
    }

    fn remove_details_of_product(&mut self, id: ProductId) {
        let orphaned: Vec<OrderDetailId> = self
            .order_details
            .values()
            .filter(|detail| detail.product_id == id)
            .map(|detail| detail.id)
            .collect();
        for detail_id in orphaned {
            if let Some(detail) = self.order_details.remove(&detail_id) {
                if let Some(ids) = self.details_by_order.get_mut(&detail.order_id) {
                    ids.retain(|existing| *existing != detail_id);
                }
            }
        }
    }
}

fn check_non_negative(
    table: &'static str,
    column: &'static str,
    value: Decimal,
) -> Result<(), StoreError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(StoreError::CheckViolation {
            table,
            column,
            message: format!("{column} must be non-negative, got {value}"),
        });
    }
    Ok(())
}
