//! Core entity model for Shopforge.
//!
//! This crate defines the canonical row types for the e-commerce star schema
//! shared by the store and the generation pipeline.

pub mod model;

pub use model::{
    Category, CategoryId, Customer, CustomerId, NewCategory, NewCustomer, NewOrder,
    NewOrderDetail, NewProduct, Order, OrderDetail, OrderDetailId, OrderId, Product, ProductId,
};

/// Number of fractional digits carried by every money amount.
pub const MONEY_SCALE: u32 = 2;
