use chrono::NaiveDate;
use rust_decimal::Decimal;

use shopforge_core::{NewCategory, NewCustomer, NewOrder, NewOrderDetail, NewProduct};
use shopforge_store::{MemoryStore, StoreError};

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .insert_customers(vec![
            NewCustomer {
                email: "ana.1@example.com".to_string(),
                password_hash: "!".to_string(),
                first_name: "Ana".to_string(),
                last_name: "Silva".to_string(),
            },
            NewCustomer {
                email: "bruno.2@example.com".to_string(),
                password_hash: "!".to_string(),
                first_name: "Bruno".to_string(),
                last_name: "Costa".to_string(),
            },
        ])
        .expect("insert customers");
    store
        .insert_categories(vec![
            NewCategory {
                name: "Photography 1".to_string(),
            },
            NewCategory {
                name: "Kitchen 2".to_string(),
            },
        ])
        .expect("insert categories");
    store
        .insert_products(vec![
            NewProduct {
                category_id: 1,
                name: "Compact camera".to_string(),
                description: Some("Pocketable point-and-shoot".to_string()),
                price: Decimal::new(19900, 2),
                stock_quantity: 10,
            },
            NewProduct {
                category_id: 1,
                name: "Tripod".to_string(),
                description: None,
                price: Decimal::new(4900, 2),
                stock_quantity: 25,
            },
            NewProduct {
                category_id: 2,
                name: "Kettle".to_string(),
                description: Some("1.7L electric".to_string()),
                price: Decimal::new(2900, 2),
                stock_quantity: 40,
            },
        ])
        .expect("insert products");
    store
}

fn order_on(customer_id: u64, date: NaiveDate, total_cents: i64) -> NewOrder {
    NewOrder {
        customer_id,
        ordered_at: date.and_hms_opt(9, 30, 0).expect("valid time"),
        customer_name: "snapshot".to_string(),
        total_amount: Decimal::new(total_cents, 2),
    }
}

#[test]
fn daily_revenue_sums_orders_per_date() {
    let mut store = seeded_store();
    let day = NaiveDate::from_ymd_opt(2025, 4, 7).expect("valid date");
    let other_day = NaiveDate::from_ymd_opt(2025, 4, 8).expect("valid date");
    store
        .insert_orders(vec![
            order_on(1, day, 1000),
            order_on(2, day, 2000),
            order_on(1, day, 3000),
            order_on(2, other_day, 500),
        ])
        .expect("insert orders");

    let revenue = store.revenue_for_day(day).expect("revenue row");
    assert_eq!(revenue.orders, 3);
    assert_eq!(revenue.total_revenue, Decimal::new(6000, 2));

    let all = store.daily_revenue();
    assert_eq!(all.len(), 2);
    assert!(all[0].date < all[1].date);
}

#[test]
fn top_products_ranks_by_monthly_revenue() {
    let mut store = seeded_store();
    let in_april = NaiveDate::from_ymd_opt(2025, 4, 10).expect("valid date");
    let in_may = NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date");
    let order_ids = store
        .insert_orders(vec![
            order_on(1, in_april, 0),
            order_on(2, in_april, 0),
            order_on(1, in_may, 0),
        ])
        .expect("insert orders");
    store
        .insert_order_details(vec![
            // April: camera 199.00 x1, tripod 49.00 x3 = 147.00
            NewOrderDetail {
                order_id: order_ids[0],
                product_id: 1,
                unit_price: Decimal::new(19900, 2),
                quantity: 1,
            },
            NewOrderDetail {
                order_id: order_ids[1],
                product_id: 2,
                unit_price: Decimal::new(4900, 2),
                quantity: 3,
            },
            // May sale of the kettle must not count for April.
            NewOrderDetail {
                order_id: order_ids[2],
                product_id: 3,
                unit_price: Decimal::new(2900, 2),
                quantity: 10,
            },
        ])
        .expect("insert details");

    let top = store.top_products(2025, 4, 5);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].product_id, 1);
    assert_eq!(top[0].revenue, Decimal::new(19900, 2));
    assert_eq!(top[1].product_id, 2);
    assert_eq!(top[1].units_sold, 3);

    let top_one = store.top_products(2025, 4, 1);
    assert_eq!(top_one.len(), 1);
}

#[test]
fn big_spenders_applies_threshold_within_month() {
    let mut store = seeded_store();
    let in_april = NaiveDate::from_ymd_opt(2025, 4, 3).expect("valid date");
    store
        .insert_orders(vec![
            order_on(1, in_april, 30000),
            order_on(1, in_april, 25000),
            order_on(2, in_april, 10000),
        ])
        .expect("insert orders");

    let spenders = store.big_spenders(2025, 4, Decimal::new(20000, 2));
    assert_eq!(spenders.len(), 1);
    assert_eq!(spenders[0].customer_id, 1);
    assert_eq!(spenders[0].orders, 2);
    assert_eq!(spenders[0].total_spent, Decimal::new(55000, 2));
    assert_eq!(spenders[0].email, "ana.1@example.com");
}

#[test]
fn search_matches_name_and_description_case_insensitively() {
    let store = seeded_store();

    let hits = store.search_products("CAMERA");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Compact camera");

    let by_description = store.search_products("electric");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].name, "Kettle");

    assert!(store.search_products("drone").is_empty());
}

#[test]
fn related_products_share_category_and_exclude_self() {
    let store = seeded_store();

    let related = store.related_products(1, 10).expect("related products");
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].name, "Tripod");

    let err = store.related_products(99, 10).expect_err("unknown product");
    assert!(matches!(err, StoreError::UnknownRow { .. }));
}
