use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use shopforge_core::{NewCustomer, NewOrder};
use shopforge_generate::factories::{generate_customers, generate_orders, generate_products};
use shopforge_generate::reconcile::reconcile_totals;
use shopforge_generate::{GenerationError, SeedEngine, SeedOptions};
use shopforge_store::MemoryStore;

fn anchor() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

#[test]
fn zero_row_counts_are_invalid_arguments() {
    let mut store = MemoryStore::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = generate_products(&mut store, 0, &mut rng).expect_err("n=0 must fail");
    assert!(matches!(err, GenerationError::InvalidArgument(_)));

    let err = generate_customers(&mut store, 0, &mut rng).expect_err("n=0 must fail");
    assert!(matches!(err, GenerationError::InvalidArgument(_)));
}

#[test]
fn products_before_categories_is_a_missing_precursor() {
    let mut store = MemoryStore::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = generate_products(&mut store, 10, &mut rng).expect_err("no categories must fail");
    assert!(matches!(err, GenerationError::PrecursorMissing(_)));
    assert_eq!(store.product_count(), 0);
}

#[test]
fn orders_before_customers_is_a_missing_precursor() {
    let mut store = MemoryStore::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err =
        generate_orders(&mut store, 10, 365, anchor(), &mut rng).expect_err("no customers");
    assert!(matches!(err, GenerationError::PrecursorMissing(_)));
}

#[test]
fn reconciliation_rejects_orphan_orders() {
    let mut store = MemoryStore::new();
    store
        .insert_customers(vec![NewCustomer {
            email: "ana.1@example.com".to_string(),
            password_hash: "!".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
        }])
        .expect("insert customer");
    let order_ids = store
        .insert_orders(vec![NewOrder {
            customer_id: 1,
            ordered_at: anchor(),
            customer_name: "Ana Silva".to_string(),
            total_amount: Decimal::ZERO,
        }])
        .expect("insert order");

    let err = reconcile_totals(&mut store).expect_err("orphan order must fail");
    match err {
        GenerationError::OrphanOrder(id) => assert_eq!(id, order_ids[0]),
        other => panic!("expected OrphanOrder, got {other}"),
    }
}

#[test]
fn engine_aborts_on_invalid_options() {
    let mut store = MemoryStore::new();
    let options = SeedOptions {
        customers: 10,
        categories: 0,
        products: 10,
        orders: 10,
        seed: 1,
        history_days: 30,
        anchor: anchor(),
        out_dir: None,
        verify: false,
    };

    let err = SeedEngine::new(options)
        .run(&mut store)
        .expect_err("zero categories must abort the run");
    assert!(matches!(err, GenerationError::InvalidArgument(_)));
    // Nothing was inserted by later stages.
    assert_eq!(store.customer_count(), 0);
    assert_eq!(store.order_count(), 0);
}
