use chrono::NaiveDate;
use rust_decimal::Decimal;

use shopforge_generate::{SeedEngine, SeedOptions};
use shopforge_store::MemoryStore;

fn small_options() -> SeedOptions {
    SeedOptions {
        customers: 500,
        categories: 100,
        products: 1_000,
        orders: 2_000,
        seed: 7,
        history_days: 1825,
        anchor: NaiveDate::from_ymd_opt(2025, 6, 1)
            .expect("valid date")
            .and_hms_opt(0, 0, 0)
            .expect("valid time"),
        out_dir: None,
        verify: true,
    }
}

#[test]
fn end_to_end_seed_upholds_all_invariants() {
    let mut store = MemoryStore::new();
    let engine = SeedEngine::new(small_options());
    let result = engine.run(&mut store).expect("seed run");

    assert_eq!(store.category_count(), 100);
    assert_eq!(store.customer_count(), 500);
    assert_eq!(store.product_count(), 1_000);
    assert_eq!(store.order_count(), 2_000);
    assert_eq!(store.order_detail_count(), 2_000);
    assert_eq!(result.report.stages.len(), 6);
    assert!(result.run_dir.is_none());

    for product in store.products() {
        assert!(
            store.category(product.category_id).is_some(),
            "product {} has dangling category",
            product.id
        );
        assert!(product.price >= Decimal::ZERO);
    }

    for order in store.orders() {
        let customer = store
            .customer(order.customer_id)
            .unwrap_or_else(|| panic!("order {} has dangling customer", order.id));
        assert_eq!(order.customer_name, customer.full_name());

        let details = store.order_details_for(order.id);
        assert_eq!(details.len(), 1, "exactly one line item per order");
        let expected: Decimal = details.iter().map(|detail| detail.line_total()).sum();
        assert_eq!(order.total_amount, expected.round_dp(2));
    }

    for detail in store.order_details() {
        assert!(store.order(detail.order_id).is_some());
        let product = store
            .product(detail.product_id)
            .unwrap_or_else(|| panic!("detail {} has dangling product", detail.id));
        // No product price changed after assignment, so the snapshot still
        // matches the live price.
        assert_eq!(detail.unit_price, product.price);
        assert!((1..=10).contains(&detail.quantity));
    }
}

#[test]
fn order_timestamps_stay_inside_the_historical_window() {
    let mut store = MemoryStore::new();
    let options = small_options();
    let anchor = options.anchor;
    let floor = anchor - chrono::Duration::days(options.history_days);
    SeedEngine::new(options).run(&mut store).expect("seed run");

    for order in store.orders() {
        assert!(order.ordered_at <= anchor);
        assert!(order.ordered_at >= floor);
    }
}

#[test]
fn reconciliation_is_a_stable_fixed_point() {
    let mut store = MemoryStore::new();
    SeedEngine::new(small_options())
        .run(&mut store)
        .expect("seed run");

    let before: Vec<(u64, Decimal)> = store
        .orders()
        .map(|order| (order.id, order.total_amount))
        .collect();

    shopforge_generate::reconcile::reconcile_totals(&mut store).expect("second reconcile");

    let after: Vec<(u64, Decimal)> = store
        .orders()
        .map(|order| (order.id, order.total_amount))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn daily_revenue_matches_the_order_totals() {
    let mut store = MemoryStore::new();
    SeedEngine::new(small_options())
        .run(&mut store)
        .expect("seed run");

    let from_orders: Decimal = store.orders().map(|order| order.total_amount).sum();
    let from_report: Decimal = store
        .daily_revenue()
        .iter()
        .map(|day| day.total_revenue)
        .sum();
    assert_eq!(from_orders, from_report);
}
