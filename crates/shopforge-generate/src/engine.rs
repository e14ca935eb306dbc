use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use shopforge_store::MemoryStore;

use crate::assign::assign_line_items;
use crate::errors::GenerationError;
use crate::factories::{
    generate_categories, generate_customers, generate_orders, generate_products,
};
use crate::model::{SeedOptions, SeedReport, StageReport};
use crate::output::csv::export_store_csv;
use crate::reconcile::reconcile_totals;
use crate::verify::verify_dataset;

/// Result of a seed run.
#[derive(Debug, Clone)]
pub struct SeedResult {
    /// Set when `SeedOptions::out_dir` requested run artifacts.
    pub run_dir: Option<PathBuf>,
    pub report: SeedReport,
}

/// Entry point for seeding a store from `SeedOptions`.
#[derive(Debug, Clone)]
pub struct SeedEngine {
    options: SeedOptions,
}

impl SeedEngine {
    pub fn new(options: SeedOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SeedOptions {
        &self.options
    }

    /// Run every stage in dependency order against `store`. Each stage
    /// flushes its whole batch before the next stage reads identifier
    /// snapshots, and a failed stage aborts the run.
    pub fn run(&self, store: &mut MemoryStore) -> Result<SeedResult, GenerationError> {
        let opts = &self.options;
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = SeedReport::new(run_id.clone(), opts.seed);

        info!(
            run_id = %run_id,
            seed = opts.seed,
            customers = opts.customers,
            categories = opts.categories,
            products = opts.products,
            orders = opts.orders,
            "seed run started"
        );

        let stage = Instant::now();
        let mut rng = stage_rng(opts.seed, "categories");
        let written = generate_categories(store, opts.categories, &mut rng)?;
        finish_stage(&mut report, "categories", opts.categories, written, stage);

        let stage = Instant::now();
        let mut rng = stage_rng(opts.seed, "customers");
        let written = generate_customers(store, opts.customers, &mut rng)?;
        finish_stage(&mut report, "customers", opts.customers, written, stage);

        let stage = Instant::now();
        let mut rng = stage_rng(opts.seed, "products");
        let written = generate_products(store, opts.products, &mut rng)?;
        finish_stage(&mut report, "products", opts.products, written, stage);

        let stage = Instant::now();
        let mut rng = stage_rng(opts.seed, "orders");
        let order_ids =
            generate_orders(store, opts.orders, opts.history_days, opts.anchor, &mut rng)?;
        finish_stage(
            &mut report,
            "orders",
            opts.orders,
            order_ids.len() as u64,
            stage,
        );

        let stage = Instant::now();
        let mut rng = stage_rng(opts.seed, "order_details");
        let written = assign_line_items(store, &order_ids, &mut rng)?;
        finish_stage(&mut report, "order_details", opts.orders, written, stage);

        let stage = Instant::now();
        let requested = store.order_count();
        let written = reconcile_totals(store)?;
        finish_stage(&mut report, "reconcile", requested, written, stage);

        if opts.verify {
            verify_dataset(store)?;
        }

        let run_dir = if let Some(out_dir) = &opts.out_dir {
            let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ");
            let run_dir = out_dir.join(format!("{timestamp}__run_{run_id}"));
            std::fs::create_dir_all(&run_dir)?;
            report.bytes_written = export_store_csv(&run_dir, store)?;
            report.duration_ms = start.elapsed().as_millis() as u64;
            std::fs::write(
                run_dir.join("seed_report.json"),
                serde_json::to_vec_pretty(&report)?,
            )?;
            Some(run_dir)
        } else {
            report.duration_ms = start.elapsed().as_millis() as u64;
            None
        };

        info!(
            run_id = %run_id,
            rows_total = report.rows_total,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "seed run completed"
        );

        Ok(SeedResult { run_dir, report })
    }
}

fn finish_stage(
    report: &mut SeedReport,
    stage: &str,
    rows_requested: u64,
    rows_written: u64,
    started: Instant,
) {
    let duration_ms = started.elapsed().as_millis() as u64;
    info!(stage, rows = rows_written, duration_ms, "stage completed");
    report.record_stage(StageReport {
        stage: stage.to_string(),
        rows_requested,
        rows_written,
        duration_ms,
    });
}

fn stage_rng(seed: u64, stage: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed, stage))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
