use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Options for a seed run. Row-count defaults match the documented fixture
/// scale; tests use much smaller counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOptions {
    pub customers: u64,
    pub categories: u64,
    pub products: u64,
    /// Order headers to create; each gets exactly one order detail.
    pub orders: u64,
    /// Root seed; every stage derives its own RNG from it.
    pub seed: u64,
    /// Width of the historical window order timestamps are sampled from.
    pub history_days: i64,
    /// Upper bound of the historical window. Pin this together with `seed`
    /// to reproduce a run byte for byte.
    pub anchor: NaiveDateTime,
    /// When set, the run writes CSV exports and a report into a fresh
    /// directory underneath it.
    pub out_dir: Option<PathBuf>,
    /// Run the invariant sweep after reconciliation.
    pub verify: bool,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            customers: 1_000_000,
            categories: 100,
            products: 100_000,
            orders: 2_500_000,
            seed: 42,
            history_days: 1825,
            anchor: default_anchor(),
            out_dir: None,
            verify: true,
        }
    }
}

/// Midnight of the current UTC date.
pub fn default_anchor() -> NaiveDateTime {
    chrono::Utc::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
}

/// Summary of one pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: String,
    pub rows_requested: u64,
    pub rows_written: u64,
    pub duration_ms: u64,
}

/// Report for a seed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub run_id: String,
    pub seed: u64,
    pub stages: Vec<StageReport>,
    pub rows_total: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl SeedReport {
    pub fn new(run_id: String, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            stages: Vec::new(),
            rows_total: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_stage(&mut self, stage: StageReport) {
        self.rows_total += stage.rows_written;
        self.stages.push(stage);
    }
}
