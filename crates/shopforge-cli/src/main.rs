use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use shopforge_generate::model::default_anchor;
use shopforge_generate::{GenerationError, SeedEngine, SeedOptions};
use shopforge_store::MemoryStore;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging init failed: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "shopforge", version, about = "Deterministic e-commerce fixture generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed a dataset and write run artifacts.
    Seed(SeedArgs),
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Customers to generate.
    #[arg(long, default_value_t = 1_000_000)]
    customers: u64,
    /// Categories to generate.
    #[arg(long, default_value_t = 100)]
    categories: u64,
    /// Products to generate.
    #[arg(long, default_value_t = 100_000)]
    products: u64,
    /// Orders to generate; each gets exactly one order detail.
    #[arg(long, default_value_t = 2_500_000)]
    orders: u64,
    /// Root seed; pin together with --anchor to reproduce a run.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Width of the historical window for order timestamps, in days.
    #[arg(long, default_value_t = 1825)]
    history_days: i64,
    /// Upper bound of the historical window (defaults to today, UTC).
    #[arg(long, value_name = "YYYY-MM-DD")]
    anchor: Option<NaiveDate>,
    /// Directory for run artifacts (CSV exports + seed report).
    #[arg(long, default_value = "runs")]
    out_dir: PathBuf,
    /// Skip the post-run invariant sweep.
    #[arg(long, default_value_t = false)]
    no_verify: bool,
}

fn main() -> Result<(), CliError> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Seed(args) => run_seed(args),
    }
}

fn run_seed(args: SeedArgs) -> Result<(), CliError> {
    let anchor = args
        .anchor
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_else(default_anchor);

    let options = SeedOptions {
        customers: args.customers,
        categories: args.categories,
        products: args.products,
        orders: args.orders,
        seed: args.seed,
        history_days: args.history_days,
        anchor,
        out_dir: Some(args.out_dir),
        verify: !args.no_verify,
    };

    let mut store = MemoryStore::new();
    let result = SeedEngine::new(options).run(&mut store)?;

    println!("{}", serde_json::to_string_pretty(&result.report)?);
    if let Some(run_dir) = result.run_dir {
        println!("artifacts written to {}", run_dir.display());
    }
    Ok(())
}

fn init_logging() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
