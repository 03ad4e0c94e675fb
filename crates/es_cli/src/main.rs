//! Estate Sim CLI
//!
//! Runs a batch of independent matches and prints the aggregate report.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::Rng;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use es_core::{load_property_names, run_trials, TrialConfig, DEFAULT_TRIALS, STARTING_BUDGET};

#[derive(Parser)]
#[command(name = "es_cli")]
#[command(about = "Simulate personality trial batches of the estate board game", long_about = None)]
struct Cli {
    /// Number of independent matches to simulate
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: u32,

    /// Base RNG seed; the same seed reproduces the same batch
    #[arg(long)]
    seed: Option<u64>,

    /// Property name list, one name per line (20 lines expected)
    #[arg(long, default_value = "properties.txt")]
    catalog: PathBuf,

    /// Emit the aggregate as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let config = TrialConfig {
        trials: cli.trials,
        seed,
        starting_budget: STARTING_BUDGET,
        property_names: load_property_names(&cli.catalog),
    };

    let stats = run_trials(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats.render_report(cli.trials));
    }
    Ok(())
}

/// Dev diagnostics via `RUST_LOG`, output to stderr. Defaults to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
