use clap::Parser;
use memlat::config::Config;
use memlat::domain::reference::boundaries;
use memlat::infrastructure::dataset::load_table;
use memlat::interfaces::chart::ChartSpec;
use memlat::interfaces::viewer;
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Memory-access latency chart viewer", long_about = None)]
struct Args {
    /// Path to the measurement CSV (overrides MEMLAT_INPUT)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Page threshold in bytes (overrides MEMLAT_PAGE_THRESHOLD_BYTES)
    #[arg(long)]
    page_threshold: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(page_threshold) = args.page_threshold {
        config.page_threshold_bytes = page_threshold;
    }

    info!("Loading measurements from {}", config.input_path.display());
    let table = load_table(&config.input_path)?;
    info!("Loaded {} samples", table.len());

    let spec = ChartSpec::build(&table, boundaries(&config));

    // Blocks until the window is closed
    viewer::run(spec)
}
