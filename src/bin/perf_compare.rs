//! Runs every inefficient/optimized pair once and prints the speedups.
//!
//! Every trial does as many iterations as its label states, so the default
//! "Global Lookups (n=2000)" trial loops 2000 times. For the lighter
//! 1000-iteration lookup workload, set `lookup_n = 1000` in a `--config` file.
//!
//! Run with: cargo run --release --bin perf-compare

use clap::Parser;
use perf_patterns::{run_suite, BenchConfig, Runner};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "perf-compare", about = "Time inefficient vs optimized implementations")]
struct Cli {
    /// TOML file with trial sizes
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also run the key-check and file-write trials
    #[arg(long)]
    extended: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Colorize speedup values
    #[arg(long)]
    color: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> perf_patterns::Result<()> {
    let mut config = match &cli.config {
        Some(path) => BenchConfig::from_file(path)?,
        None => BenchConfig::default(),
    };
    config.extended |= cli.extended;
    config.color |= cli.color;
    config.validate()?;

    if config.color {
        colored::control::set_override(true);
    }

    if cli.json {
        let report = Runner::new(config, io::sink()).run()?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", report.to_json()?)?;
        return Ok(());
    }

    run_suite(&config)?;
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
