use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use payroll_ledger::config::ConfigLoader;
use payroll_ledger::ledger::FileLedger;
use payroll_ledger::terminal::{Prompter, run_session};

/// Compute one employee's pay interactively and append it to the ledger.
///
/// Prompts for the employee's name and category (Tetap or Kontrak), then
/// for base pay and marital status, or hourly rate and hours worked.
#[derive(Parser, Debug)]
#[command(name = "payroll-ledger")]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML file with the rate table and ledger path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ledger file to append to (overrides the configured path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "payroll_ledger=trace" (defaults to RUST_LOG, then "warn")
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Logs go to stderr so prompts on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let mut loader = ConfigLoader::load_or_default(args.config.as_deref())
        .context("Failed to load payroll configuration")?;
    if let Some(output) = &args.output {
        loader = loader.with_ledger_path(output);
    }

    let mut ledger = FileLedger::new(loader.ledger_path());
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    run_session(&mut prompter, &mut ledger, loader.rates()).context("Payroll session aborted")?;

    Ok(())
}
