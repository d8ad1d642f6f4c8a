mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use demoseed_core::{Error as CoreError, SeedConfig, load_config};
use demoseed_eval::{EvalError, EvaluateOptions, EvaluationEngine};
use demoseed_generate::{GenerateOptions, GenerationEngine, GenerationError};
use logging::init_logging;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("verification error: {0}")]
    Eval(#[from] EvalError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "demoseed", version, about = "Demo tenant seed data generator")]
struct Cli {
    /// Append NDJSON logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate clients, orders and order items as CSV.
    Generate(GenerateArgs),
    /// Check a generated dataset for broken keys and totals.
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML file overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory for the CSV files.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// RNG seed for a reproducible dataset.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of orders.
    #[arg(long)]
    orders: Option<usize>,
    /// Number of clients.
    #[arg(long)]
    clients: Option<usize>,
    /// Fake-data locale (es_AR, en_US, pt_BR).
    #[arg(long)]
    locale: Option<String>,
    /// Write the generation report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// TOML file the dataset was generated with.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the CSV files.
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Write the evaluation report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Maximum violations listed in the report.
    #[arg(long, default_value_t = 100)]
    max_violations: usize,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref()).map_err(CliError::Logging)?;

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Verify(args) => run_verify(args),
    }
}

fn resolve_config(path: Option<&PathBuf>) -> Result<SeedConfig, CliError> {
    match path {
        Some(path) => {
            tracing::info!(event = "config_loaded", path = %path.display());
            Ok(load_config(path)?)
        }
        None => Ok(SeedConfig::default()),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        config,
        out_dir,
        seed,
        orders,
        clients,
        locale,
        report,
    } = args;

    let mut config = resolve_config(config.as_ref())?;
    if let Some(out_dir) = out_dir {
        config.output.dir = out_dir;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(orders) = orders {
        config.order_count = orders;
    }
    if let Some(clients) = clients {
        config.client_count = clients;
    }
    if let Some(locale) = locale {
        config.locale = locale;
    }

    let engine = GenerationEngine::new(GenerateOptions {
        report_path: report,
    });
    let result = engine.run(&config)?;

    println!(
        "Generated {} orders ({} items) for {} clients into {} (seed {})",
        result.report.orders,
        result.report.items,
        result.report.clients,
        config.output.dir.display(),
        result.report.seed
    );
    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<(), CliError> {
    let config = resolve_config(args.config.as_ref())?;
    let dir = args.dir.unwrap_or_else(|| config.output.dir.clone());

    let engine = EvaluationEngine::new(EvaluateOptions {
        max_violations: args.max_violations,
    });
    let report = engine.run(&dir, &config)?;

    if let Some(path) = &args.report {
        std::fs::write(path, serde_json::to_vec_pretty(&report)?)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    for violation in &report.violations {
        tracing::warn!(
            check = %violation.check,
            entity = %violation.entity,
            id = violation.id.as_deref().unwrap_or("-"),
            "{}",
            violation.message
        );
    }

    println!(
        "Verified {}: {} clients, {} orders, {} items, {} violation(s)",
        dir.display(),
        report.rows.clients,
        report.rows.orders,
        report.rows.items,
        report.violations_total
    );

    if report.is_clean() {
        Ok(())
    } else {
        Err(EvalError::Violations(report.violations_total).into())
    }
}
