mod engine;
mod indices;
mod input;
mod mapper;
mod model;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::engine::compute_all_indices;
use crate::input::{InputError, load_config, load_payload};
use crate::mapper::Capabilities;
use crate::model::config::EngineConfig;

#[derive(Debug, Parser)]
#[command(name = "psyindex", version, about = "Deterministic psychometric index computation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute all indices for one assessment payload.
    Run(RunArgs),
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Assessment payload JSON.
    #[arg(long)]
    input: PathBuf,
    /// Report destination; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Optional engine tuning overrides (JSON, partial).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputMode::Json)]
    mode: OutputMode,
    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    Json,
    Text,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), InputError> {
    let payload = load_payload(&args.input)?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default_v1(),
    };

    let report = compute_all_indices(&payload, &config, &Capabilities::builtin());

    let rendered = match args.mode {
        OutputMode::Json => report::render_json(&report, args.pretty),
        OutputMode::Text => report::text::render_report_text(&report),
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
