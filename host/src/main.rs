use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sponge_proof_export::{export_all, ExportConfig};

const CIRCUITS_DIR: &str = "circuits-privacy";

#[derive(Debug, Parser)]
#[command(name = "sponge-export-proofs")]
#[command(about = "Export circuit proofs and public inputs as hex JSON for verifier tests")]
struct Cli {
    /// Circuit directories to export (relative to the base dir).
    /// Defaults to deposit, transfer and withdraw.
    circuits: Vec<String>,

    /// Root directory containing circuit folders.
    #[arg(long, default_value_os_t = default_base_dir())]
    base_dir: PathBuf,
}

fn default_base_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")))
        .join(CIRCUITS_DIR)
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sponge_export_host=info,sponge_proof_export=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ExportConfig::new(cli.base_dir, cli.circuits);
    tracing::info!(
        base_dir = %config.base_dir.display(),
        circuits = ?config.circuits,
        "exporting proofs"
    );

    let report = export_all(&config)
        .with_context(|| format!("failed exporting proofs from {}", config.base_dir.display()))?;

    let encoded = serde_json::to_string_pretty(&report).context("failed encoding report")?;
    println!("{encoded}");

    Ok(())
}
