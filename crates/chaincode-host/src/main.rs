//! Chaincode host CLI.
//!
//! Loads (or creates) a ledger snapshot, replays a script against one
//! contract, prints one JSON result per call to stdout and saves the
//! snapshot. Logs go to stderr.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use chain_telemetry::{init_telemetry, TelemetryConfig};
use chaincode_host::{parse_script, ChaincodeHost, ContractKind, ContractRegistry};
use shared_ledger::{LedgerConfig, SnapshotFile};

/// Replay invocation scripts against a contract.
#[derive(Parser, Debug)]
#[command(name = "chaincode-host")]
#[command(about = "Replay chaincode invocation scripts against a snapshot-backed ledger")]
struct Args {
    /// Contract to deploy
    #[arg(short, long, value_enum)]
    contract: ContractKind,

    /// Ledger snapshot, created on first run
    #[arg(short, long)]
    state: PathBuf,

    /// Role identities as JSON; environment variables are used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive, overrides PC_LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Script with one JSON invocation per line
    script: PathBuf,
}

fn load_config(path: Option<&PathBuf>) -> Result<LedgerConfig> {
    let Some(path) = path else {
        return Ok(LedgerConfig::from_env());
    };
    let raw = fs::read(path).with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::for_contract(&args.contract.to_string());
    if let Some(level) = &args.log_level {
        telemetry = telemetry.with_level(level.as_str());
    }
    let _telemetry = init_telemetry(telemetry).context("failed to initialize telemetry")?;

    let config = load_config(args.config.as_ref())?;
    config.validate().context("invalid role configuration")?;

    let registry = ContractRegistry::new(config);
    let contract = registry
        .get(args.contract)
        .with_context(|| format!("contract {} is not registered", args.contract))?;

    let snapshot = SnapshotFile::new(&args.state);
    let host = ChaincodeHost::open(contract, &snapshot)
        .with_context(|| format!("failed to open ledger at {}", args.state.display()))?;

    let text = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let entries = parse_script(&text)?;
    info!(calls = entries.len(), "replaying script");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;
    for entry in &entries {
        let result = host.execute(entry);
        if !result.ok {
            failed += 1;
        }
        serde_json::to_writer(&mut out, &result)?;
        writeln!(out)?;
    }
    out.flush()?;

    if failed > 0 {
        warn!(failed, total = entries.len(), "some calls failed");
    }

    host.save(&snapshot)
        .with_context(|| format!("failed to save ledger to {}", args.state.display()))?;
    Ok(())
}
