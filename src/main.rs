//! EVM batch fund sweeper.
//!
//! # Architecture Overview
//!
//! ```text
//!   sweeper.toml ──► config ──────────────┐
//!   stdin ────────► prompt (BatchConfig)  │
//!   input files ──► account loader        │
//!                        │                ▼
//!                        ▼          ┌────────────┐   per account   ┌──────────────┐
//!                   Vec<Account> ──►│orchestrator│────────────────►│ChainClient   │
//!                                   │ (sequence, │  proxy resolve  │ (alloy RPC,  │
//!                                   │  pacing)   │                 │  opt. proxy) │
//!                                   └─────┬──────┘                 └──────┬───────┘
//!                                         │                               │
//!                                         ▼                               ▼
//!                                   TransferEngine ── token sweep ── native sweep
//!                                         │
//!                                         ▼
//!                            tracing (console + timestamped file)
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use sweeper::account::loader::load_accounts;
use sweeper::config::loader::load_or_default;
use sweeper::lifecycle::Interrupt;
use sweeper::sweep::{Orchestrator, RpcClientFactory};
use sweeper::{observability, prompt};

#[derive(Parser, Debug)]
#[command(name = "sweeper", about = "Batch fund sweeper for EVM chains")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "sweeper.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = observability::init(Path::new("logs")) {
        eprintln!("failed to initialize logging: {}", e);
        return;
    }

    tracing::info!("sweeper v0.1.0 starting");

    // The top-level handler logs and lets the process end with code 0.
    if let Err(e) = run(&args).await {
        tracing::error!(error = %e, "Unexpected error");
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_or_default(&args.config)?;
    tracing::info!(
        rpc_url = %config.network.rpc_url,
        token = %config.token.symbol,
        "Configuration loaded"
    );

    let batch = prompt::batch_config()?;
    let accounts = load_accounts(&config.inputs)?;

    let interrupt = Interrupt::new();
    interrupt.install();

    let factory = RpcClientFactory::new(config.clone())?;
    let orchestrator = Orchestrator::new(factory, config, batch, interrupt);
    orchestrator.process_batch(accounts).await;

    Ok(())
}
