//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem once at process start
//! - Write every line to the console and to a timestamped file
//! - Respect RUST_LOG for level configuration

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with a console layer and a file layer.
///
/// The file is named after the start time, e.g. `logs/14-05_31-08-26.log`.
pub fn init(log_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(log_dir)?;
    let file_name = chrono::Local::now().format("%H-%M_%d-%m-%y").to_string();
    let log_file = File::create(log_dir.join(format!("{}.log", file_name)))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sweeper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();

    Ok(())
}
