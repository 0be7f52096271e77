//! Logging setup.
//!
//! Timestamped lines go to the console and are appended to a per-process log
//! file. The file layer is best effort: if the log file cannot be opened the
//! failure is reported on stderr and logging continues console-only; a
//! logging failure never aborts the caller.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Called once at process start by each
/// binary.
pub fn init(log_file: &Path) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,linekv=debug"));

    let console = fmt::layer().with_target(false);

    let file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => Some(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        ),
        Err(e) => {
            eprintln!("Failed to log to file {}: {}", log_file.display(), e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();
}
