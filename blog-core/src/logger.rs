//! Tracing initialization: stdout and the log file share one fmt layer (level, target, span close events, fields).

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{CoreError, Result};

/// Installs the global tracing subscriber.
///
/// Output is teed to stdout and `log_file_path`; the parent directory is created when missing.
/// The level comes from `RUST_LOG` (e.g. `info`, `debug`, `storage=trace`) and defaults to `info`.
/// Load `.env` (`dotenvy::dotenv()`) before calling this, otherwise `RUST_LOG` from the file is ignored.
pub fn init_tracing(log_file_path: &str) -> Result<()> {
    let log_file = open_log_file(Path::new(log_file_path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let output = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout.and(log_file))
        .with_span_events(FmtSpan::CLOSE)
        .with_thread_ids(true);

    Registry::default()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(|e| CoreError::Tracing(format!("Failed to set global subscriber: {}", e)))
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<Arc<File>> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
        _ => {}
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Arc::new(file))
}
