//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so tracing output goes to a file in the
//! platform data directory instead of stdout. The session log pane is
//! separate state and never touches disk.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lumenpool")
}

/// Route tracing events to `<data-dir>/lumenpool/lumenpool.log`. Call once
/// at startup; the caller may ignore failures and run without diagnostics.
pub fn init() -> Result<()> {
    let dir = log_dir();
    fs::create_dir_all(&dir)?;
    let file = File::create(dir.join("lumenpool.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}
