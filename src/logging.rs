// File: src/logging.rs
// Installs the file logger. Only the binary calls this; library code just
// uses the `log` macros.
use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;

/// Appends debug-level, timestamped records to `logfile`.
pub fn init(logfile: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(logfile)
        .with_context(|| format!("Failed to open log file '{}'", logfile.display()))?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        // hyper/rustls are chatty at debug level
        .add_filter_allow_str("sciopero")
        .build();

    WriteLogger::init(LevelFilter::Debug, config, file).context("Failed to install logger")?;
    Ok(())
}
