//! Logging setup.
//!
//! Records go through the `log` facade and are dispatched by `fern` to an
//! in-memory [`LogBuffer`] (shown by the log viewer dialog) and, when enabled
//! in the configuration, to a log file. Nothing is written to stdout while
//! the terminal UI owns the screen.

use crate::config::LoggingConfig;
use crate::constants::LOG_BUFFER_CAPACITY;
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared, bounded buffer of formatted log lines.
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry, dropping the oldest one when full
    pub fn push(&self, line: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == self.capacity {
                entries.pop_front();
            }
            entries.push_back(line);
        }
    }

    /// All entries, newest first
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            entries.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the log file written when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
        .map(|dir| dir.join("folio").join("folio.log"))
}

/// Build the fern dispatch without installing it.
pub fn dispatch(config: &LoggingConfig, buffer: LogBuffer) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    let memory_format = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ))
        })
        .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

    let mut root = fern::Dispatch::new()
        .level(level)
        // HTTP internals are noisy at debug level
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("rustls", log::LevelFilter::Warn)
        .chain(memory_format);

    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        root = root.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}: {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    Ok(root)
}

/// Install the global logger. Call once at startup.
pub fn init(config: &LoggingConfig, buffer: LogBuffer) -> Result<()> {
    dispatch(config, buffer)?
        .apply()
        .context("Failed to install logger")?;
    Ok(())
}
