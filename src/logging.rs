// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Logging configuration.
//!
//! The terminal belongs to the user interface, so log records only ever go to
//! a file, by default `<data_local_dir>/plsongs/plsongs.log`.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    str::FromStr,
};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::AppConfig;

const LOG_FILE_NAME: &str = "plsongs.log";
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

pub(crate) fn default_log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("plsongs"))
}

/// Resolves the log file from config, falling back to the default location.
pub(crate) fn log_file_path(config: &AppConfig) -> Option<PathBuf> {
    match config.log_file.as_deref().filter(|f| !f.is_empty()) {
        Some(file) => Some(PathBuf::from(file)),
        None => default_log_directory().map(|d| d.join(LOG_FILE_NAME)),
    }
}

/// Unknown level names log at `info`.
pub(crate) fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

/// Installs the global file logger and returns the file it writes to.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is already
/// installed.
pub(crate) fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let log_path = log_file_path(config).context("Could not determine log directory")?;

    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Could not create log directory {}", dir.display()))?;
    }

    // Keep a single previous log around once the current one grows too large
    if let Ok(metadata) = fs::metadata(&log_path) {
        if metadata.len() > MAX_LOG_SIZE {
            let _ = fs::rename(&log_path, log_path.with_extension("log.old"));
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Could not open log file {}", log_path.display()))?;

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level_filter(&config.log_level), log_config, log_file).context("Logger already initialised")?;

    log::info!("=== plsongs session started ===");

    Ok(log_path)
}
