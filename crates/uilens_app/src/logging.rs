//! Logging initialization for the uilens binary.
//!
//! The terminal belongs to the TUI, so logs go to `./uilens.log`.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

const LOG_FILENAME: &str = "./uilens.log";

/// Initialize the file logger. Logging is best-effort: if the log file
/// cannot be created the facade stays uninitialized and log calls no-op.
pub fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    match File::create(PathBuf::from(LOG_FILENAME)) {
        Ok(file) => {
            let _ = WriteLogger::init(level, config, file);
        }
        Err(err) => {
            eprintln!("Warning: could not create log file at {LOG_FILENAME}: {err}");
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
