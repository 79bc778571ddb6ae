//! Platform logging initialization for the sticky widget.
//!
//! Writes logs to `sticky.log` in the data directory, falling back to the
//! current working directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILENAME: &str = "sticky.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to `sticky.log`.
    File,
    /// Write to terminal (stdout).
    #[allow(dead_code)]
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    /// Terminal and file in debug builds; file only once the console is gone.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            LogDestination::Both
        } else {
            LogDestination::File
        }
    }
}

/// Level from `STICKY_LOG`, `info` when unset or unrecognized.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(sticky_logging::parse_level)
        .unwrap_or(LevelFilter::Info)
}

/// Initialize the logger with the specified destination.
pub fn initialize(destination: LogDestination, level: LevelFilter, log_dir: Option<&Path>) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config, log_dir) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(level, config, log_dir) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn log_path(log_dir: Option<&Path>) -> PathBuf {
    match log_dir {
        Some(dir) if fs::create_dir_all(dir).is_ok() => dir.join(LOG_FILENAME),
        _ => PathBuf::from(".").join(LOG_FILENAME),
    }
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_dir: Option<&Path>,
) -> Option<Box<WriteLogger<File>>> {
    let log_path = log_path(log_dir);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
