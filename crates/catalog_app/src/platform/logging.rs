//! Logger setup for the catalog binary.
//!
//! Stdout carries the rendered catalog, so terminal logging goes to stderr and
//! the default destination is a file next to the working directory.

use std::fs::File;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./catalog.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    #[default]
    File,
    /// Stderr only.
    Terminal,
    Both,
}

impl LogDestination {
    fn to_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }

    fn to_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }
}

/// Installs the global logger at the `CATALOG_LOG` level (default `info`).
///
/// An unwritable log file is reported on stderr and skipped.
pub fn initialize(destination: LogDestination) {
    let level = catalog_logging::level_from_env(LevelFilter::Info);
    let loggers = loggers_for(destination, level, catalog_config());
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn loggers_for(
    destination: LogDestination,
    level: LevelFilter,
    config: Config,
) -> Vec<Box<dyn SharedLogger>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.to_file() {
        match File::create(LOG_FILENAME) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("catalog: cannot open {LOG_FILENAME}: {err}"),
        }
    }
    loggers
}

/// Only records from the `catalog_*` crates, timestamped.
fn catalog_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("catalog")
        .build()
}
