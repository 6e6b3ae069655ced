//! Platform logging initialization for news_app.
//!
//! The terminal is the UI, so logs go to `./news_app.log` by default.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

pub const LOG_FILE: &str = "./news_app.log";

/// Initialize the global logger. The level comes from `NEWS_LOG` (default info).
///
/// A log file that cannot be created leaves logging disabled.
pub fn initialize(path: &Path) {
    let level = news_logging::level_from_env(LevelFilter::Info);
    if let Some(file_logger) = create_file_logger(path, level, build_config()) {
        let _ = CombinedLogger::init(vec![file_logger as Box<dyn SharedLogger>]);
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
