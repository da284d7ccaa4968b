//! Logger installation. The terminal belongs to the UI, so records go to a
//! file or nowhere.

use std::fs::OpenOptions;
use std::str::FromStr;

use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Parse a level name, case-insensitively.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level).map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Build a logger for `config`, or `None` when no file is configured.
pub fn build(config: &LoggingConfig) -> Result<Option<env_logger::Logger>, LoggingError> {
    let level = parse_level(&config.level)?;
    let Some(path) = &config.file else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::FileOpen {
            path: path.clone(),
            source: e,
        })?;

    let logger = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .build();
    Ok(Some(logger))
}

/// Install the global logger. Returns whether one was installed.
pub fn init(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(logger) = build(config)? else {
        return Ok(false);
    };

    let level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(true)
}
