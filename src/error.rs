use std::path::PathBuf;

/// Reasons a token drop is rejected. None of them mutate the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game already finished")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    #[error("logger already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull { column: 4 }.to_string(),
            "column 4 is full"
        );
        assert_eq!(
            MoveError::InvalidColumn { column: 9 }.to_string(),
            "column 9 is out of range"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game already finished");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.start_column must be < 7".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.start_column must be < 7"
        );
    }

    #[test]
    fn test_logging_error_display() {
        let err = LoggingError::InvalidLevel("loud".to_string());
        assert_eq!(err.to_string(), "invalid log level 'loud'");
    }
}
