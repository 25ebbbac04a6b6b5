//! Error types for view configuration.

use thiserror::Error;

/// Errors that can occur while loading or applying a [`ViewConfig`](crate::ViewConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The configured cask pattern is not a valid regex.
    #[error("invalid cask pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
