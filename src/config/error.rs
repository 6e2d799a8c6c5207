use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Failed to determine config directory")]
    ConfigDirResolution,

    #[error("UTC offset {0} is outside -12..=14 hours")]
    InvalidUtcOffset(i32),

    #[error("Request timeout must be at least one second")]
    ZeroRequestTimeout,
}
