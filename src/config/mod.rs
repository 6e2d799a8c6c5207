//! Runtime settings for the observatory client.
//!
//! Settings are read from a TOML file, by default
//! `<config dir>/observatory/config.toml`. Every key is optional:
//!
//! ```toml
//! base_url = "https://observatorio.example.org/api/"
//! utc_offset_hours = -3
//! request_timeout_secs = 30
//! fetch_neighbour_days = true
//! ```

pub mod error;

use crate::config::error::ConfigError;
use crate::resolver::decoder::UtcOffset;
use bon::Builder;
use log::{debug, info};
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_DIR_NAME: &str = "observatory";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[serde(default, deny_unknown_fields)]
pub struct ObservatoryConfig {
    /// Root of the backend API; the listing endpoint is `<base_url>productos/`.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    /// Whole-hour offset of local time from UTC. Córdoba is UTC-3.
    #[builder(default = -3)]
    pub utc_offset_hours: i32,
    /// Per-request timeout in seconds. Must be non-zero.
    #[builder(default = 30)]
    pub request_timeout_secs: u64,
    /// Also fetch the previous and next day so forecasts crossing midnight resolve.
    #[builder(default = true)]
    pub fetch_neighbour_days: bool,
}

impl Default for ObservatoryConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ObservatoryConfig {
    /// Reads settings from a TOML file. Missing keys take their defaults.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config: ObservatoryConfig =
            toml::from_str(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reads the file at [`ObservatoryConfig::default_path`], falling back to the
    /// defaults when it does not exist.
    pub async fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        match Self::load(&path).await {
            Err(ConfigError::Read(_, e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// `<config dir>/observatory/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigDirResolution`] if the platform has no config
    /// directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .ok_or(ConfigError::ConfigDirResolution)
            .map(|p| p.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Checks every setting that has a restricted range.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidUtcOffset`] if the offset is outside -12..=14 hours.
    /// * [`ConfigError::ZeroRequestTimeout`] if `request_timeout_secs` is 0, which
    ///   would fail every request immediately.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.utc_offset()?;
        self.request_timeout()?;
        Ok(())
    }

    /// The validated local offset.
    pub fn utc_offset(&self) -> Result<UtcOffset, ConfigError> {
        UtcOffset::from_hours(self.utc_offset_hours)
            .ok_or(ConfigError::InvalidUtcOffset(self.utc_offset_hours))
    }

    /// The validated per-request timeout.
    pub fn request_timeout(&self) -> Result<Duration, ConfigError> {
        match self.request_timeout_secs {
            0 => Err(ConfigError::ZeroRequestTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
