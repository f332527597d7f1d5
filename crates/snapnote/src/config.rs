//! Configuration management for snapnote.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "snapnote";

/// Default storage file name, created in the working directory.
const STORAGE_FILE_NAME: &str = "text_data.txt";

/// Default static image drawn onto the render target at preview start.
const IMAGE_FILE_NAME: &str = "img3.jpg";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SNAPNOTE_`)
/// 2. TOML config file at `~/.config/snapnote/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ingest server configuration.
    pub server: ServerConfig,
    /// Capture preview configuration.
    pub capture: CaptureConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Ingest-server-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the ingest endpoint listens on.
    pub listen: String,
}

/// Capture-preview-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Interval between live frame snapshots in milliseconds.
    pub snapshot_interval_ms: u64,
    /// Width of frames requested from the source.
    pub frame_width: u32,
    /// Height of frames requested from the source.
    pub frame_height: u32,
    /// Path to the static image drawn at preview start.
    pub image_path: PathBuf,
    /// Video device path used by the camera source.
    pub device: PathBuf,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the storage file.
    /// Defaults to `text_data.txt` in the working directory.
    pub path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8087".to_string(),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snapshot_interval_ms: 2000,
            frame_width: 640,
            frame_height: 480,
            image_path: PathBuf::from(IMAGE_FILE_NAME),
            device: PathBuf::from("/dev/video0"),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `SNAPNOTE_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("SNAPNOTE_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.capture.snapshot_interval_ms == 0 {
            return Err(Error::ConfigValidation {
                message: "snapshot_interval_ms must be greater than 0".to_string(),
            });
        }

        if self.capture.frame_width == 0 || self.capture.frame_height == 0 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "frame dimensions must be non-zero, got {}x{}",
                    self.capture.frame_width, self.capture.frame_height
                ),
            });
        }

        if self.server.listen.parse::<SocketAddr>().is_err() {
            return Err(Error::ConfigValidation {
                message: format!("invalid listen address: {}", self.server.listen),
            });
        }

        Ok(())
    }

    /// Get the listen address as a parsed socket address.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured address does not parse.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.server
            .listen
            .parse()
            .map_err(|_| Error::ConfigValidation {
                message: format!("invalid listen address: {}", self.server.listen),
            })
    }

    /// Get the storage file path, resolving the default if not set.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(STORAGE_FILE_NAME))
    }

    /// Get the snapshot interval as a Duration.
    #[must_use]
    pub fn snapshot_interval(&self) -> Duration {
        Duration::from_millis(self.capture.snapshot_interval_ms)
    }
}
