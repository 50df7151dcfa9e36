//! Server configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tenor_export::ExportConfig;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory receiving exported curve files
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Leading component of exported file names
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,

    /// Spline samples when a splice request does not set its own
    #[serde(default = "default_sample_points")]
    pub sample_points: usize,

    /// Largest accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(tenor_export::config::DEFAULT_OUTPUT_DIR)
}

fn default_export_prefix() -> String {
    tenor_export::config::DEFAULT_PREFIX.to_string()
}

fn default_sample_points() -> usize {
    tenor_curves::splice::DEFAULT_SAMPLE_POINTS
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            export_dir: default_export_dir(),
            export_prefix: default_export_prefix(),
            sample_points: default_sample_points(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Applies `TENOR_HOST` and `TENOR_PORT` from the process environment.
    pub fn with_env_overrides(mut self) -> Result<Self, std::io::Error> {
        self.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(self)
    }

    /// Applies `TENOR_HOST` and `TENOR_PORT` as returned by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), std::io::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TENOR_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("TENOR_PORT") {
            self.port = port.parse().map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("TENOR_PORT={port} is not a valid port: {e}"),
                )
            })?;
        }
        Ok(())
    }

    /// Export settings derived from this configuration.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig::default()
            .with_output_dir(&self.export_dir)
            .with_prefix(self.export_prefix.clone())
    }
}
