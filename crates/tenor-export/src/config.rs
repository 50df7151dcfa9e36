//! Export configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Default file name prefix.
pub const DEFAULT_PREFIX: &str = "tenor";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Where and under which name curve files are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving the files; created on first export.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Leading component of every file name.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            prefix: default_prefix(),
        }
    }
}

impl ExportConfig {
    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Sets the file name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}
