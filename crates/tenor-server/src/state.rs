//! Application state.

use std::sync::Arc;

use tenor_analytics::tools::{CurveRows, ToolSettings};
use tenor_export::{CurveExporter, ExportedFiles};

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,

    /// Curve file writer.
    pub exporter: Arc<CurveExporter>,
}

impl AppState {
    /// Create state from a configuration.
    pub fn new(config: ServerConfig) -> Self {
        let exporter = CurveExporter::new(config.export_config());
        Self {
            config: Arc::new(config),
            exporter: Arc::new(exporter),
        }
    }

    /// Defaults for tool requests.
    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings {
            sample_points: self.config.sample_points,
        }
    }

    /// Writes curve rows off the async runtime.
    pub async fn export(&self, rows: CurveRows) -> ApiResult<ExportedFiles> {
        let exporter = Arc::clone(&self.exporter);
        tokio::task::spawn_blocking(move || exporter.export(&rows))
            .await
            .map_err(|e| ApiError::Internal(format!("export task failed: {e}")))?
            .map_err(ApiError::from)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
