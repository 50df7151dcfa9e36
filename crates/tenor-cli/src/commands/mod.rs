//! CLI command implementations.

pub mod curves;
pub mod fra;
pub mod rates;

pub use curves::{BootstrapArgs, ForwardArgs, SpliceArgs};
pub use fra::FraArgs;
pub use rates::{BondPriceArgs, ConvertArgs};

use std::path::Path;

use tenor_analytics::tools::ToolOutput;
use tenor_export::{CurveExporter, ExportConfig, ExportedFiles};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::print_output;

/// Options shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and notices.
    pub quiet: bool,
}

/// Writes the curve of `output` under `dir`, if both are present.
pub fn export_curve(output: &ToolOutput, dir: Option<&Path>) -> CliResult<Option<ExportedFiles>> {
    let (Some(dir), Some(rows)) = (dir, output.curve.as_ref()) else {
        return Ok(None);
    };
    let exporter = CurveExporter::new(ExportConfig::default().with_output_dir(dir));
    Ok(Some(exporter.export(rows)?))
}

/// Exports when requested, then prints.
pub fn finish(title: &str, output: &ToolOutput, export_dir: Option<&Path>, ctx: Context) -> anyhow::Result<()> {
    let files = export_curve(output, export_dir)?;
    print_output(title, output, files.as_ref(), ctx.format, ctx.quiet)
}
