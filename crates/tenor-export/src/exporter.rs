//! Curve file writer.

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use tenor_analytics::tools::CurveRows;
use uuid::Uuid;

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};

/// Paths of one export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFiles {
    /// CSV file.
    pub csv: PathBuf,
    /// XLSX file.
    pub xlsx: PathBuf,
}

/// Writes curve rows to a CSV and an XLSX file under a unique stem.
///
/// Each call draws a fresh v4 UUID, so concurrent exports into the same
/// directory never share a file name.
#[derive(Debug, Clone, Default)]
pub struct CurveExporter {
    config: ExportConfig,
}

impl CurveExporter {
    /// Creates an exporter.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Writes `rows` as `<dir>/<prefix>_<kind>_<uuid>.{csv,xlsx}`.
    ///
    /// Either both files exist afterwards or neither does.
    pub fn export(&self, rows: &CurveRows) -> ExportResult<ExportedFiles> {
        let kind = rows.kind().as_str();
        if rows.is_empty() {
            return Err(ExportError::Empty { kind });
        }

        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;

        let stem = format!("{}_{}_{}", self.config.prefix, kind, Uuid::new_v4().simple());
        let files = ExportedFiles {
            csv: dir.join(format!("{stem}.csv")),
            xlsx: dir.join(format!("{stem}.xlsx")),
        };

        write_csv(&files.csv, rows)?;
        if let Err(err) = write_xlsx(&files.xlsx, rows) {
            if let Err(cleanup) = fs::remove_file(&files.csv) {
                log::warn!("could not remove {}: {cleanup}", files.csv.display());
            }
            return Err(err);
        }

        log::info!(
            "exported {} {kind} rows to {} and {}",
            rows.len(),
            files.csv.display(),
            files.xlsx.display()
        );
        Ok(files)
    }
}

fn write_csv(path: &Path, rows: &CurveRows) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(rows.header())?;
    for record in rows.records() {
        writer.write_record(record.iter().map(f64::to_string))?;
    }
    writer.flush().map_err(|e| ExportError::io(path, e))?;
    Ok(())
}

fn write_xlsx(path: &Path, rows: &CurveRows) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(rows.kind().as_str())?;

    for (col, name) in (0u16..).zip(rows.header()) {
        sheet.write_string_with_format(0, col, *name, &bold)?;
    }
    for (row, record) in (1u32..).zip(rows.records()) {
        for (col, value) in (0u16..).zip(record) {
            sheet.write_number(row, col, value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenor_analytics::tools::CurveKind;
    use tenor_curves::point::RateCurvePoint;

    #[test]
    fn test_empty_rows_rejected() {
        let rows = CurveRows::Points {
            kind: CurveKind::SwapCurve,
            points: Vec::new(),
        };
        let err = CurveExporter::default().export(&rows).unwrap_err();
        assert!(matches!(err, ExportError::Empty { kind: "swap_curve" }));
    }

    #[test]
    fn test_file_names_carry_prefix_and_kind() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CurveExporter::new(
            ExportConfig::default()
                .with_output_dir(dir.path())
                .with_prefix("desk"),
        );
        let rows = CurveRows::Points {
            kind: CurveKind::ZeroRates,
            points: vec![RateCurvePoint::new(1.0, 0.05)],
        };
        let files = exporter.export(&rows).unwrap();
        let name = files.csv.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("desk_zero_rates_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(files.csv.with_extension("xlsx"), files.xlsx);
    }
}
