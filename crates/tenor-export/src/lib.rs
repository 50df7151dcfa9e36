//! # Tenor Export
//!
//! Writes computed curves to disk as CSV and XLSX.
//!
//! Every export produces a pair of files named
//! `<prefix>_<kind>_<uuid>.csv` / `.xlsx` in the configured directory.
//! Point curves have the columns `maturity,rate`; forward curves have
//! `start_maturity,end_maturity,forward_rate`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tenor_analytics::tools::{forward_rate_curve, ForwardCurveRequest};
//! use tenor_export::{CurveExporter, ExportConfig};
//!
//! let output = forward_rate_curve(&ForwardCurveRequest {
//!     spot_rates: vec![0.02, 0.025],
//!     maturities: vec![1.0, 2.0],
//!     convention: Default::default(),
//! })
//! .unwrap();
//!
//! let exporter = CurveExporter::new(ExportConfig::default().with_output_dir("/tmp/curves"));
//! let files = exporter.export(output.curve.as_ref().unwrap()).unwrap();
//! println!("{}", files.csv.display());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod error;
pub mod exporter;

pub use config::ExportConfig;
pub use error::{ExportError, ExportResult};
pub use exporter::{CurveExporter, ExportedFiles};
