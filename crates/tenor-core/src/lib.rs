//! # Tenor Core
//!
//! Core types and conventions shared by every Tenor crate.
//!
//! This crate provides:
//!
//! - **Errors**: The three-kind error taxonomy (validation, curve construction,
//!   computation) every calculation reports through
//! - **Compounding**: Rate conventions and conversions between nominal and
//!   continuously compounded rates
//! - **Labeled Results**: Ordered `key -> (label, value)` payloads handed to
//!   presentation layers
//! - **Validation**: Input checks run once, before any computation starts
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let continuous = nominal_to_continuous(0.10, 2).unwrap();
//! let back = continuous_to_nominal(continuous, 2).unwrap();
//! assert!((back - 0.10).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod compounding;
pub mod error;
pub mod labeled;
pub mod validate;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compounding::{continuous_to_nominal, nominal_to_continuous, Compounding};
    pub use crate::error::{ErrorKind, TenorError, TenorResult};
    pub use crate::labeled::{LabeledEntry, LabeledResult, LabeledValue};
}

pub use compounding::Compounding;
pub use error::{ErrorKind, TenorError, TenorResult};
pub use labeled::{LabeledEntry, LabeledResult, LabeledValue};
