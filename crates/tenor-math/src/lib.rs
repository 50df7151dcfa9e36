//! # Tenor Math
//!
//! Numerical building blocks for curve construction.
//!
//! This crate provides:
//!
//! - **Interpolation**: Natural cubic spline and piecewise linear interpolation
//! - **Solvers**: Root-finding (Newton-Raphson, Brent, and a hybrid of the two)
//!
//! Everything here is a pure function of its inputs; nothing is cached.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{linspace, CubicSpline, Interpolator, LinearInterpolator};
    pub use crate::solvers::{brent, hybrid, newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
