//! # Tenor Curves
//!
//! Zero-rate curve construction for the Tenor library.
//!
//! ## Components
//!
//! - [`bootstrap`]: Sequential zero-rate solving from coupon and zero-coupon
//!   bond prices
//! - [`splice`]: Extending a base curve with swap or FRA quotes, merged and
//!   smoothed with a natural cubic spline
//! - [`forward`]: Forward-rate term structures from spot rates
//!
//! ## Data flow
//!
//! ```text
//! bonds ──► ZeroCurveBootstrapper ──► RateCurve ──► CurveSplicer ──► InterpolatedCurve
//!                                          │
//!                                          └──► ForwardRateCurveBuilder ──► [ForwardPeriod]
//! ```
//!
//! Every entry point is a pure function of its inputs. Nothing is cached
//! between calls.
//!
//! ## Example
//!
//! ```rust
//! use tenor_curves::prelude::*;
//!
//! let curve = CurveSplicer::new()
//!     .splice_with_swaps(&[1.0], &[0.02], &[2.0, 3.0], &[0.025, 0.03])
//!     .unwrap();
//! assert_eq!(curve.samples.len(), 300);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod bootstrap;
pub mod error;
pub mod forward;
pub mod instrument;
pub mod point;
pub mod splice;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{
        BootstrapConfig, CouponDiscounting, SolvedZeroRate, ZeroCurveBootstrapper,
    };
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::forward::{
        continuous_forward_rate, discrete_forward_rate, instantaneous_forward_rate,
        ForwardConvention, ForwardPeriod, ForwardRateCurveBuilder,
    };
    pub use crate::instrument::BondInstrument;
    pub use crate::point::{RateCurve, RateCurvePoint};
    pub use crate::splice::{
        implied_zero_from_fra, merge_points, CurveSplicer, FraAnchor, InterpolatedCurve,
        SpliceConfig, SpliceInput, SpliceKind,
    };
}

pub use error::{CurveError, CurveResult};
