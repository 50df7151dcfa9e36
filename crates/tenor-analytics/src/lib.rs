//! # Tenor Analytics
//!
//! Instrument analytics and labeled calculation tools built on the Tenor
//! curve engine.
//!
//! ## Architecture
//!
//! ```text
//! tenor-analytics
//! ├── fra     - FRA strip payoff, valuation and break-even rate;
//! │             single-FRA cash flows and valuations
//! ├── bond    - Flat-rate and zero-coupon bond pricing
//! └── tools   - Typed requests, labeled results and key-based dispatch
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tenor_analytics::prelude::*;
//!
//! let payoff = total_payoff(0.03, &[0.032], 1_000_000.0, 0.5).unwrap();
//! assert!(payoff > 0.0);
//!
//! let rate = break_even_rate(&[0.02, 0.03], 0.25).unwrap();
//! assert!(rate > 0.02 && rate < 0.03);
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
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::uninlined_format_args)]

pub mod bond;
pub mod error;
pub mod fra;
pub mod tools;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::{
        flat_rate_price, price_continuous, price_discrete, zero_coupon_price_continuous,
        zero_coupon_price_discrete, zero_coupon_rate,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::fra::{
        borrower_cash_flow, break_even_rate, break_even_rate_with, lender_cash_flow,
        position_valuation, settlement_payoff, total_payoff, total_valuation, value_pay_fixed,
        value_receive_fixed, FraPosition,
    };
    pub use crate::tools::{dispatch, CurveKind, CurveRows, ToolKey, ToolOutput, ToolSettings};
}

pub use error::{AnalyticsError, AnalyticsResult};
