//! Tenor REST server.
//!
//! Exposes curve construction and FRA analytics over HTTP.
//!
//! ## Endpoints
//!
//! - `GET /health`
//! - `POST /api/v1/curves/bootstrap`, `/curves/splice/swap`, `/curves/splice/fra`, `/curves/forward`
//! - `POST /api/v1/fra/payoff`, `/fra/valuation`, `/fra/break-even`
//! - `POST /api/v1/rates/convert`, `/bonds/price`
//! - `GET /api/v1/tools`, `POST /api/v1/tools/{tool_key}`
//!
//! Curve endpoints accept `"export": true` and then answer with the paths
//! of the written CSV and XLSX files under `files`.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: 127.0.0.1:8080, exports to ./output
//! tenor-server
//!
//! # Config file, then environment, then flags
//! TENOR_PORT=9000 tenor-server --config config/tenor.toml --host 0.0.0.0
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{create_router, run_server};
pub use state::AppState;
