//! Textvault server - HTTP REST API for content-addressed string analysis.
//!
//! This crate exposes the analysis, storage, and query layers over a JSON
//! REST API:
//!
//! - **Analysis + storage**: submit a string, get back its derived
//!   properties; records are keyed by SHA-256 content hash, so identical
//!   content is stored at most once
//! - **Retrieval and deletion**: address records by the original value; the
//!   hash is re-derived server-side
//! - **Structured filtering**: conjunctive predicates over stored records
//! - **Natural-language search**: a small fixed phrase set translated into
//!   structured filters, with the interpretation echoed back
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings` - List records, optionally filtered
//! - `GET /strings/filter-by-natural-language` - Natural-language search
//! - `GET /strings/{value}` - Get a record by its original value
//! - `DELETE /strings/{value}` - Delete a record by its original value
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
