//! Service Layer
//!
//! Abstraction over the remote artigos backend and the tokio runtime the
//! HTTP client needs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               ArtigosController              │
//! └──────────────────────────────────────────────┘
//!                        │ QueryClient::fetch
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │  run_in_tokio  ──▶  dyn ArtigosApi (reqwest) │
//! └──────────────────────────────────────────────┘
//! ```

mod artigos_api;
mod runtime;

pub use artigos_api::*;
pub use runtime::*;
