//! Records and summary API client for the climate dashboard.
//!
//! The client is target-agnostic: reqwest drives `fetch()` when compiled to
//! WASM and hyper natively, so the dashboard and the CLI share this crate.

pub mod client;
pub mod error;
pub mod transport;

pub use client::{ApiEndpoints, DashboardClient};
pub use climate_data::record::DashboardData;
pub use error::{FetchError, Result};
pub use transport::{ReqwestTransport, Reply, Transport};
pub use reqwest::Url;
