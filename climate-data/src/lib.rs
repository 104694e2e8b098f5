//! Core types for the climate dashboard.
//!
//! Everything in this crate is pure and target-independent, so it is shared
//! by the WASM dashboard, the native CLI, and the HTTP client:
//! - `period`: period types and the (year, period) sort order
//! - `record`: climate records and summary aggregates as decoded from the API
//! - `payload`: bare-array or enveloped list responses
//! - `query`: filter state and the canonical query string
//! - `format`: display formatting for measured values
//! - `catalog`: regions and parameters available for selection
//! - `config`: dashboard configuration read once at load

pub mod catalog;
pub mod config;
pub mod format;
pub mod payload;
pub mod period;
pub mod query;
pub mod record;
