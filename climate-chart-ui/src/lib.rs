//! Dioxus components and Chart.js bridge for the climate dashboard.
//!
//! This crate provides:
//! - `js_bridge`: a `ChartSurface` that drives Chart.js via `js_sys::eval()`
//! - `state`: the `AppState` context and the intent dispatch loop
//! - `components`: RSX components for filters, table, chart and summary

pub mod js_bridge;
pub mod state;
pub mod components;
