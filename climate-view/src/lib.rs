//! View layer of the climate dashboard.
//!
//! The renderers are pure projections from fetched data to display state;
//! the [`controller::Controller`] owns the filter state, the rendered views
//! and the single chart instance, and turns user intents into refresh tickets.
//! Nothing here touches the DOM, so the same code drives the browser app and
//! the terminal CLI.

pub mod chart;
pub mod controller;
pub mod summary;
pub mod table;
