//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the controller and the API client into signals provided
//! via `use_context_provider`. Components retrieve it with
//! `use_context::<AppState>()` and report user actions with
//! [`AppState::dispatch`].

use climate_client::DashboardClient;
use climate_data::config::DashboardConfig;
use climate_view::controller::{Controller, Intent, RefreshTicket};
use dioxus::prelude::*;

use crate::js_bridge::ChartJsSurface;

/// DOM id of the chart canvas.
pub const CHART_CANVAS_ID: &str = "climateChart";

/// Shared state of the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Filters, rendered views and the chart instance
    pub controller: Signal<Controller<ChartJsSurface>>,
    /// Records/summary API client
    pub client: Signal<DashboardClient>,
}

impl AppState {
    pub fn new(config: &DashboardConfig, client: DashboardClient) -> Self {
        Self {
            controller: Signal::new(Controller::new(
                config,
                ChartJsSurface::new(CHART_CANVAS_ID),
            )),
            client: Signal::new(client),
        }
    }

    /// Apply a user intent and start the refresh it calls for, if any.
    pub fn dispatch(self, intent: Intent) {
        let mut controller = self.controller;
        let ticket = controller.write().dispatch(intent);
        if let Some(ticket) = ticket {
            self.spawn_refresh(ticket);
        }
    }

    fn spawn_refresh(self, ticket: RefreshTicket) {
        let mut controller = self.controller;
        let client = self.client.peek().clone();
        spawn(async move {
            let outcome = client.refresh(&ticket.query).await;
            controller.write().complete(ticket.token, outcome);
        });
    }

    /// Replace the built-in selector catalog with the backend's, when configured.
    pub fn load_catalog(self) {
        let mut controller = self.controller;
        let client = self.client.peek().clone();
        spawn(async move {
            let catalog = client.fetch_catalog().await;
            controller.write().set_catalog(catalog);
        });
    }
}
