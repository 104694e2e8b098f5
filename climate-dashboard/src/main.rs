//! Climate Dashboard
//!
//! Lets the user pick a region, parameter and period type, then shows the
//! matching climate records as a table, a Chart.js line chart and summary
//! statistics.
//!
//! Data flow:
//! 1. `window.dashboardConfig` supplies default filters and endpoint URLs.
//! 2. On mount, the controller issues an initial refresh and the selector
//!    catalog is loaded (built-in list unless catalog endpoints are configured).
//! 3. Every filter change, refresh click or period-group click dispatches an
//!    intent; refreshes fetch records and summary concurrently and the
//!    controller renders table, chart and summary from the result.

mod page;

use climate_chart_ui::components::{
    ChartPanel, ErrorDisplay, FilterBar, PeriodGroupButtons, RecordsTable, SummaryPanel,
};
use climate_chart_ui::state::AppState;
use climate_client::{ApiEndpoints, DashboardClient};
use climate_data::config::DashboardConfig;
use climate_view::controller::Intent;
use dioxus::prelude::*;

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("climate-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let setup = use_hook(|| {
        let config = page::read_config();
        page::resolve_endpoints(&config).map(|endpoints| (config, endpoints))
    });

    match setup {
        Ok((config, endpoints)) => rsx! {
            Dashboard { config, endpoints }
        },
        Err(message) => {
            log::error!("Cannot start dashboard: {}", message);
            rsx! {
                ErrorDisplay { message }
            }
        }
    }
}

#[component]
fn Dashboard(config: DashboardConfig, endpoints: ApiEndpoints) -> Element {
    let mut state = use_context_provider(|| AppState::new(&config, DashboardClient::new(endpoints.clone())));

    // Initial load: selector catalog and first refresh.
    use_effect(move || {
        state.load_catalog();
        state.dispatch(Intent::RefreshRequested);
    });

    use_drop(move || {
        if let Ok(mut controller) = state.controller.try_write() {
            controller.teardown();
        }
    });

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 0 0 8px 0;",
                "UK Climate Records"
            }

            FilterBar {}
            PeriodGroupButtons {}

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px; margin-top: 12px;",
                ChartPanel {}
                SummaryPanel {}
            }

            div {
                style: "margin-top: 16px; max-height: 480px; overflow-y: auto;",
                RecordsTable {}
            }
        }
    }
}
