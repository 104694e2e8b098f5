//! Period-group shortcut buttons.

use crate::state::AppState;
use climate_data::period::PeriodType;
use climate_view::controller::Intent;
use dioxus::prelude::*;

/// One button per period type; the selected one carries the `active` class.
#[component]
pub fn PeriodGroupButtons() -> Element {
    let state = use_context::<AppState>();
    let active = state.controller.read().view().active_group;

    rsx! {
        div {
            style: "display: flex; gap: 6px; margin: 8px 0;",
            for period_type in PeriodType::ALL {
                button {
                    class: if period_type == active { "chart-group-btn active" } else { "chart-group-btn" },
                    "data-group": "{period_type}",
                    onclick: move |_| state.dispatch(Intent::PeriodGroupSelected(period_type)),
                    {period_type.label()}
                }
            }
        }
    }
}
