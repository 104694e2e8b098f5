//! Summary statistics.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SummaryPanel() -> Element {
    let state = use_context::<AppState>();
    let summary = state.controller.read().view().summary.clone();

    rsx! {
        dl {
            style: "display: grid; grid-template-columns: auto 1fr; gap: 4px 12px; font-size: 13px;",
            dt { "Count" }
            dd { id: "summaryCount", "{summary.count}" }
            dt { "Min" }
            dd { id: "summaryMin", "{summary.min}" }
            dt { "Max" }
            dd { id: "summaryMax", "{summary.max}" }
            dt { "Average" }
            dd { id: "summaryAvg", "{summary.avg}" }
            dt { "Years" }
            dd { id: "summaryYears", "{summary.years}" }
        }
    }
}
