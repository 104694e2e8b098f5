//! Chart canvas and caption.

use super::ChartHeader;
use crate::state::{AppState, CHART_CANVAS_ID};
use dioxus::prelude::*;

/// Canvas that Chart.js draws into. The chart itself is created and updated
/// by the controller; this component only provides the element and caption.
#[component]
pub fn ChartPanel() -> Element {
    let state = use_context::<AppState>();
    let controller = state.controller.read();
    let caption = controller.view().chart_caption.clone();
    let parameter_code = controller.filters().parameter.clone();
    let (title, units) = controller
        .catalog()
        .parameter(&parameter_code)
        .map(|p| (p.name.clone(), p.units.clone()))
        .unwrap_or((parameter_code, String::new()));
    drop(controller);

    rsx! {
        div {
            style: "position: relative; width: 100%; min-height: 320px;",
            ChartHeader { title, units }
            canvas {
                id: CHART_CANVAS_ID,
            }
            p {
                id: "chartMeta",
                style: "font-size: 12px; color: #666; text-align: center; margin-top: 4px;",
                "{caption}"
            }
        }
    }
}
