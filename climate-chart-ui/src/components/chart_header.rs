//! Chart header with the selected parameter and its units.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Parameter name, e.g. "Rainfall"
    pub title: String,
    /// Units of the Y axis (e.g. "mm")
    #[props(default = String::new())]
    pub units: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.units.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Units: {props.units}"
                }
            }
        }
    }
}
