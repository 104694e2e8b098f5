//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a startup error (e.g. an unusable endpoint URL) in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "dashboard-error",
            style: "padding: 12px 16px; margin: 8px 0; background: #FEF2F2; color: #B91C1C; border-radius: 4px; border: 1px solid #FCA5A5;",
            strong { "Dashboard unavailable: " }
            "{props.message}"
        }
    }
}
