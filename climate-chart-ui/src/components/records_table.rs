//! Records table with its row-count caption.

use crate::state::AppState;
use climate_view::table::{TableBody, TableView};
use dioxus::prelude::*;

#[component]
pub fn RecordsTable() -> Element {
    let state = use_context::<AppState>();
    let controller = state.controller.read();
    let loading = controller.is_loading();
    let TableView { body, caption } = controller.view().table.clone();
    drop(controller);

    rsx! {
        div {
            "aria-busy": "{loading}",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        th { style: "text-align: left;", "Year" }
                        th { style: "text-align: left;", "Period" }
                        th { style: "text-align: right;", "Value" }
                    }
                }
                tbody {
                    id: "recordsTableBody",
                    match body {
                        TableBody::Placeholder(message) => rsx! {
                            tr {
                                td { colspan: "3", "{message}" }
                            }
                        },
                        TableBody::Rows(rows) => rsx! {
                            for row in rows {
                                tr {
                                    td { "{row.year}" }
                                    td { "{row.period}" }
                                    td { style: "text-align: right;", "{row.value}" }
                                }
                            }
                        },
                    }
                }
            }
            p {
                id: "tableMeta",
                style: "font-size: 12px; color: #666; margin: 4px 0 0 0;",
                "{caption}"
            }
        }
    }
}
