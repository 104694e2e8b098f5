//! Region, parameter, period-type, year and period filters plus the refresh
//! button.

use crate::state::AppState;
use climate_data::period::PeriodType;
use climate_view::controller::{FilterChange, Intent};
use dioxus::prelude::*;

/// Filter controls. Selector changes refresh immediately; year and period
/// edits apply on the next refresh.
#[component]
pub fn FilterBar() -> Element {
    let state = use_context::<AppState>();
    let controller = state.controller.read();
    let filters = controller.filters().clone();
    let regions = controller.catalog().region_choices(&filters.region);
    let parameters = controller.catalog().parameter_choices(&filters.parameter);
    drop(controller);

    let on_region_change = move |evt: Event<FormData>| {
        state.dispatch(Intent::FiltersChanged(FilterChange::Region(evt.value())));
    };

    let on_parameter_change = move |evt: Event<FormData>| {
        state.dispatch(Intent::FiltersChanged(FilterChange::Parameter(evt.value())));
    };

    let on_period_type_change = move |evt: Event<FormData>| match evt.value().parse::<PeriodType>() {
        Ok(period_type) => {
            state.dispatch(Intent::FiltersChanged(FilterChange::PeriodType(period_type)));
        }
        Err(e) => log::warn!("Ignoring period type selection: {}", e),
    };

    let on_start_change = move |evt: Event<FormData>| {
        state.dispatch(Intent::FiltersChanged(FilterChange::StartYear(evt.value())));
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.dispatch(Intent::FiltersChanged(FilterChange::EndYear(evt.value())));
    };

    let on_period_change = move |evt: Event<FormData>| {
        state.dispatch(Intent::FiltersChanged(FilterChange::Period(evt.value())));
    };

    let on_refresh = move |_: Event<MouseData>| {
        state.dispatch(Intent::RefreshRequested);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "Region: "
                select {
                    id: "regionSelect",
                    onchange: on_region_change,
                    for region in regions.iter() {
                        option {
                            value: "{region.code}",
                            selected: region.code.eq_ignore_ascii_case(&filters.region),
                            "{region.name}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Parameter: "
                select {
                    id: "parameterSelect",
                    onchange: on_parameter_change,
                    for parameter in parameters.iter() {
                        option {
                            value: "{parameter.code}",
                            selected: parameter.code.eq_ignore_ascii_case(&filters.parameter),
                            "{parameter.name}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Period: "
                select {
                    id: "periodTypeSelect",
                    onchange: on_period_type_change,
                    for period_type in PeriodType::ALL {
                        option {
                            value: "{period_type}",
                            selected: period_type == filters.period_type,
                            {period_type.label()}
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    id: "startYearInput",
                    r#type: "number",
                    placeholder: "Start year",
                    value: "{filters.start_year}",
                    style: "width: 90px;",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    id: "endYearInput",
                    r#type: "number",
                    placeholder: "End year",
                    value: "{filters.end_year}",
                    style: "width: 90px;",
                    onchange: on_end_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "Period code: "
                input {
                    id: "periodInput",
                    r#type: "text",
                    placeholder: "e.g. jan, win",
                    value: "{filters.period}",
                    style: "width: 90px;",
                    onchange: on_period_change,
                }
            }
            button {
                id: "refreshButton",
                onclick: on_refresh,
                "Refresh"
            }
        }
    }
}
