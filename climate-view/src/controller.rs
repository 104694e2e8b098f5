//! Dashboard controller: filter state, intents, and the refresh cycle.
//!
//! A refresh is split in two so the controller never awaits anything itself:
//! [`Controller::dispatch`] applies an intent and, when a refresh is due,
//! returns a [`RefreshTicket`] carrying the query to fetch. Whoever performs
//! the fetch hands the outcome back through [`Controller::complete`]. Tickets
//! are numbered and only the most recent one is rendered, so a slow response
//! can never overwrite a newer one.

use std::fmt::Display;

use climate_data::catalog::Catalog;
use climate_data::config::DashboardConfig;
use climate_data::period::PeriodType;
use climate_data::query::{FilterState, QueryParams};
use climate_data::record::DashboardData;
use log::{debug, error};

use crate::chart::{chart_caption, chart_series, ChartHandle, ChartSurface};
use crate::summary::{render_summary, SummaryView};
use crate::table::{render_table, TableView};

/// Edit of a single filter control.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Region(String),
    Parameter(String),
    PeriodType(PeriodType),
    StartYear(String),
    EndYear(String),
    Period(String),
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    FiltersChanged(FilterChange),
    RefreshRequested,
    /// One of the period-group shortcut buttons was clicked.
    PeriodGroupSelected(PeriodType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshToken(u64);

/// A refresh the caller should perform.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshTicket {
    pub token: RefreshToken,
    pub query: QueryParams,
}

/// What [`Controller::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Rendered,
    Failed,
    /// A newer ticket was issued in the meantime; nothing changed.
    Stale,
}

/// Everything the page shows apart from the chart canvas itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub table: TableView,
    pub chart_caption: String,
    pub summary: SummaryView,
    /// Period group whose shortcut button is highlighted.
    pub active_group: PeriodType,
}

pub struct Controller<S: ChartSurface> {
    filters: FilterState,
    catalog: Catalog,
    chart: ChartHandle<S>,
    view: DashboardView,
    latest: Option<RefreshToken>,
    issued: u64,
}

impl<S: ChartSurface> Controller<S> {
    pub fn new(config: &DashboardConfig, surface: S) -> Self {
        let filters = FilterState::new(&config.default_region, &config.default_parameter);
        let view = DashboardView {
            table: TableView::default(),
            chart_caption: String::new(),
            summary: SummaryView::default(),
            active_group: filters.period_type,
        };
        Self {
            filters,
            catalog: Catalog::default(),
            chart: ChartHandle::new(surface),
            view,
            latest: None,
            issued: 0,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn chart(&self) -> &ChartHandle<S> {
        &self.chart
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Whether a ticket has been issued and not yet completed.
    pub fn is_loading(&self) -> bool {
        self.latest.is_some()
    }

    /// Apply an intent. Returns a ticket when it should trigger a refresh.
    ///
    /// Year and period edits only update the filters; they are picked up by
    /// the next refresh.
    pub fn dispatch(&mut self, intent: Intent) -> Option<RefreshTicket> {
        match intent {
            Intent::FiltersChanged(change) => match change {
                FilterChange::Region(region) => {
                    self.filters.region = region;
                    Some(self.begin_refresh())
                }
                FilterChange::Parameter(parameter) => {
                    self.filters.parameter = parameter;
                    Some(self.begin_refresh())
                }
                FilterChange::PeriodType(period_type) => {
                    self.select_period_type(period_type);
                    Some(self.begin_refresh())
                }
                FilterChange::StartYear(year) => {
                    self.filters.start_year = year.trim().to_string();
                    None
                }
                FilterChange::EndYear(year) => {
                    self.filters.end_year = year.trim().to_string();
                    None
                }
                FilterChange::Period(period) => {
                    self.filters.period = period.trim().to_string();
                    None
                }
            },
            Intent::PeriodGroupSelected(period_type) => {
                self.select_period_type(period_type);
                Some(self.begin_refresh())
            }
            Intent::RefreshRequested => Some(self.begin_refresh()),
        }
    }

    fn select_period_type(&mut self, period_type: PeriodType) {
        self.filters.period_type = period_type;
        self.view.active_group = period_type;
    }

    fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        let token = RefreshToken(self.issued);
        self.latest = Some(token);
        self.view.table.set_loading();
        RefreshTicket {
            token,
            query: self.filters.query(),
        }
    }

    /// Render the outcome of a ticket.
    ///
    /// On success the table, chart and summary are rendered from the same
    /// data, in that order. On failure the table shows an error row, the
    /// summary is blanked and the chart keeps its previous data.
    pub fn complete<E: Display>(
        &mut self,
        token: RefreshToken,
        outcome: Result<DashboardData, E>,
    ) -> Completion {
        if self.latest != Some(token) {
            debug!("Discarding stale refresh {:?}, latest is {:?}", token, self.latest);
            return Completion::Stale;
        }
        self.latest = None;

        match outcome {
            Ok(data) => {
                self.view.table = render_table(&data.records, data.total);

                let units = self
                    .catalog
                    .parameter(&self.filters.parameter)
                    .map(|p| p.units.as_str())
                    .unwrap_or_default();
                let series = chart_series(&data.records, units);
                self.chart.render(&series);
                self.view.chart_caption = chart_caption(self.filters.period_type, data.records.len());

                self.view.summary = render_summary(&data.summary);
                Completion::Rendered
            }
            Err(e) => {
                error!("Failed to load dashboard data: {}", e);
                self.view.table.set_failed();
                self.view.summary = SummaryView::default();
                Completion::Failed
            }
        }
    }

    /// Release the chart instance, e.g. when the page unloads.
    pub fn teardown(&mut self) {
        self.chart.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::tests::RecordingSurface;
    use crate::table::{TableBody, LOADING, LOAD_ERROR, NO_DATA};
    use climate_data::record::{Record, Summary};

    fn controller() -> Controller<RecordingSurface> {
        Controller::new(&DashboardConfig::default(), RecordingSurface::default())
    }

    fn record(year: i32, period: &str, value: Option<f64>) -> Record {
        Record {
            year,
            period: period.to_string(),
            period_type: "month".to_string(),
            value,
        }
    }

    fn data(records: Vec<Record>, total: u64) -> DashboardData {
        DashboardData {
            records,
            total,
            summary: Summary {
                count: Some(total),
                min_value: Some(1.0),
                max_value: Some(3.0),
                avg_value: Some(2.0),
                first_year: Some(2020),
                last_year: Some(2020),
            },
        }
    }

    fn ok(data: DashboardData) -> Result<DashboardData, String> {
        Ok(data)
    }

    #[test]
    fn starts_from_config_defaults() {
        let config = DashboardConfig {
            default_region: "WALES".to_string(),
            default_parameter: "Rainfall".to_string(),
            ..DashboardConfig::default()
        };
        let controller = Controller::new(&config, RecordingSurface::default());
        assert_eq!(controller.filters().region, "WALES");
        assert_eq!(controller.filters().parameter, "Rainfall");
        assert_eq!(controller.view().active_group, PeriodType::Month);
        assert!(!controller.is_loading());
    }

    #[test]
    fn refresh_sets_loading_and_issues_query() {
        let mut controller = controller();
        let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
        assert!(controller.is_loading());
        assert_eq!(controller.view().table.body, TableBody::Placeholder(LOADING));
        assert_eq!(ticket.query.get("region"), Some("UK"));
        assert_eq!(ticket.query.get("period_type"), Some("month"));
    }

    #[test]
    fn success_renders_all_three_views() {
        let mut controller = controller();
        let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
        let records = vec![record(2020, "feb", Some(3.0)), record(2020, "jan", Some(1.0))];

        let done = controller.complete(ticket.token, ok(data(records, 40)));
        assert_eq!(done, Completion::Rendered);
        assert!(!controller.is_loading());

        let view = controller.view();
        assert_eq!(view.table.caption, "2 of 40 rows");
        assert_eq!(view.chart_caption, "Month values (2 points)");
        assert_eq!(view.summary.count, "40");
        assert_eq!(view.summary.avg, "2.00");

        let series = controller.chart().surface().last.clone().unwrap();
        assert_eq!(series.labels, vec!["2020-JAN", "2020-FEB"]);
        assert_eq!(series.y_axis_title, "°C");
    }

    #[test]
    fn empty_result_renders_placeholder_and_empty_chart() {
        let mut controller = controller();
        let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
        controller.complete(ticket.token, ok(data(Vec::new(), 0)));

        let view = controller.view();
        assert_eq!(view.table.body, TableBody::Placeholder(NO_DATA));
        assert_eq!(view.table.row_count(), 1);
        assert_eq!(view.table.caption, "0 rows");

        let series = controller.chart().surface().last.clone().unwrap();
        assert!(series.labels.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn failure_shows_error_row_and_blank_summary() {
        let mut controller = controller();
        let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
        controller.complete(ticket.token, ok(data(vec![record(2020, "jan", Some(1.0))], 1)));

        let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
        let done = controller.complete::<String>(ticket.token, Err("records endpoint returned 500".to_string()));
        assert_eq!(done, Completion::Failed);

        let view = controller.view();
        assert_eq!(view.table.body, TableBody::Placeholder(LOAD_ERROR));
        assert_eq!(view.table.row_count(), 1);
        assert_eq!(view.summary, SummaryView::default());
        assert_eq!(view.summary.count, "-");
        assert_eq!(view.summary.min, "-");
        assert_eq!(view.summary.max, "-");
        assert_eq!(view.summary.avg, "-");
        // The chart keeps the previous data.
        assert_eq!(controller.chart().surface().created, 1);
        assert_eq!(controller.chart().surface().updates, 0);
    }

    #[test]
    fn repeated_refreshes_reuse_the_chart() {
        let mut controller = controller();
        for _ in 0..3 {
            let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
            controller.complete(ticket.token, ok(data(vec![record(2020, "jan", Some(1.0))], 1)));
        }
        assert_eq!(controller.chart().surface().created, 1);
        assert_eq!(controller.chart().surface().updates, 2);
    }

    #[test]
    fn stale_outcomes_are_discarded() {
        let mut controller = controller();
        let first = controller
            .dispatch(Intent::FiltersChanged(FilterChange::Region("WALES".to_string())))
            .unwrap();
        let second = controller
            .dispatch(Intent::FiltersChanged(FilterChange::Region("SCOTLAND".to_string())))
            .unwrap();
        assert_ne!(first.token, second.token);
        assert_eq!(second.query.get("region"), Some("SCOTLAND"));

        let done = controller.complete(second.token, ok(data(vec![record(2020, "jan", Some(1.0))], 1)));
        assert_eq!(done, Completion::Rendered);

        let done = controller.complete(first.token, ok(data(Vec::new(), 0)));
        assert_eq!(done, Completion::Stale);
        assert_eq!(controller.view().table.caption, "1 of 1 rows");
        assert_eq!(controller.chart().surface().created, 1);
        assert_eq!(controller.chart().surface().updates, 0);
    }

    #[test]
    fn year_and_period_edits_wait_for_refresh() {
        let mut controller = controller();
        assert!(controller
            .dispatch(Intent::FiltersChanged(FilterChange::StartYear(" 1990 ".to_string())))
            .is_none());
        assert!(controller
            .dispatch(Intent::FiltersChanged(FilterChange::EndYear(String::new())))
            .is_none());
        assert!(controller
            .dispatch(Intent::FiltersChanged(FilterChange::Period("jan".to_string())))
            .is_none());
        assert!(!controller.is_loading());

        let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
        assert_eq!(ticket.query.get("start_year"), Some("1990"));
        assert_eq!(ticket.query.get("end_year"), None);
        assert_eq!(ticket.query.get("period"), Some("jan"));
    }

    #[test]
    fn period_group_selection_syncs_indicator_and_refreshes() {
        let mut controller = controller();
        let ticket = controller
            .dispatch(Intent::PeriodGroupSelected(PeriodType::Season))
            .unwrap();
        assert_eq!(controller.filters().period_type, PeriodType::Season);
        assert_eq!(controller.view().active_group, PeriodType::Season);
        assert_eq!(ticket.query.get("period_type"), Some("season"));

        controller.complete(ticket.token, ok(data(Vec::new(), 0)));
        assert_eq!(controller.view().chart_caption, "Season values (0 points)");

        let ticket = controller
            .dispatch(Intent::FiltersChanged(FilterChange::PeriodType(PeriodType::Annual)))
            .unwrap();
        assert_eq!(controller.view().active_group, PeriodType::Annual);
        assert_eq!(ticket.query.get("period_type"), Some("annual"));
    }

    #[test]
    fn units_come_from_the_catalog() {
        let mut controller = controller();
        controller.set_catalog(Catalog {
            regions: Vec::new(),
            parameters: Vec::new(),
        });
        let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
        controller.complete(ticket.token, ok(data(Vec::new(), 0)));
        let series = controller.chart().surface().last.clone().unwrap();
        assert_eq!(series.y_axis_title, "");
    }

    #[test]
    fn teardown_destroys_the_chart_once() {
        let mut controller = controller();
        controller.teardown();
        assert_eq!(controller.chart().surface().destroyed, 0);

        let ticket = controller.dispatch(Intent::RefreshRequested).unwrap();
        controller.complete(ticket.token, ok(data(Vec::new(), 0)));
        controller.teardown();
        controller.teardown();
        assert!(!controller.chart().is_created());
        assert_eq!(controller.chart().surface().destroyed, 1);
    }
}
