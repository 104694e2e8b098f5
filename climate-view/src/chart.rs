//! Line chart projection and the single live chart instance.

use climate_data::period::{sort_records, PeriodType};
use climate_data::record::Record;
use serde::Serialize;

/// Points handed to the charting layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    /// "<year>-<PERIOD>" for each point.
    pub labels: Vec<String>,
    /// Missing values are NaN, which serializes to `null` and draws as a gap.
    pub values: Vec<f64>,
    /// Y-axis title, usually the parameter's units.
    pub y_axis_title: String,
}

/// Sort records chronologically and derive labels and values.
pub fn chart_series(records: &[Record], y_axis_title: &str) -> ChartSeries {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted);

    let labels = sorted
        .iter()
        .map(|r| format!("{}-{}", r.year, r.period.to_uppercase()))
        .collect();
    let values = sorted
        .iter()
        .map(|r| r.value.unwrap_or(f64::NAN))
        .collect();

    ChartSeries {
        labels,
        values,
        y_axis_title: y_axis_title.to_string(),
    }
}

pub fn chart_caption(period_type: PeriodType, points: usize) -> String {
    format!("{} values ({} points)", period_type.label(), points)
}

/// Something that can draw a line chart, e.g. a Chart.js canvas.
pub trait ChartSurface {
    /// Handle to one live chart.
    type Instance;

    fn create(&mut self, series: &ChartSeries) -> Self::Instance;

    /// Replace labels and data of an existing chart and redraw it.
    fn update(&mut self, instance: &mut Self::Instance, series: &ChartSeries);

    fn destroy(&mut self, _instance: Self::Instance) {}
}

/// Owns at most one chart instance, created on first render and updated in
/// place afterwards so the chart keeps its animation and zoom state.
pub struct ChartHandle<S: ChartSurface> {
    surface: S,
    instance: Option<S::Instance>,
}

impl<S: ChartSurface> ChartHandle<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            instance: None,
        }
    }

    pub fn render(&mut self, series: &ChartSeries) {
        match self.instance.as_mut() {
            Some(instance) => self.surface.update(instance, series),
            None => self.instance = Some(self.surface.create(series)),
        }
    }

    pub fn is_created(&self) -> bool {
        self.instance.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Drop the live chart; the next render creates a fresh one.
    pub fn teardown(&mut self) {
        if let Some(instance) = self.instance.take() {
            self.surface.destroy(instance);
        }
    }
}
