//! Plain-text rendering of the dashboard views.

use climate_data::catalog::{Parameter, Region};
use climate_view::chart::{ChartSeries, ChartSurface};
use climate_view::controller::Controller;
use climate_view::table::TableBody;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Chart surface that keeps the latest series for printing.
#[derive(Debug, Default)]
pub struct TextChart {
    pub series: ChartSeries,
}

impl ChartSurface for TextChart {
    type Instance = ();

    fn create(&mut self, series: &ChartSeries) {
        self.series = series.clone();
    }

    fn update(&mut self, _instance: &mut (), series: &ChartSeries) {
        self.series = series.clone();
    }
}

/// One block character per value, scaled between the series min and max.
/// Missing values show as a space.
pub fn sparkline(values: &[f64]) -> String {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    values
        .iter()
        .map(|v| {
            if !v.is_finite() {
                ' '
            } else if span <= 0.0 {
                SPARK_LEVELS[SPARK_LEVELS.len() / 2]
            } else {
                let level = ((v - min) / span * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            }
        })
        .collect()
}

pub fn print_dashboard(controller: &Controller<TextChart>) {
    let view = controller.view();
    let filters = controller.filters();
    let catalog = controller.catalog();
    let region = catalog
        .region(&filters.region)
        .map(|r| r.name.as_str())
        .unwrap_or(filters.region.as_str());
    let parameter = catalog
        .parameter(&filters.parameter)
        .map(|p| p.name.as_str())
        .unwrap_or(filters.parameter.as_str());
    println!("{}: {} ({})", region, parameter, filters.period_type.label());
    println!();

    println!("{:>6}  {:<6}  {:>10}", "Year", "Period", "Value");
    match &view.table.body {
        TableBody::Placeholder(message) => println!("{}", message),
        TableBody::Rows(rows) => {
            for row in rows {
                println!("{:>6}  {:<6}  {:>10}", row.year, row.period, row.value);
            }
        }
    }
    println!("{}", view.table.caption);
    println!();

    let series = &controller.chart().surface().series;
    if controller.chart().is_created() && !series.labels.is_empty() {
        let first = series.labels.first().map(String::as_str).unwrap_or_default();
        let last = series.labels.last().map(String::as_str).unwrap_or_default();
        println!("{}  {}  {}", first, sparkline(&series.values), last);
    }
    if !view.chart_caption.is_empty() {
        println!("{}", view.chart_caption);
        println!();
    }

    println!("Count:   {}", view.summary.count);
    println!("Min:     {}", view.summary.min);
    println!("Max:     {}", view.summary.max);
    println!("Average: {}", view.summary.avg);
    println!("Years:   {}", view.summary.years);
}

pub fn print_regions(regions: &[Region]) {
    for region in regions {
        println!("{:<22} {}", region.code, region.name);
    }
}

pub fn print_parameters(parameters: &[Parameter]) {
    for parameter in parameters {
        println!("{:<12} {:<34} {}", parameter.code, parameter.name, parameter.units);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkline_scales_between_extremes() {
        assert_eq!(sparkline(&[0.0, 7.0, 3.5]), "▁█▅");
        assert_eq!(sparkline(&[1.0, f64::NAN, 1.0]), "▅ ▅");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn text_chart_keeps_latest_series() {
        let mut chart = TextChart::default();
        let first = ChartSeries {
            labels: vec!["2020-ANN".to_string()],
            values: vec![1.0],
            y_axis_title: "mm".to_string(),
        };
        chart.create(&first);
        let mut second = first.clone();
        second.values = vec![2.0];
        chart.update(&mut (), &second);
        assert_eq!(chart.series, second);
    }
}
