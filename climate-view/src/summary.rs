//! Summary statistics projection.

use climate_data::format::{format_value, MISSING};
use climate_data::record::Summary;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub count: String,
    pub min: String,
    pub max: String,
    pub avg: String,
    /// "first-last" year span covered by the summary.
    pub years: String,
}

impl Default for SummaryView {
    /// Every field shows the missing-value placeholder.
    fn default() -> Self {
        Self {
            count: MISSING.to_string(),
            min: MISSING.to_string(),
            max: MISSING.to_string(),
            avg: MISSING.to_string(),
            years: MISSING.to_string(),
        }
    }
}

pub fn render_summary(summary: &Summary) -> SummaryView {
    let years = match (summary.first_year, summary.last_year) {
        (Some(first), Some(last)) => format!("{}-{}", first, last),
        _ => MISSING.to_string(),
    };
    SummaryView {
        count: summary
            .count
            .map(|c| c.to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        min: format_value(summary.min_value),
        max: format_value(summary.max_value),
        avg: format_value(summary.avg_value),
        years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_all_fields() {
        let view = render_summary(&Summary {
            count: Some(2),
            min_value: Some(100.5),
            max_value: Some(120.75),
            avg_value: Some(110.625),
            first_year: Some(2020),
            last_year: Some(2021),
        });
        assert_eq!(view.count, "2");
        assert_eq!(view.min, "100.50");
        assert_eq!(view.max, "120.75");
        assert_eq!(view.avg, "110.63");
        assert_eq!(view.years, "2020-2021");
    }

    #[test]
    fn unavailable_summary_shows_zero_count() {
        let view = render_summary(&Summary::unavailable());
        assert_eq!(view.count, "0");
        assert_eq!(view.min, "-");
        assert_eq!(view.avg, "-");
        assert_eq!(view.years, "-");
    }

    #[test]
    fn absent_count_shows_placeholder() {
        assert_eq!(render_summary(&Summary::default()), SummaryView::default());
    }
}
