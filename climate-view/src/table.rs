//! Records table projection.

use climate_data::format::format_value;
use climate_data::record::Record;
use serde::Serialize;

pub const NO_DATA: &str = "No data available.";
pub const LOADING: &str = "Loading...";
pub const LOAD_ERROR: &str = "Error loading data.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub year: String,
    pub period: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableBody {
    /// A single full-width row carrying a message.
    Placeholder(&'static str),
    Rows(Vec<TableRow>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub body: TableBody,
    /// Row count line under the table, e.g. "120 of 400 rows".
    pub caption: String,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            body: TableBody::Placeholder(LOADING),
            caption: String::new(),
        }
    }
}

impl TableView {
    /// Number of `<tr>` elements the body renders.
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Placeholder(_) => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }

    /// Show the loading row; the caption keeps describing the previous data.
    pub fn set_loading(&mut self) {
        self.body = TableBody::Placeholder(LOADING);
    }

    pub fn set_failed(&mut self) {
        self.body = TableBody::Placeholder(LOAD_ERROR);
    }
}

/// Project records, in the order given, into table rows.
pub fn render_table(records: &[Record], total: u64) -> TableView {
    if records.is_empty() {
        return TableView {
            body: TableBody::Placeholder(NO_DATA),
            caption: "0 rows".to_string(),
        };
    }

    let rows = records
        .iter()
        .map(|r| TableRow {
            year: r.year.to_string(),
            period: r.period.to_uppercase(),
            value: format_value(r.value),
        })
        .collect::<Vec<_>>();

    TableView {
        caption: format!("{} of {} rows", rows.len(), total),
        body: TableBody::Rows(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, period: &str, value: Option<f64>) -> Record {
        Record {
            year,
            period: period.to_string(),
            period_type: "month".to_string(),
            value,
        }
    }

    #[test]
    fn empty_records_render_one_placeholder_row() {
        let view = render_table(&[], 0);
        assert_eq!(view.body, TableBody::Placeholder(NO_DATA));
        assert_eq!(view.row_count(), 1);
        assert_eq!(view.caption, "0 rows");
    }

    #[test]
    fn rows_keep_input_order_and_format_values() {
        let records = vec![record(2020, "jan", Some(3.0)), record(2019, "dec", None)];
        let view = render_table(&records, 2);
        assert_eq!(view.caption, "2 of 2 rows");
        assert_eq!(
            view.body,
            TableBody::Rows(vec![
                TableRow {
                    year: "2020".to_string(),
                    period: "JAN".to_string(),
                    value: "3.00".to_string(),
                },
                TableRow {
                    year: "2019".to_string(),
                    period: "DEC".to_string(),
                    value: "-".to_string(),
                },
            ])
        );
    }

    #[test]
    fn caption_reports_truncated_results() {
        let records = vec![record(2020, "jan", Some(1.0)); 3];
        assert_eq!(render_table(&records, 5000).caption, "3 of 5000 rows");
    }

    #[test]
    fn loading_and_failure_keep_caption() {
        let mut view = render_table(&[record(2020, "jan", Some(1.0))], 1);
        view.set_loading();
        assert_eq!(view.body, TableBody::Placeholder(LOADING));
        view.set_failed();
        assert_eq!(view.body, TableBody::Placeholder(LOAD_ERROR));
        assert_eq!(view.row_count(), 1);
        assert_eq!(view.caption, "1 of 1 rows");
    }
}
