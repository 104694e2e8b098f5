//! RSX components for the climate dashboard.

mod chart_header;
mod chart_panel;
mod error_display;
mod filter_bar;
mod period_groups;
mod records_table;
mod summary_panel;

pub use chart_header::ChartHeader;
pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use filter_bar::FilterBar;
pub use period_groups::PeriodGroupButtons;
pub use records_table::RecordsTable;
pub use summary_panel::SummaryPanel;
