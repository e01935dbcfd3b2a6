//! Report generation
//!
//! Reports are pure views over engine output. Each one is built with
//! `generate`, rendered with `format_terminal`, and exported with
//! `export_csv`.

pub mod budget;
pub mod dashboard;
pub mod spending;
pub mod trend;

pub use budget::BudgetReport;
pub use dashboard::DashboardReport;
pub use spending::{BreakdownRow, SpendingReport};
pub use trend::TrendReport;

/// Escape a field for CSV output
pub(crate) fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
