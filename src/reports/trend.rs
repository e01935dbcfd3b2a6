//! Spending trend report
//!
//! Monthly expense totals over a trailing window, rendered as a bar chart
//! scaled against the heaviest month.

use std::io::Write;

use crate::display::format_bar;
use crate::engine::{spending_trend, TrendPoint};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{LedgerEntry, Money, ReportingMonth};

const BAR_WIDTH: usize = 30;

/// Spending trend over the months ending at `end_month`
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// Last month of the window
    pub end_month: ReportingMonth,
    /// Window depth in months
    pub months: u32,
    /// Expense totals in ascending month order; silent months are omitted
    pub points: Vec<TrendPoint>,
}

impl TrendReport {
    /// Build the report from a normalized entry list
    pub fn generate(entries: &[LedgerEntry], end_month: ReportingMonth, months: u32) -> Self {
        Self {
            end_month,
            months,
            points: spending_trend(entries, end_month, months),
        }
    }

    /// The heaviest month in the window
    pub fn peak(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.total)
            .max()
            .unwrap_or_else(Money::zero)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Spending Trend: {} months ending {}\n",
            self.months, self.end_month
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No spending recorded in this window.\n");
            return output;
        }

        let peak = self.peak();
        for point in &self.points {
            output.push_str(&format!(
                "{}  {}  {:>12}\n",
                point.month,
                format_bar(
                    point.total.cents() as f64,
                    peak.cents() as f64,
                    BAR_WIDTH
                ),
                point.total.to_string()
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        writeln!(writer, "Month,Spent").map_err(|e| LedgerError::Export(e.to_string()))?;

        for point in &self.points {
            writeln!(
                writer,
                "{},{:.2}",
                point.month,
                point.total.cents() as f64 / 100.0
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
