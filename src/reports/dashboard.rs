//! Dashboard report
//!
//! The composite overview a dashboard renders: current balance, the
//! month's income and expenses, portfolio totals, recent activity, the
//! category breakdown, and the trailing spending trend.

use std::io::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_bar, format_percentage, format_signed_percent, truncate};
use crate::engine::{
    aggregate, current_balance, portfolio_summary, recent_entries, spending_trend, TrendPoint,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{LedgerEntry, Money, PortfolioPosition, PortfolioSummary, ReportingMonth};

use super::escape_csv;
use super::spending::{breakdown_rows, BreakdownRow};

const BAR_WIDTH: usize = 20;

/// Everything the dashboard shows, computed in one pass
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// The month the spending figures cover
    pub month: ReportingMonth,
    /// Date the balance and recent activity are computed as of
    pub as_of: NaiveDate,
    /// Running balance of all entries up to `as_of`
    pub balance: Money,
    /// Income for the month
    pub month_income: Money,
    /// Expenses for the month
    pub month_expenses: Money,
    /// Portfolio totals
    pub portfolio: PortfolioSummary,
    /// Number of portfolio positions held
    pub position_count: usize,
    /// Most recent entries, newest first
    pub recent: Vec<LedgerEntry>,
    /// Per-category spending, highest first
    pub breakdown: Vec<BreakdownRow>,
    /// Trailing spending trend, ascending
    pub trend: Vec<TrendPoint>,
}

impl DashboardReport {
    /// Build the dashboard from a normalized entry list and positions
    pub fn generate(
        entries: &[LedgerEntry],
        positions: &[PortfolioPosition],
        month: ReportingMonth,
        as_of: NaiveDate,
        settings: &Settings,
    ) -> Self {
        let aggregate = aggregate(entries, month);

        Self {
            month,
            as_of,
            balance: current_balance(entries, as_of),
            month_income: aggregate.income_total,
            month_expenses: aggregate.expense_total,
            portfolio: portfolio_summary(positions),
            position_count: positions.len(),
            recent: recent_entries(entries, as_of, settings.recent_limit),
            breakdown: breakdown_rows(&aggregate),
            trend: spending_trend(entries, month, settings.trend_months),
        }
    }

    /// Expenses as a share of income, `None` when the month had no income
    pub fn expense_to_income(&self) -> Option<f64> {
        self.month_expenses.ratio(self.month_income)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Dashboard: {} (as of {})\n",
            self.month, self.as_of
        ));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        output.push_str(&format!(
            "Current Balance: {:>14}\n",
            self.balance.to_string()
        ));
        output.push_str(&format!(
            "Income:          {:>14}\n",
            self.month_income.to_string()
        ));
        match self.expense_to_income() {
            Some(ratio) => output.push_str(&format!(
                "Expenses:        {:>14}  ({} of income)\n",
                self.month_expenses.to_string(),
                format_percentage(ratio * 100.0)
            )),
            None => output.push_str(&format!(
                "Expenses:        {:>14}\n",
                self.month_expenses.to_string()
            )),
        }
        if self.position_count > 0 {
            output.push_str(&format!(
                "Portfolio:       {:>14}  ({} today)\n",
                format!("${:.2}", self.portfolio.total_value),
                format_signed_percent(self.portfolio.daily_change_percent)
            ));
        }

        output.push_str("\nRecent Activity\n");
        output.push_str(&"-".repeat(64));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("(no activity)\n");
        } else {
            for entry in &self.recent {
                output.push_str(&format!(
                    "{}  {:<30} {:>12}\n",
                    entry.occurred_at.format("%Y-%m-%d"),
                    truncate(&entry.category, 30),
                    entry.signed_amount().to_string()
                ));
            }
        }

        output.push_str("\nSpending by Category\n");
        output.push_str(&"-".repeat(64));
        output.push('\n');
        if self.breakdown.is_empty() {
            output.push_str("(no spending this month)\n");
        } else {
            let top = self.breakdown[0].spent;
            for row in &self.breakdown {
                output.push_str(&format!(
                    "{:<20} {}  {:>12} {:>7}\n",
                    truncate(&row.category, 20),
                    format_bar(row.spent.cents() as f64, top.cents() as f64, BAR_WIDTH),
                    row.spent.to_string(),
                    format_percentage(row.percentage)
                ));
            }
        }

        output.push_str("\nSpending Trend\n");
        output.push_str(&"-".repeat(64));
        output.push('\n');
        if self.trend.is_empty() {
            output.push_str("(no spending in window)\n");
        } else {
            let peak = self
                .trend
                .iter()
                .map(|p| p.total)
                .max()
                .unwrap_or_else(Money::zero);
            for point in &self.trend {
                output.push_str(&format!(
                    "{}  {}  {:>12}\n",
                    point.month,
                    format_bar(point.total.cents() as f64, peak.cents() as f64, BAR_WIDTH),
                    point.total.to_string()
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        writeln!(writer, "Section,Item,Value").map_err(|e| LedgerError::Export(e.to_string()))?;

        let mut summary_row = |item: &str, value: String| -> LedgerResult<()> {
            writeln!(writer, "Summary,{},{}", item, value)
                .map_err(|e| LedgerError::Export(e.to_string()))
        };
        summary_row("Balance", format!("{:.2}", self.balance.cents() as f64 / 100.0))?;
        summary_row(
            "Income",
            format!("{:.2}", self.month_income.cents() as f64 / 100.0),
        )?;
        summary_row(
            "Expenses",
            format!("{:.2}", self.month_expenses.cents() as f64 / 100.0),
        )?;
        if self.position_count > 0 {
            summary_row("Portfolio Value", format!("{:.2}", self.portfolio.total_value))?;
            summary_row(
                "Portfolio Change",
                format!("{:.2}", self.portfolio.daily_change_percent),
            )?;
        }

        for entry in &self.recent {
            writeln!(
                writer,
                "Recent,{} {},{:.2}",
                entry.occurred_at.format("%Y-%m-%d"),
                escape_csv(&entry.category),
                entry.signed_amount().cents() as f64 / 100.0
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        for row in &self.breakdown {
            writeln!(
                writer,
                "Breakdown,{},{:.2}",
                escape_csv(&row.category),
                row.spent.cents() as f64 / 100.0
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        for point in &self.trend {
            writeln!(
                writer,
                "Trend,{},{:.2}",
                point.month,
                point.total.cents() as f64 / 100.0
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
