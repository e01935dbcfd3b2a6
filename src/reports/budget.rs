//! Budget report
//!
//! One month's allocations measured against actual spending, with
//! unbudgeted categories listed separately and alerts for anything over.

use std::io::Write;

use crate::display::{format_percentage, truncate};
use crate::engine::{aggregate, evaluate};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    BudgetAllocation, BudgetStatus, LedgerEntry, Money, ReportingMonth, Thresholds,
    UnbudgetedSpend,
};

use super::escape_csv;

/// Budget report for one month
#[derive(Debug, Clone)]
pub struct BudgetReport {
    /// The month reported on
    pub month: ReportingMonth,
    /// One status per allocation, in allocation order
    pub statuses: Vec<BudgetStatus>,
    /// Spending in categories without an allocation, sorted by category
    pub unbudgeted: Vec<UnbudgetedSpend>,
    /// Sum of allocation amounts
    pub total_budgeted: Money,
    /// Sum of spending against budgeted categories
    pub total_spent: Money,
}

impl BudgetReport {
    /// Build the report from entries and allocations
    ///
    /// Fails when an allocation is invalid or two allocations target the
    /// same category in this month.
    pub fn generate(
        entries: &[LedgerEntry],
        allocations: &[BudgetAllocation],
        month: ReportingMonth,
        thresholds: Thresholds,
    ) -> LedgerResult<Self> {
        let aggregate = aggregate(entries, month);
        let evaluation = evaluate(allocations, &aggregate, thresholds)?;

        let total_budgeted = evaluation.statuses.iter().map(|s| s.budgeted).sum();
        let total_spent = evaluation.statuses.iter().map(|s| s.spent).sum();

        Ok(Self {
            month,
            statuses: evaluation.statuses,
            unbudgeted: evaluation.unbudgeted,
            total_budgeted,
            total_spent,
        })
    }

    /// Budget left across all allocations; negative when overspent
    pub fn total_remaining(&self) -> Money {
        self.total_budgeted - self.total_spent
    }

    /// Statuses whose tier calls for an alert
    pub fn alerts(&self) -> Vec<&BudgetStatus> {
        self.statuses.iter().filter(|s| s.needs_alert()).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Report: {}\n", self.month));
        output.push_str(&"=".repeat(76));
        output.push('\n');

        if self.statuses.is_empty() {
            output.push_str("No budgets allocated for this month.\n");
        } else {
            output.push_str(&format!(
                "{:<24} {:>11} {:>11} {:>11} {:>8} {:>5}\n",
                "Category", "Budgeted", "Spent", "Remaining", "Used", ""
            ));
            output.push_str(&"-".repeat(76));
            output.push('\n');

            for status in &self.statuses {
                output.push_str(&format!(
                    "{:<24} {:>11} {:>11} {:>11} {:>8} {:>5}\n",
                    truncate(&status.category, 24),
                    status.budgeted.to_string(),
                    status.spent.to_string(),
                    status.remaining().to_string(),
                    format_percentage(status.progress_percent()),
                    status.tier.marker()
                ));
            }

            output.push_str(&"-".repeat(76));
            output.push('\n');
            output.push_str(&format!(
                "{:<24} {:>11} {:>11} {:>11}\n",
                "TOTAL",
                self.total_budgeted.to_string(),
                self.total_spent.to_string(),
                self.total_remaining().to_string()
            ));
        }

        if !self.unbudgeted.is_empty() {
            output.push_str("\nUnbudgeted Spending\n");
            output.push_str(&"-".repeat(76));
            output.push('\n');
            for spend in &self.unbudgeted {
                output.push_str(&format!(
                    "{:<24} {:>11}\n",
                    truncate(&spend.category, 24),
                    spend.spent.to_string()
                ));
            }
        }

        let alerts = self.alerts();
        if !alerts.is_empty() {
            output.push('\n');
            for status in alerts {
                output.push_str(&format!(
                    "ALERT: {} is over budget ({} of {})\n",
                    status.category, status.spent, status.budgeted
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        writeln!(
            writer,
            "Month,Category,Budgeted,Spent,Remaining,Used,Status"
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        for status in &self.statuses {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{:.2},{:.2},{}",
                self.month,
                escape_csv(&status.category),
                status.budgeted.cents() as f64 / 100.0,
                status.spent.cents() as f64 / 100.0,
                status.remaining().cents() as f64 / 100.0,
                status.progress_percent(),
                status.tier.marker()
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        for spend in &self.unbudgeted {
            writeln!(
                writer,
                "{},{},,{:.2},,,UNBUDGETED",
                self.month,
                escape_csv(&spend.category),
                spend.spent.cents() as f64 / 100.0
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
