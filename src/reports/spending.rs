//! Spending report
//!
//! Per-category expense breakdown for one month.

use std::io::Write;

use crate::display::{format_percentage, truncate};
use crate::engine::{aggregate, MonthlyAggregate};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{LedgerEntry, Money, ReportingMonth};

use super::escape_csv;

/// One category's share of a month's spending
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    /// Category name
    pub category: String,
    /// Amount spent in the category
    pub spent: Money,
    /// Share of the month's total expenses, in percent
    pub percentage: f64,
}

/// Build breakdown rows from a month's totals, biggest spender first
///
/// Categories with equal spend keep their alphabetical order.
pub fn breakdown_rows(aggregate: &MonthlyAggregate) -> Vec<BreakdownRow> {
    let total = aggregate.expense_total;
    let mut rows: Vec<BreakdownRow> = aggregate
        .spend_by_category
        .iter()
        .map(|(category, &spent)| BreakdownRow {
            category: category.clone(),
            spent,
            percentage: spent.percent_of(total),
        })
        .collect();
    rows.sort_by(|a, b| b.spent.cmp(&a.spent));
    rows
}

/// Spending report for one month
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// The month reported on
    pub month: ReportingMonth,
    /// Per-category rows, highest spend first
    pub rows: Vec<BreakdownRow>,
    /// Total expenses for the month
    pub expense_total: Money,
    /// Total income for the month
    pub income_total: Money,
}

impl SpendingReport {
    /// Build the report from a normalized entry list
    pub fn generate(entries: &[LedgerEntry], month: ReportingMonth) -> Self {
        let aggregate = aggregate(entries, month);
        let rows = breakdown_rows(&aggregate);

        Self {
            month,
            rows,
            expense_total: aggregate.expense_total,
            income_total: aggregate.income_total,
        }
    }

    /// Income minus expenses for the month
    pub fn net(&self) -> Money {
        self.income_total - self.expense_total
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Report: {}\n", self.month));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:   {:>12}\n",
            self.income_total.to_string()
        ));
        output.push_str(&format!(
            "Total Expenses: {:>12}\n",
            self.expense_total.to_string()
        ));
        output.push_str(&format!("Net:            {:>12}\n\n", self.net().to_string()));

        if self.rows.is_empty() {
            output.push_str("No spending recorded this month.\n");
            return output;
        }

        output.push_str(&format!("{:<30} {:>12} {:>8}\n", "Category", "Spent", "%"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<30} {:>12} {:>8}\n",
                truncate(&row.category, 30),
                row.spent.to_string(),
                format_percentage(row.percentage)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>8}\n",
            "TOTAL",
            self.expense_total.to_string(),
            "100%"
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        writeln!(writer, "Month,Category,Spent,Percentage")
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{:.2},{:.2}",
                self.month,
                escape_csv(&row.category),
                row.spent.cents() as f64 / 100.0,
                row.percentage
            )
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},TOTAL,{:.2},100.00",
            self.month,
            self.expense_total.cents() as f64 / 100.0
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        Ok(())
    }
}
