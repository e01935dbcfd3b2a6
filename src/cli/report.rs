//! CLI commands for reports
//!
//! Each command loads a snapshot, runs the engine over it, and either
//! prints the report or exports it to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Args;

use crate::config::Settings;
use crate::engine::normalize;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{DateWindow, ReportingMonth};
use crate::reports::{BudgetReport, DashboardReport, SpendingReport, TrendReport};
use crate::snapshot::Snapshot;

/// Arguments shared by the report commands
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Snapshot file to read (JSON)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Month to report on (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today instead of the clock
    #[arg(long)]
    pub as_of: Option<String>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(settings: &Settings, args: ReportArgs) -> LedgerResult<()> {
    let snapshot = Snapshot::load(&args.input)?;
    let as_of = resolve_as_of(settings, args.as_of.as_deref())?;
    let month = resolve_month(args.month.as_deref(), as_of)?;

    // The balance card needs the full history, not just the month
    let through = as_of.max(month.end_date());
    let from = snapshot.earliest_start().unwrap_or(through);
    let ledger = normalize(&snapshot.records, DateWindow::new(from, through));

    let report = DashboardReport::generate(
        &ledger.entries,
        &snapshot.positions,
        month,
        as_of,
        settings,
    );

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Dashboard exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the budget command
pub fn handle_budget_command(settings: &Settings, args: ReportArgs) -> LedgerResult<()> {
    let snapshot = Snapshot::load(&args.input)?;
    let as_of = resolve_as_of(settings, args.as_of.as_deref())?;
    let month = resolve_month(args.month.as_deref(), as_of)?;

    let ledger = normalize(&snapshot.records, month.window());
    let report = BudgetReport::generate(
        &ledger.entries,
        &snapshot.allocations,
        month,
        settings.thresholds(),
    )?;

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Budget report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the spending command
pub fn handle_spending_command(settings: &Settings, args: ReportArgs) -> LedgerResult<()> {
    let snapshot = Snapshot::load(&args.input)?;
    let as_of = resolve_as_of(settings, args.as_of.as_deref())?;
    let month = resolve_month(args.month.as_deref(), as_of)?;

    let ledger = normalize(&snapshot.records, month.window());
    let report = SpendingReport::generate(&ledger.entries, month);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Spending report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the trend command
pub fn handle_trend_command(
    settings: &Settings,
    args: ReportArgs,
    months: Option<u32>,
) -> LedgerResult<()> {
    let snapshot = Snapshot::load(&args.input)?;
    let as_of = resolve_as_of(settings, args.as_of.as_deref())?;
    let end_month = resolve_month(args.month.as_deref(), as_of)?;
    let months = months.unwrap_or(settings.trend_months);

    let ledger = normalize(&snapshot.records, end_month.trailing_window(months));
    let report = TrendReport::generate(&ledger.entries, end_month, months);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Trend report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Resolve the reporting date from an explicit argument or the clock
fn resolve_as_of(settings: &Settings, as_of: Option<&str>) -> LedgerResult<NaiveDate> {
    match as_of {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            LedgerError::validation(format!("Invalid date: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(settings.today(Utc::now())),
    }
}

/// Resolve the reporting month from an argument or the reporting date
fn resolve_month(month: Option<&str>, as_of: NaiveDate) -> LedgerResult<ReportingMonth> {
    match month {
        Some(s) => ReportingMonth::parse(s).map_err(|e| {
            LedgerError::validation(format!(
                "Invalid month: {}. Use YYYY-MM (e.g., 2025-01)",
                e
            ))
        }),
        None => Ok(ReportingMonth::from_date(as_of)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_as_of_explicit() {
        let settings = Settings::default();
        let resolved = resolve_as_of(&settings, Some("2024-03-15")).unwrap();
        assert_eq!(resolved, date(2024, 3, 15));

        assert!(resolve_as_of(&settings, Some("03/15/2024")).is_err());
    }

    #[test]
    fn test_resolve_month() {
        let as_of = date(2024, 3, 15);

        let explicit = resolve_month(Some("2024-01"), as_of).unwrap();
        assert_eq!(explicit, ReportingMonth::new(2024, 1));

        let defaulted = resolve_month(None, as_of).unwrap();
        assert_eq!(defaulted, ReportingMonth::new(2024, 3));

        assert!(resolve_month(Some("2024-13"), as_of).is_err());
        assert!(resolve_month(Some("January"), as_of).is_err());
    }
}
