//! Dashboard rollups
//!
//! Pure reductions over the normalized entry list (plus portfolio
//! positions) that produce the headline figures the dashboard shows:
//! running balance, recent activity, portfolio totals, and the trailing
//! spending trend.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{LedgerEntry, Money, PortfolioPosition, PortfolioSummary, ReportingMonth};

/// Net balance of all entries dated on or before `today`
///
/// Income counts positive and expenses negative; entries dated in the
/// future are ignored.
pub fn current_balance(entries: &[LedgerEntry], today: NaiveDate) -> Money {
    entries
        .iter()
        .filter(|entry| entry.occurred_at <= today)
        .map(|entry| entry.signed_amount())
        .sum()
}

/// The most recent entries as of `today`, newest first
///
/// Takes the normalizer's date-ordered output; among same-day entries the
/// later-listed one counts as more recent.
pub fn recent_entries(entries: &[LedgerEntry], today: NaiveDate, limit: usize) -> Vec<LedgerEntry> {
    let mut recent: Vec<LedgerEntry> = entries
        .iter()
        .filter(|entry| entry.occurred_at <= today)
        .cloned()
        .collect();
    recent.reverse();
    recent.truncate(limit);
    recent
}

/// Portfolio totals with a value-weighted daily change
///
/// Each position's daily change is weighted by its market value. An empty
/// or valueless portfolio reports a change of zero rather than dividing
/// by zero.
pub fn portfolio_summary(positions: &[PortfolioPosition]) -> PortfolioSummary {
    let total_value: f64 = positions.iter().map(|p| p.market_value()).sum();
    if total_value == 0.0 {
        return PortfolioSummary::default();
    }

    let weighted: f64 = positions
        .iter()
        .map(|p| p.market_value() * p.daily_change_percent)
        .sum();

    PortfolioSummary {
        total_value,
        daily_change_percent: weighted / total_value,
    }
}

/// One month of a spending trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: ReportingMonth,
    pub total: Money,
}

/// Expense totals per month over the `months` months ending at `end`
///
/// Sparse: months without expenses are omitted. Points come back in
/// ascending month order.
pub fn spending_trend(
    entries: &[LedgerEntry],
    end: ReportingMonth,
    months: u32,
) -> Vec<TrendPoint> {
    if months == 0 {
        return Vec::new();
    }

    let window = end.trailing_window(months);
    let mut totals: BTreeMap<ReportingMonth, Money> = BTreeMap::new();
    for entry in entries {
        if entry.is_expense() && window.contains(entry.occurred_at) {
            *totals
                .entry(ReportingMonth::from_date(entry.occurred_at))
                .or_insert_with(Money::zero) += entry.amount;
        }
    }

    totals
        .into_iter()
        .map(|(month, total)| TrendPoint { month, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, RecordId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(kind: EntryKind, category: &str, cents: i64, on: NaiveDate) -> LedgerEntry {
        LedgerEntry::new(RecordId::new(), kind, category, Money::from_cents(cents), on)
    }

    #[test]
    fn test_current_balance_ignores_future() {
        let entries = vec![
            entry(EntryKind::Income, "Salary", 500000, date(2024, 3, 1)),
            entry(EntryKind::Expense, "Rent", 150000, date(2024, 3, 1)),
            entry(EntryKind::Expense, "Food", 20000, date(2024, 3, 15)),
            entry(EntryKind::Expense, "Food", 99999, date(2024, 3, 16)),
        ];

        let balance = current_balance(&entries, date(2024, 3, 15));
        assert_eq!(balance, Money::from_cents(330000));

        // The boundary date itself is included
        let on_entry_day = current_balance(&entries, date(2024, 3, 1));
        assert_eq!(on_entry_day, Money::from_cents(350000));
    }

    #[test]
    fn test_current_balance_can_go_negative() {
        let entries = vec![entry(EntryKind::Expense, "Rent", 150000, date(2024, 3, 1))];
        assert_eq!(
            current_balance(&entries, date(2024, 3, 31)),
            Money::from_cents(-150000)
        );
    }

    #[test]
    fn test_recent_entries_newest_first() {
        let entries = vec![
            entry(EntryKind::Expense, "A", 100, date(2024, 3, 1)),
            entry(EntryKind::Expense, "B", 100, date(2024, 3, 5)),
            entry(EntryKind::Expense, "C", 100, date(2024, 3, 10)),
            entry(EntryKind::Expense, "D", 100, date(2024, 3, 20)),
        ];

        let recent = recent_entries(&entries, date(2024, 3, 12), 2);
        let categories: Vec<_> = recent.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["C", "B"]);
    }

    #[test]
    fn test_recent_entries_same_day_order() {
        let entries = vec![
            entry(EntryKind::Expense, "First", 100, date(2024, 3, 5)),
            entry(EntryKind::Expense, "Second", 100, date(2024, 3, 5)),
        ];

        let recent = recent_entries(&entries, date(2024, 3, 5), 5);
        let categories: Vec<_> = recent.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["Second", "First"]);
    }

    #[test]
    fn test_recent_entries_limit_larger_than_list() {
        let entries = vec![entry(EntryKind::Expense, "A", 100, date(2024, 3, 1))];
        assert_eq!(recent_entries(&entries, date(2024, 3, 31), 5).len(), 1);
        assert!(recent_entries(&entries, date(2024, 2, 28), 5).is_empty());
    }

    #[test]
    fn test_portfolio_summary_weighted_change() {
        let mut up = PortfolioPosition::new("UP", 10.0, 100.0);
        up.daily_change_percent = 1.0;
        let mut down = PortfolioPosition::new("DOWN", 30.0, 100.0);
        down.daily_change_percent = -1.0;

        let summary = portfolio_summary(&[up, down]);
        assert_eq!(summary.total_value, 4000.0);
        // (1000 * 1.0 + 3000 * -1.0) / 4000
        assert_eq!(summary.daily_change_percent, -0.5);
    }

    #[test]
    fn test_portfolio_summary_empty() {
        let summary = portfolio_summary(&[]);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.daily_change_percent, 0.0);
    }

    #[test]
    fn test_portfolio_summary_zero_value_positions() {
        let mut worthless = PortfolioPosition::new("GONE", 100.0, 0.0);
        worthless.daily_change_percent = -99.0;

        let summary = portfolio_summary(&[worthless]);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.daily_change_percent, 0.0);
    }

    #[test]
    fn test_spending_trend_sparse_ascending() {
        let entries = vec![
            entry(EntryKind::Expense, "Food", 10000, date(2024, 1, 10)),
            entry(EntryKind::Expense, "Food", 20000, date(2024, 3, 10)),
            entry(EntryKind::Expense, "Rent", 150000, date(2024, 3, 1)),
            // Income never shows up in a spending trend
            entry(EntryKind::Income, "Salary", 500000, date(2024, 2, 1)),
            // Outside the trailing window
            entry(EntryKind::Expense, "Food", 5000, date(2023, 9, 1)),
        ];

        let trend = spending_trend(&entries, ReportingMonth::new(2024, 3), 6);

        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].month, ReportingMonth::new(2024, 1));
        assert_eq!(trend[0].total, Money::from_cents(10000));
        assert_eq!(trend[1].month, ReportingMonth::new(2024, 3));
        assert_eq!(trend[1].total, Money::from_cents(170000));
    }

    #[test]
    fn test_spending_trend_window_bounds() {
        let entries = vec![
            // Exactly six months back from March is October
            entry(EntryKind::Expense, "Food", 1000, date(2023, 10, 1)),
            entry(EntryKind::Expense, "Food", 2000, date(2023, 9, 30)),
        ];

        let trend = spending_trend(&entries, ReportingMonth::new(2024, 3), 6);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].month, ReportingMonth::new(2023, 10));
    }

    #[test]
    fn test_spending_trend_zero_months() {
        let entries = vec![entry(EntryKind::Expense, "Food", 1000, date(2024, 3, 1))];
        assert!(spending_trend(&entries, ReportingMonth::new(2024, 3), 0).is_empty());
    }
}
