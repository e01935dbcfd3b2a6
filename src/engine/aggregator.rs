//! Period aggregation
//!
//! Folds a normalized entry list into per-month totals. All arithmetic is
//! integer cents, so aggregating the same input always produces the same
//! output regardless of entry count or ordering.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{LedgerEntry, Money, ReportingMonth};

/// Totals for a single reporting month
///
/// `spend_by_category` is sparse: a category appears only when at least one
/// expense entry for it fell inside the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyAggregate {
    pub month: ReportingMonth,
    pub spend_by_category: BTreeMap<String, Money>,
    pub income_total: Money,
    pub expense_total: Money,
}

impl MonthlyAggregate {
    /// Income minus expenses for the month
    pub fn net(&self) -> Money {
        self.income_total - self.expense_total
    }

    /// Spend recorded against a category, zero when absent
    pub fn spent_in(&self, category: &str) -> Money {
        self.spend_by_category
            .get(category)
            .copied()
            .unwrap_or_else(Money::zero)
    }

    pub fn is_empty(&self) -> bool {
        self.income_total.is_zero() && self.expense_total.is_zero()
    }
}

/// Fold `entries` into totals for `month`
///
/// Entries outside the month are ignored. Income entries feed
/// `income_total` only; they never appear in the category map.
pub fn aggregate(entries: &[LedgerEntry], month: ReportingMonth) -> MonthlyAggregate {
    let mut aggregate = MonthlyAggregate {
        month,
        spend_by_category: BTreeMap::new(),
        income_total: Money::zero(),
        expense_total: Money::zero(),
    };

    for entry in entries {
        if !month.contains(entry.occurred_at) {
            continue;
        }
        if entry.is_income() {
            aggregate.income_total += entry.amount;
        } else {
            aggregate.expense_total += entry.amount;
            *aggregate
                .spend_by_category
                .entry(entry.category.clone())
                .or_insert_with(Money::zero) += entry.amount;
        }
    }

    debug!(
        %month,
        categories = aggregate.spend_by_category.len(),
        income = %aggregate.income_total,
        expenses = %aggregate.expense_total,
        "aggregated month"
    );

    aggregate
}
