//! Budget evaluation
//!
//! Compares a month's aggregated spending against its budget allocations.
//! A duplicate allocation for the same category and month is a
//! configuration defect and fails the whole evaluation rather than being
//! merged or last-one-wins resolved.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetAllocation, BudgetStatus, Thresholds, UnbudgetedSpend};

use super::aggregator::MonthlyAggregate;

/// Outcome of evaluating a month's allocations against its spending
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEvaluation {
    /// One status per allocation for the month, in allocation input order
    pub statuses: Vec<BudgetStatus>,

    /// Spending in categories with no allocation, sorted by category
    pub unbudgeted: Vec<UnbudgetedSpend>,
}

impl BudgetEvaluation {
    /// Statuses whose tier calls for an alert
    pub fn alerts(&self) -> impl Iterator<Item = &BudgetStatus> {
        self.statuses.iter().filter(|status| status.needs_alert())
    }

    pub fn has_alerts(&self) -> bool {
        self.alerts().next().is_some()
    }
}

/// Evaluate `allocations` against the spending in `aggregate`
///
/// Allocations for other months are ignored. Every allocation passed in is
/// validated first; a bad one fails the evaluation since allocations are
/// configuration, not tolerated input like ledger records.
pub fn evaluate(
    allocations: &[BudgetAllocation],
    aggregate: &MonthlyAggregate,
    thresholds: Thresholds,
) -> LedgerResult<BudgetEvaluation> {
    for allocation in allocations {
        if let Err(reason) = allocation.validate() {
            return Err(LedgerError::InvalidAllocation {
                category: allocation.category.clone(),
                month: allocation.month,
                reason,
            });
        }
    }

    let month_allocations: Vec<&BudgetAllocation> = allocations
        .iter()
        .filter(|allocation| allocation.month == aggregate.month)
        .collect();

    let mut budgeted: HashSet<&str> = HashSet::new();
    for allocation in &month_allocations {
        if !budgeted.insert(allocation.category.as_str()) {
            return Err(LedgerError::duplicate_allocation(
                &allocation.category,
                allocation.month,
            ));
        }
    }

    let statuses: Vec<BudgetStatus> = month_allocations
        .iter()
        .map(|allocation| {
            BudgetStatus::evaluate(allocation, aggregate.spent_in(&allocation.category), thresholds)
        })
        .collect();

    // BTreeMap iteration order keeps this sorted by category
    let unbudgeted: Vec<UnbudgetedSpend> = aggregate
        .spend_by_category
        .iter()
        .filter(|(category, _)| !budgeted.contains(category.as_str()))
        .map(|(category, &spent)| UnbudgetedSpend {
            category: category.clone(),
            month: aggregate.month,
            spent,
        })
        .collect();

    debug!(
        month = %aggregate.month,
        statuses = statuses.len(),
        unbudgeted = unbudgeted.len(),
        "evaluated budgets"
    );

    Ok(BudgetEvaluation {
        statuses,
        unbudgeted,
    })
}
