//! Budget allocation and status models
//!
//! An allocation assigns a spending limit to one category for one month.
//! Evaluating allocations against actual spending yields one status per
//! allocation: the utilization ratio and a threshold tier that drives the
//! dashboard's color and alert decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AllocationId;
use super::money::Money;
use super::period::ReportingMonth;

/// A budget limit for one category in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    /// Unique identifier (generated when omitted from input)
    #[serde(default)]
    pub id: AllocationId,

    /// The category this limit applies to
    pub category: String,

    /// The month this limit applies to
    pub month: ReportingMonth,

    /// Budgeted amount; must be positive to pass validation
    pub amount: Money,
}

impl BudgetAllocation {
    pub fn new(category: impl Into<String>, month: ReportingMonth, amount: Money) -> Self {
        Self {
            id: AllocationId::new(),
            category: category.into(),
            month,
            amount,
        }
    }

    /// Validate the allocation
    ///
    /// Zero budgets are rejected here so that utilization is always
    /// well-defined by the time statuses are computed.
    pub fn validate(&self) -> Result<(), AllocationValidationError> {
        if !self.amount.is_positive() {
            return Err(AllocationValidationError::NonPositiveAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }
}

impl fmt::Display for BudgetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.amount)
    }
}

/// Validation errors for budget allocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationValidationError {
    NonPositiveAmount { amount: Money },
}

impl fmt::Display for AllocationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount { amount } => {
                write!(f, "Budget amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for AllocationValidationError {}

/// Utilization cutoffs separating the budget tiers
///
/// These are configuration, not constants: callers pass them in from
/// settings. Both boundaries are inclusive on the higher tier's side, so a
/// budget spent to exactly 90% classifies as over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Utilization at or above this is at least a warning
    pub warning: f64,

    /// Utilization at or above this is over budget
    pub over: f64,
}

impl Thresholds {
    pub fn new(warning: f64, over: f64) -> Self {
        Self { warning, over }
    }

    /// Classify an unclamped utilization ratio
    pub fn classify(&self, utilization: f64) -> BudgetTier {
        if utilization >= self.over {
            BudgetTier::Over
        } else if utilization >= self.warning {
            BudgetTier::Warning
        } else {
            BudgetTier::Ok
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: 0.75,
            over: 0.90,
        }
    }
}

/// Threshold tier of a budget status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Ok,
    Warning,
    Over,
}

impl BudgetTier {
    /// Short marker for table rendering
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARN",
            Self::Over => "OVER",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "Ok"),
            Self::Warning => write!(f, "Warning"),
            Self::Over => write!(f, "Over"),
        }
    }
}

/// Evaluated state of one allocation for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub category: String,
    pub month: ReportingMonth,
    pub budgeted: Money,
    pub spent: Money,

    /// `spent / budgeted` as a ratio, unclamped; `None` instead of a
    /// division by zero when nothing was budgeted
    pub utilization: Option<f64>,

    pub tier: BudgetTier,
}

impl BudgetStatus {
    /// Compute the status of an allocation given the month's spending
    pub fn evaluate(allocation: &BudgetAllocation, spent: Money, thresholds: Thresholds) -> Self {
        let utilization = spent.ratio(allocation.amount);
        let tier = match utilization {
            Some(u) => thresholds.classify(u),
            // A zero budget never reaches evaluation; any spend against
            // one still counts as over.
            None => {
                if spent.is_positive() {
                    BudgetTier::Over
                } else {
                    BudgetTier::Ok
                }
            }
        };

        Self {
            category: allocation.category.clone(),
            month: allocation.month,
            budgeted: allocation.amount,
            spent,
            utilization,
            tier,
        }
    }

    /// Budget left this month; negative when overspent
    pub fn remaining(&self) -> Money {
        self.budgeted - self.spent
    }

    /// Progress percentage for display, clamped to 100
    ///
    /// The tier always comes from the unclamped ratio; only the rendered
    /// percentage is capped.
    pub fn progress_percent(&self) -> f64 {
        match self.utilization {
            Some(u) => u.min(1.0) * 100.0,
            None => {
                if self.spent.is_positive() {
                    100.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Whether this status should raise a budget alert
    pub fn needs_alert(&self) -> bool {
        self.tier == BudgetTier::Over
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} ({:.0}%, {})",
            self.category,
            self.spent,
            self.budgeted,
            self.progress_percent(),
            self.tier
        )
    }
}

/// Spending in a month with no allocation for its category
///
/// Reported alongside statuses, never merged into them as a zero-budget
/// row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbudgetedSpend {
    pub category: String,
    pub month: ReportingMonth,
    pub spent: Money,
}

impl fmt::Display for UnbudgetedSpend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} spent with no budget ({})",
            self.category, self.spent, self.month
        )
    }
}
