//! Aggregation engine
//!
//! The pure pipeline behind every report: expand recurring records into
//! dated entries, aggregate a month, evaluate budgets against it, and
//! roll up the dashboard figures. Every stage is deterministic; feeding
//! the same input twice produces the same output.

pub mod aggregator;
pub mod calendar;
pub mod evaluator;
pub mod normalizer;
pub mod rollups;

pub use aggregator::{aggregate, MonthlyAggregate};
pub use evaluator::{evaluate, BudgetEvaluation};
pub use normalizer::{normalize, NormalizedLedger, RejectedRecord};
pub use rollups::{current_balance, portfolio_summary, recent_entries, spending_trend, TrendPoint};
