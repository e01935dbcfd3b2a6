//! ledgerscope - Deterministic aggregation engine for personal finance dashboards
//!
//! This library turns raw recurring financial records into the derived
//! figures a dashboard displays: dated ledger entries, per-month spending
//! aggregates, budget utilization with threshold tiers and alerts, and
//! balance/portfolio rollups. Every engine entry point is a pure function;
//! "now" is always an explicit argument and no stage performs I/O.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings (thresholds, windows, reporting offset) and paths
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, records, entries, budgets)
//! - `engine`: The pure pipeline (normalize, aggregate, evaluate, rollups)
//! - `reports`: Report assembly over engine output
//! - `snapshot`: JSON input boundary standing in for the data-fetch layer
//! - `cli`: Command handlers for the binary
//! - `display`: Terminal formatting helpers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ledgerscope::engine::{aggregate, evaluate, normalize};
//! use ledgerscope::models::{
//!     BudgetAllocation, DateWindow, EntryKind, Frequency, Money, RecurringRecord,
//!     ReportingMonth, Thresholds,
//! };
//!
//! let records = vec![RecurringRecord::new(
//!     EntryKind::Expense,
//!     "Food",
//!     Money::from_cents(27_000),
//!     Frequency::Monthly,
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//! )];
//! let window = DateWindow::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
//! );
//!
//! let ledger = normalize(&records, window);
//! let month = ReportingMonth::new(2024, 3);
//! let totals = aggregate(&ledger.entries, month);
//!
//! let allocations = vec![BudgetAllocation::new("Food", month, Money::from_cents(30_000))];
//! let evaluation = evaluate(&allocations, &totals, Thresholds::default()).unwrap();
//! assert!(evaluation.has_alerts());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod reports;
pub mod snapshot;

pub use error::{LedgerError, LedgerResult};
pub use snapshot::Snapshot;
