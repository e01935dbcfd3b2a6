//! CLI command handlers
//!
//! Bridges clap argument parsing with the engine and reports.

pub mod config;
pub mod report;

pub use config::{handle_config_command, ConfigArgs};
pub use report::{
    handle_budget_command, handle_dashboard_command, handle_spending_command,
    handle_trend_command, ReportArgs,
};
