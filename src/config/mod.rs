//! Configuration module for ledgerscope
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (thresholds, windows, reporting offset)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
