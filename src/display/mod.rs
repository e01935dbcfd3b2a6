//! Display formatting for terminal output

pub mod format;

pub use format::{format_bar, format_percentage, format_signed_percent, truncate};
