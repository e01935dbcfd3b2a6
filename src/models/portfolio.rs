//! Portfolio position model
//!
//! Market prices arrive from upstream as floating point and stay that way;
//! portfolio math is display-oriented and never mixes into the fixed-point
//! ledger amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A holding of one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPosition {
    /// Ticker symbol
    pub symbol: String,

    /// Number of shares held; must be positive to pass validation
    pub shares: f64,

    /// Latest price per share
    pub current_price: f64,

    /// Today's price movement for this symbol, in percent
    #[serde(default)]
    pub daily_change_percent: f64,
}

impl PortfolioPosition {
    pub fn new(symbol: impl Into<String>, shares: f64, current_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            shares,
            current_price,
            daily_change_percent: 0.0,
        }
    }

    /// Current market value of the holding
    pub fn market_value(&self) -> f64 {
        self.shares * self.current_price
    }

    /// Validate the position
    pub fn validate(&self) -> Result<(), PositionValidationError> {
        if self.shares <= 0.0 {
            return Err(PositionValidationError::NonPositiveShares {
                shares: self.shares,
            });
        }
        Ok(())
    }
}

impl fmt::Display for PortfolioPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} @ ${:.2}",
            self.symbol, self.shares, self.current_price
        )
    }
}

/// Validation errors for portfolio positions
#[derive(Debug, Clone, PartialEq)]
pub enum PositionValidationError {
    NonPositiveShares { shares: f64 },
}

impl fmt::Display for PositionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveShares { shares } => {
                write!(f, "Share count must be positive, got {}", shares)
            }
        }
    }
}

impl std::error::Error for PositionValidationError {}

/// Whole-portfolio totals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of market values across positions
    pub total_value: f64,

    /// Value-weighted average of per-symbol daily changes, in percent
    pub daily_change_percent: f64,
}

impl fmt::Display for PortfolioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${:.2} ({:+.2}% today)",
            self.total_value, self.daily_change_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_value() {
        let position = PortfolioPosition::new("VTI", 10.0, 250.0);
        assert_eq!(position.market_value(), 2500.0);
    }

    #[test]
    fn test_validation() {
        assert!(PortfolioPosition::new("VTI", 10.0, 250.0).validate().is_ok());
        assert!(matches!(
            PortfolioPosition::new("VTI", 0.0, 250.0).validate(),
            Err(PositionValidationError::NonPositiveShares { .. })
        ));
        assert!(PortfolioPosition::new("VTI", -1.0, 250.0).validate().is_err());
    }

    #[test]
    fn test_deserialize_with_default_change() {
        let json = r#"{"symbol": "VTI", "shares": 2.5, "current_price": 250.0}"#;
        let position: PortfolioPosition = serde_json::from_str(json).unwrap();
        assert_eq!(position.daily_change_percent, 0.0);
        assert_eq!(position.market_value(), 625.0);
    }

    #[test]
    fn test_summary_display() {
        let summary = PortfolioSummary {
            total_value: 10250.0,
            daily_change_percent: -0.42,
        };
        assert_eq!(format!("{}", summary), "$10250.00 (-0.42% today)");
    }
}
