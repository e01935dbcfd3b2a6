//! Money type for currency amounts
//!
//! Amounts are stored as whole cents in an i64 so that aggregation is exact.
//! Ratios (budget utilization, share of total) are the only place floating
//! point appears, and they are derived from cents at the last step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from cents
    ///
    /// # Examples
    /// ```
    /// use ledgerscope::models::Money;
    /// let rent = Money::from_cents(120_000); // $1200.00
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole currency units
    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Cents portion (0-99)
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Ratio of this amount to a denominator, `None` when the denominator
    /// is zero
    ///
    /// # Examples
    /// ```
    /// use ledgerscope::models::Money;
    /// let spent = Money::from_cents(27_000);
    /// let budgeted = Money::from_cents(30_000);
    /// assert_eq!(spent.ratio(budgeted), Some(0.9));
    /// assert_eq!(spent.ratio(Money::zero()), None);
    /// ```
    pub fn ratio(self, denominator: Money) -> Option<f64> {
        if denominator.is_zero() {
            None
        } else {
            Some(self.0 as f64 / denominator.0 as f64)
        }
    }

    /// Share of a total expressed as a percentage, 0.0 when the total is zero
    pub fn percent_of(self, total: Money) -> f64 {
        match self.ratio(total) {
            Some(r) => r * 100.0,
            None => 0.0,
        }
    }

    /// Parse an amount from a string
    ///
    /// Accepts "10.50", "-10.50", "$10.50" and "10". At most two fraction
    /// digits are allowed.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let cents = match s.split_once('.') {
            Some((whole, frac)) => {
                let units: i64 = whole
                    .parse()
                    .map_err(|_| MoneyParseError::Invalid(s.to_string()))?;
                let frac_cents: i64 = match frac.len() {
                    0 => 0,
                    1 => {
                        frac.parse::<i64>()
                            .map_err(|_| MoneyParseError::Invalid(s.to_string()))?
                            * 10
                    }
                    2 => frac
                        .parse()
                        .map_err(|_| MoneyParseError::Invalid(s.to_string()))?,
                    _ => return Err(MoneyParseError::Invalid(s.to_string())),
                };
                units * 100 + frac_cents
            }
            None => {
                s.parse::<i64>()
                    .map_err(|_| MoneyParseError::Invalid(s.to_string()))?
                    * 100
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a configurable currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.major().abs(), self.minor())
        } else {
            format!("{}{}.{:02}", symbol, self.major(), self.minor())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.major().abs(), self.minor())
        } else {
            write!(f, "${}.{:02}", self.major(), self.minor())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    Invalid(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Empty money amount"),
            MoneyParseError::Invalid(s) => write!(f, "Invalid money amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
