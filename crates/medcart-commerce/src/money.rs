//! Money type for rupee amounts.
//!
//! Uses paise-based integer representation to avoid floating-point
//! precision issues. All amounts in this system are INR.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary value in Indian rupees.
///
/// Amounts are stored in paise (1/100 rupee). Arithmetic that can
/// overflow is exposed only through checked `try_*` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in paise.
    pub paise: i64,
}

impl Money {
    /// Create a new Money value from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Create a Money value from whole rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self {
            paise: rupees * 100,
        }
    }

    /// Create a Money value from a decimal rupee amount.
    ///
    /// ```
    /// use medcart_commerce::money::Money;
    /// let price = Money::from_decimal(49.50);
    /// assert_eq!(price.paise, 4950);
    /// ```
    pub fn from_decimal(rupees: f64) -> Self {
        Self {
            paise: (rupees * 100.0).round() as i64,
        }
    }

    /// Create a zero amount.
    pub fn zero() -> Self {
        Self { paise: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.paise > 0
    }

    /// Convert to a decimal rupee value.
    pub fn to_decimal(&self) -> f64 {
        self.paise as f64 / 100.0
    }

    /// Format as a display string (e.g., "₹49.50").
    pub fn display(&self) -> String {
        format!("\u{20b9}{:.2}", self.to_decimal())
    }

    /// Try to add another Money value, checking for overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.paise.checked_add(other.paise).map(Money::from_paise)
    }

    /// Try to multiply by a scalar, checking for overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.paise.checked_mul(factor).map(Money::from_paise)
    }

    /// Sum an iterator of Money values, checking for overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
