//! # Money Type
//!
//! A lightweight wrapper for monetary amounts in whole currency units.
//!
//! ## Design Philosophy
//!
//! We use a simple newtype over `u64` rather than a decimal library because:
//! - Every rate in the pricing schedule is a whole currency amount
//! - Quote totals must be exact sums of their line items (no rounding drift)
//! - JSON serialization stays clean (just numbers)
//!
//! ## Example
//!
//! ```rust
//! use quote_core::money::Money;
//!
//! let widget_rate = Money(20);
//! let widgets_price = widget_rate * 10;
//! assert_eq!(widgets_price, Money(200));
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary amount in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    /// The zero amount
    pub const ZERO: Money = Money(0);

    /// Create from a raw amount
    pub fn new(amount: u64) -> Self {
        Money(amount)
    }

    /// Get the raw amount
    pub fn amount(self) -> u64 {
        self.0
    }

    /// Whether this amount is zero
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

/// Scale a rate by a count (e.g., widget rate × widget count)
impl Mul<u64> for Money {
    type Output = Self;
    fn mul(self, rhs: u64) -> Self::Output {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
