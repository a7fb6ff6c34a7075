//! # Price Value Object
//!
//! Arbitrary-precision monetary amount used for market values, offers and
//! transfer fees.
//!
//! All amounts in the market share this one decimal type so that comparisons
//! and ledger entries never suffer rounding drift.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use transfer_market::domain::value_objects::Price;
//!
//! let fee = Price::new(Decimal::from(80_000_000)).unwrap();
//! assert!(fee.is_positive());
//! assert!(Price::new(Decimal::from(-1)).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative decimal amount.
///
/// # Invariants
///
/// - Never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeAmount` if `amount` is below zero.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount(amount));
        }
        Ok(Self(amount))
    }

    /// Returns the decimal amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is strictly greater than zero.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
