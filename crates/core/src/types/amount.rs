//! Strictly positive money amounts using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing an [`Amount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The value is zero or negative.
    #[error("amount must be greater than zero, got {0}")]
    NotPositive(Decimal),
}

/// A strictly positive money amount.
///
/// Used for contribution amounts and wish funding targets, so "amount > 0"
/// is enforced at construction rather than left to caller discipline.
/// Currency is implicit (single-currency application); precision comes from
/// [`rust_decimal::Decimal`] - no floating point drift in running totals.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use wishflick_core::Amount;
///
/// assert!(Amount::new(Decimal::new(2500, 0)).is_ok());
/// assert!(Amount::new(Decimal::ZERO).is_err());
/// assert!(Amount::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Create an `Amount` from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::NotPositive`] if the value is zero or negative.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Create an `Amount` from a whole number of currency units.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::NotPositive`] if the value is zero or negative.
    pub fn from_units(units: i64) -> Result<Self, AmountError> {
        Self::new(Decimal::new(units, 0))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_accepted() {
        let amount = Amount::from_units(1200).unwrap();
        assert_eq!(amount.get(), Decimal::new(1200, 0));
    }

    #[test]
    fn fractional_values_accepted() {
        // 0.01 is the smallest sensible pledge
        assert!(Amount::new(Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn zero_rejected() {
        assert_eq!(
            Amount::new(Decimal::ZERO),
            Err(AmountError::NotPositive(Decimal::ZERO))
        );
    }

    #[test]
    fn negative_rejected() {
        assert!(Amount::from_units(-50).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<Amount, _> = serde_json::from_str("\"25\"");
        assert!(ok.is_ok());

        let bad: Result<Amount, _> = serde_json::from_str("\"-25\"");
        assert!(bad.is_err());
    }
}
