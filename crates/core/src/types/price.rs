//! Shelf price of a record, using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Prices cannot be below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative shelf price in the shop's currency.
///
/// Stored as a [`Decimal`] so arithmetic never drifts, but exchanged over
/// JSON as a plain number (`29.99`) because that is what the frontend sends
/// and expects. Deserializing accepts numbers and numeric strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Build a price from a whole number of cents, e.g. `2999` is `29.99`.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

/// Formats as a dollar amount with two decimals, e.g. `$29.99`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_negative_rejected() {
        let amount = Decimal::from_str("-0.01").unwrap();
        assert_eq!(Price::new(amount), Err(PriceError::Negative(amount)));
    }

    #[test]
    fn test_zero_allowed() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::from_str("-0").unwrap()).is_ok());
    }

    #[test]
    fn test_serializes_as_number() {
        let price = Price::new(Decimal::from_str("29.99").unwrap()).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "29.99");
    }

    #[test]
    fn test_deserializes_from_number() {
        let price: Price = serde_json::from_str("14.99").unwrap();
        assert_eq!(price.amount(), Decimal::from_str("14.99").unwrap());

        let whole: Price = serde_json::from_str("30").unwrap();
        assert_eq!(whole.amount(), Decimal::from(30));
    }

    #[test]
    fn test_deserialize_rejects_negative_and_garbage() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert!(serde_json::from_str::<Price>("\"cheap\"").is_err());
    }

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(2999);
        assert_eq!(price.amount(), Decimal::from_str("29.99").unwrap());
    }

    #[test]
    fn test_display_has_two_decimals() {
        let price = Price::new(Decimal::from(12)).unwrap();
        assert_eq!(price.to_string(), "$12.00");
    }
}
