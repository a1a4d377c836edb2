//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Machine prices, cart lines, order totals and retailer prices all use this
/// type. Everything in the demo dataset is priced in USD, so arithmetic keeps
/// the currency of the left-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// Create a USD price from a whole number of cents.
    ///
    /// ```
    /// use auro_core::Price;
    ///
    /// assert_eq!(Price::from_cents(1299).to_string(), "$12.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::usd(Decimal::new(cents, 2))
    }

    /// A zero USD price.
    #[must_use]
    pub const fn zero() -> Self {
        Self::usd(Decimal::ZERO)
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(250).amount, Decimal::new(250, 2));
        assert_eq!(Price::from_cents(-5).amount, Decimal::new(-5, 2));
    }

    #[test]
    fn test_times_and_sum() {
        let lines = [Price::from_cents(1299).times(2), Price::from_cents(1499)];
        let total: Price = lines.into_iter().sum();
        assert_eq!(total, Price::from_cents(4097));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::usd(Decimal::new(2, 0)).to_string(), "$2.00");
        assert_eq!(Price::from_cents(175).to_string(), "$1.75");
    }

    #[test]
    fn test_ordering_by_amount() {
        assert!(Price::from_cents(599) < Price::from_cents(649));
    }

    #[test]
    fn test_serde_uses_string_amounts() {
        let json = serde_json::to_string(&Price::from_cents(799)).unwrap();
        assert_eq!(json, r#"{"amount":"7.99","currencyCode":"USD"}"#);
        let parsed: Price = serde_json::from_str(r#"{"amount":"7.99"}"#).unwrap();
        assert_eq!(parsed, Price::from_cents(799));
    }
}
