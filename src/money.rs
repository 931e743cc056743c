//! Fixed-point monetary amounts.
//!
//! Balances are held at 4 decimal places via `rust_decimal` and shown to
//! customers with exactly 2.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount with a fixed internal scale of 4 decimal places.
///
/// Arithmetic renormalizes the scale so equal amounts compare and print the
/// same regardless of how they were produced.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_accounts::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
///
/// The operator impls panic on overflow like `Decimal`'s; account code uses
/// the `checked_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places kept internally.
    pub const SCALE: u32 = 4;

    /// The number of decimal places shown to customers.
    pub const DISPLAY_PLACES: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a `Money` from a `Decimal`, normalizing to 4 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Builds a constant from a count of ten-thousandths.
    pub(crate) const fn from_ten_thousandths(units: u32) -> Self {
        Money(Decimal::from_parts(units, 0, 0, false, Self::SCALE))
    }

    /// Returns `true` if this amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if this amount is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `rate` percent of this amount, or `None` on overflow.
    pub fn checked_percent(&self, rate: Decimal) -> Option<Self> {
        let product = self.0.checked_mul(rate)?;
        product.checked_div(Decimal::ONE_HUNDRED).map(Money::new)
    }

    /// Sum, or `None` if it does not fit in a `Decimal`.
    pub fn checked_add(&self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money::new)
    }

    /// Difference, or `None` if it does not fit in a `Decimal`.
    pub fn checked_sub(&self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money::new)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money::new(value)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money::new(-self.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_display_uses_two_places() {
        assert_eq!(money("1").to_string(), "1.00");
        assert_eq!(money("7.5").to_string(), "7.50");
        assert_eq!(money("  2.5  ").to_string(), "2.50");
        assert_eq!(money("-41.5").to_string(), "-41.50");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(money("0.125").to_string(), "0.13");
        assert_eq!(money("0.135").to_string(), "0.14");
        assert_eq!(money("-0.125").to_string(), "-0.13");
        assert_eq!(money("3.5115").to_string(), "3.51");
    }

    #[test]
    fn test_internal_scale_is_kept() {
        let d = money("1.5");
        assert_eq!(d.0.scale(), Money::SCALE);
        assert_eq!((d + money("0.0001")).0.to_string(), "1.5001");
    }

    #[test]
    fn test_constants_from_ten_thousandths() {
        assert_eq!(Money::from_ten_thousandths(15_000), money("1.5"));
        assert_eq!(Money::from_ten_thousandths(1_000_000), money("100"));
    }

    #[test]
    fn test_arithmetic_and_sign() {
        let a = money("100");
        let b = money("141.5");

        let diff = a - b;
        assert_eq!(diff, money("-41.5"));
        assert!(diff.is_negative());
        assert!(!diff.is_positive());
        assert_eq!(-diff, money("41.5"));
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn test_checked_percent() {
        assert_eq!(money("150").checked_percent(Decimal::new(5, 0)), Some(money("7.5")));
        assert_eq!(money("200").checked_percent(Decimal::new(25, 1)), Some(money("5")));
        assert_eq!(money("0").checked_percent(Decimal::new(5, 0)), Some(Money::ZERO));
        assert_eq!(Money::new(Decimal::MAX).checked_percent(Decimal::new(500, 0)), None);
    }

    #[test]
    fn test_checked_add_and_sub_overflow() {
        let huge = money("70000000000000000000000000000");

        assert_eq!(huge.checked_add(huge), None);
        assert_eq!((-huge).checked_sub(huge), None);
        assert_eq!(money("1.5").checked_add(money("2")), Some(money("3.5")));
        assert_eq!(money("1.5").checked_sub(money("2")), Some(money("-0.5")));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::from_str("ten").is_err());
        assert!(Money::from_str("").is_err());
    }
}
