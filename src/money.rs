//! Exact monetary amounts for rental prices and statement totals.
//!
//! Uses `rust_decimal` internally so that tariffs such as `1.5` per day add up
//! without floating-point drift, and keeps every value normalized so that it
//! renders in its shortest form (`3`, `6.5`, `24.5`).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

/// A decimal amount kept in normalized form (no trailing zeros).
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use rental_statement::Amount;
///
/// let price = Amount::from_str("6.50").unwrap();
/// assert_eq!(price.to_string(), "6.5");
/// assert_eq!((price + Amount::new(35, 1)).to_string(), "10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates an amount of `mantissa * 10^-scale`, e.g. `Amount::new(15, 1)` is `1.5`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` exceeds 28, the largest scale `rust_decimal` supports.
    pub fn new(mantissa: i64, scale: u32) -> Self {
        Self::from_decimal(Decimal::new(mantissa, scale))
    }

    /// Wraps a `Decimal`, stripping trailing zeros.
    pub fn from_decimal(value: Decimal) -> Self {
        Amount(value.normalize())
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::from_decimal(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::from_decimal(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Scales a daily rate by a number of days.
impl Mul<u32> for Amount {
    type Output = Self;

    fn mul(self, days: u32) -> Self::Output {
        Amount::from_decimal(self.0 * Decimal::from(days))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
