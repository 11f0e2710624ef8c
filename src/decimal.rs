use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// BRL money type with centavo (2 decimal place) precision.
/// Midpoints round away from zero, never banker's rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

fn round_centavos(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal, rounding to the cent boundary
    pub fn from_decimal(d: Decimal) -> Self {
        Money(round_centavos(d))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(round_centavos(Decimal::from_str(s)?)))
    }

    /// create from whole reais
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from centavos
    pub fn from_centavos(amount: i64) -> Self {
        Money(Decimal::from(amount) / Decimal::from(100))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative()
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// apply a rate (e.g. the flat overdue fine), rounded once
    pub fn apply_rate(&self, rate: Rate) -> Self {
        Money::from_decimal(self.0 * rate.as_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(round_centavos(self.0 + other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = round_centavos(self.0 + other.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(round_centavos(self.0 - other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = round_centavos(self.0 - other.0);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(round_centavos(self.0 * other))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(round_centavos(self.0 / other))
    }
}

/// rate type for fine/interest percentages and ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.02 for 2%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 2 for 2%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    /// create from basis points (e.g., 10 for 0.1%)
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::from(bps) / Decimal::from(10000))
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_centavo_precision() {
        let m = Money::from_str_exact("100.123").unwrap();
        assert_eq!(m.to_string(), "100.12");
    }

    #[test]
    fn test_half_up_rounding() {
        // midpoints go away from zero, not to the even neighbour
        assert_eq!(Money::from_decimal(dec!(0.005)), Money::from_centavos(1));
        assert_eq!(Money::from_decimal(dec!(0.015)), Money::from_centavos(2));
        assert_eq!(Money::from_decimal(dec!(0.025)), Money::from_centavos(3));
        assert_eq!(Money::from_decimal(dec!(-0.005)), Money::from_centavos(-1));
    }

    #[test]
    fn test_centavos_constructor() {
        assert_eq!(Money::from_centavos(123450), Money::from_str_exact("1234.50").unwrap());
        assert_eq!(Money::from_centavos(100), Money::from_major(1));
    }

    #[test]
    fn test_apply_rate() {
        let amount = Money::from_major(1_000);
        assert_eq!(amount.apply_rate(Rate::from_percentage(2)), Money::from_major(20));
        assert_eq!(amount.apply_rate(Rate::from_bps(10)), Money::from_major(1));
    }

    #[test]
    fn test_rate_conversions() {
        assert_eq!(Rate::from_percentage(2).as_decimal(), dec!(0.02));
        assert_eq!(Rate::from_bps(10).as_decimal(), dec!(0.001));
        assert_eq!(Rate::from_decimal(dec!(0.001)).as_percentage(), dec!(0.1));
    }

    #[test]
    fn test_arithmetic_stays_on_cent_boundary() {
        let a = Money::from_str_exact("10.10").unwrap();
        let b = Money::from_str_exact("0.055").unwrap(); // rounds to 0.06 on construction
        assert_eq!(a + b, Money::from_str_exact("10.16").unwrap());
        assert_eq!(a - b, Money::from_str_exact("10.04").unwrap());
    }
}
