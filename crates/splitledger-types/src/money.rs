//! Fixed-point money in integer minor units.
//!
//! Every amount the engine touches is held as whole cents in an `i64`.
//! Share computation never goes through binary floating point: user text
//! is parsed with [`rust_decimal`], rounded half-up to the cent, and only
//! then converted to minor units.
//!
//! On the wire an amount is a base-10 string with exactly two fractional
//! digits (`"10.00"`). Inbound amounts may also arrive as JSON numbers.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{MAX_AMOUNT_MINOR, MINOR_UNITS_PER_MAJOR, MONEY_SCALE};
use crate::{Result, ValidationIssue};

/// A monetary amount in minor units (cents).
///
/// The type is signed so that derived values such as a net balance can go
/// below zero; inputs that must be positive are checked where they enter
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    /// One minor unit (0.01).
    pub const CENT: Self = Self(1);

    #[must_use]
    pub const fn from_minor(cents: i64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Convert a decimal to cents, rounding half-up (away from zero) at the
    /// cent boundary.
    ///
    /// # Errors
    /// `AmountOutOfRange` if the magnitude exceeds [`MAX_AMOUNT_MINOR`].
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        let rounded =
            value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
            .and_then(|cents| cents.to_i64())
            .filter(|cents| cents.checked_abs().is_some_and(|abs| abs <= MAX_AMOUNT_MINOR))
            .map(Self)
            .ok_or_else(|| ValidationIssue::AmountOutOfRange.into())
    }

    /// Parse user-typed text such as `"12.5"`, `"+3"` or `"10.005"`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let value = Decimal::from_str(digits).map_err(|_| ValidationIssue::InvalidAmount {
            input: input.to_string(),
        })?;
        Self::from_decimal(value)
    }

    /// The amount as a 2-decimal [`Decimal`].
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, MONEY_SCALE)
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Addition clamped at the `i64` bounds. Read-side views use this so a
    /// hostile snapshot can skew a figure but never abort aggregation.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Sum clamped at the `i64` bounds.
    #[must_use]
    pub fn saturating_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Self {
        amounts
            .into_iter()
            .fold(Self::ZERO, Self::saturating_add)
    }

    /// Sum that yields `None` instead of overflowing.
    #[must_use]
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, Self::checked_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl FromStr for Money {
    type Err = crate::SplitLedgerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
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
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::from_decimal(value).map_err(D::Error::custom)
    }
}
