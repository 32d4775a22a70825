use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of decimal places every amount is fixed to.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest magnitude, in whole currency units, accepted from a form, an
/// import or stored data. A full ledger of such amounts still sums well
/// inside `Decimal`'s range.
pub const MAX_WHOLE_UNITS: i64 = 1_000_000_000_000;

/// A monetary value fixed to two decimal places.
///
/// Wraps `Decimal` so sums never drift the way binary floats do.
/// Serialized as a string (`"12.50"`); deserialized from either a string
/// or a JSON number so older or hand-edited data still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Create an amount, rounding half away from zero to two decimals.
    pub fn new(value: Decimal) -> Self {
        let mut rounded = value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(AMOUNT_SCALE);
        Self(rounded)
    }

    /// Parse a user- or file-supplied numeric string. Accepts plain decimals
    /// (`"12.5"`) and scientific notation (`"1.2e3"`). Returns `None` for
    /// anything else, including digit separators (`"1_000"`) and values
    /// beyond [`MAX_WHOLE_UNITS`].
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains('_') {
            return None;
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
            .and_then(Self::bounded)
    }

    /// Convert a JSON float. Non-finite and out-of-range values have no
    /// amount.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::from_f64(value).and_then(Self::bounded)
    }

    /// Round `value` and accept it only within [`MAX_WHOLE_UNITS`].
    pub fn bounded(value: Decimal) -> Option<Self> {
        let amount = Self::new(value);
        (amount.0.abs() <= Decimal::from(MAX_WHOLE_UNITS)).then_some(amount)
    }

    /// The underlying decimal value.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    /// Lossy conversion for chart collaborators that only speak floats.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Format for display: currency symbol, thousands grouping, two decimals.
    ///
    /// A negative value keeps its sign after the symbol (`₹-1,200.00`).
    #[must_use]
    pub fn format_currency(&self, symbol: &str) -> String {
        let plain = self.to_string();
        let (sign, digits) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));
        format!("{symbol}{sign}{}.{fraction}", group_thousands(whole))
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fixed = self.0;
        fixed.rescale(AMOUNT_SCALE);
        fmt::Display::fmt(&fixed, f)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount::new(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount::new(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ── Serde ───────────────────────────────────────────────────────────

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Amount::parse(v).ok_or_else(|| E::custom(format!("invalid amount '{v}'")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Amount::bounded(Decimal::from(v)).ok_or_else(|| E::custom(format!("amount {v} out of range")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Amount::bounded(Decimal::from(v)).ok_or_else(|| E::custom(format!("amount {v} out of range")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Amount::from_f64(v).ok_or_else(|| E::custom(format!("invalid amount {v}")))
    }
}
