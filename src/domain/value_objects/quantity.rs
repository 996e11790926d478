//! Quantity value object - a resource amount such as `500m` CPU or `1Gi` memory
//!
//! Quantities are stored as a signed count of nano-units so that every
//! suffix (`n` through `Ei`) is represented exactly. Fractions finer than a
//! nano-unit round up, matching how resource amounts are usually rounded
//! when they are reserved.
//!
//! A quantity is immutable by convention. When a default is derived from
//! another field's quantity, use [`Quantity::copy`] so the two fields own
//! independent values.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DefaultsError, DefaultsResult};

const NANOS_PER_UNIT: i128 = 1_000_000_000;
const MAX_EXPONENT: i32 = 38;

const BINARY_SUFFIXES: &[(&str, u32)] = &[
    ("Ki", 10),
    ("Mi", 20),
    ("Gi", 30),
    ("Ti", 40),
    ("Pi", 50),
    ("Ei", 60),
];

// Largest first, used both for parsing and canonical formatting.
const DECIMAL_SUFFIXES: &[(&str, i32)] = &[
    ("E", 18),
    ("P", 15),
    ("T", 12),
    ("G", 9),
    ("M", 6),
    ("k", 3),
    ("", 0),
    ("m", -3),
    ("u", -6),
    ("n", -9),
];

/// Suffix family a quantity was written in; drives canonical formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuantityFormat {
    /// Powers of ten (`k`, `M`, `m`, exponent notation, or no suffix)
    #[default]
    DecimalSi,
    /// Powers of two (`Ki`, `Mi`, `Gi`, ...)
    BinarySi,
}

/// A resource amount.
#[derive(Debug, Clone, Default)]
pub struct Quantity {
    nanos: i128,
    format: QuantityFormat,
}

impl Quantity {
    /// Quantity of whole units (`Quantity::from_units(2)` is `2`).
    pub fn from_units(units: i64) -> Self {
        Self {
            nanos: i128::from(units) * NANOS_PER_UNIT,
            format: QuantityFormat::DecimalSi,
        }
    }

    /// Quantity of thousandths of a unit (`Quantity::from_milli(500)` is `500m`).
    pub fn from_milli(milli: i64) -> Self {
        Self {
            nanos: i128::from(milli) * 1_000_000,
            format: QuantityFormat::DecimalSi,
        }
    }

    /// Explicit deep copy. The result shares nothing with `self`.
    pub fn copy(&self) -> Self {
        Self {
            nanos: self.nanos,
            format: self.format,
        }
    }

    pub fn format(&self) -> QuantityFormat {
        self.format
    }

    /// Whole units, rounded up.
    pub fn value(&self) -> i128 {
        div_ceil(self.nanos, NANOS_PER_UNIT)
    }

    /// Thousandths of a unit, rounded up.
    pub fn milli_value(&self) -> i128 {
        div_ceil(self.nanos, 1_000_000)
    }

    /// Adds `other` in place, saturating at the representable range.
    pub fn add(&mut self, other: &Quantity) {
        self.nanos = self.nanos.saturating_add(other.nanos);
    }

    /// Subtracts `other` in place, saturating at the representable range.
    pub fn sub(&mut self, other: &Quantity) {
        self.nanos = self.nanos.saturating_sub(other.nanos);
    }

    /// Parse a quantity such as `100m`, `1.5`, `64Mi` or `1e3`.
    pub fn parse(input: &str) -> DefaultsResult<Self> {
        let invalid = |reason: String| DefaultsError::InvalidQuantity {
            input: input.to_string(),
            reason,
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty quantity".to_string()));
        }

        let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (false, rest)
        } else {
            (false, trimmed)
        };

        let number_len = unsigned
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(unsigned.len());
        let (number, suffix) = unsigned.split_at(number_len);
        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));

        if fraction.contains('.') {
            return Err(invalid("more than one decimal point".to_string()));
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("missing numeric value".to_string()));
        }

        let mut mantissa: i128 = 0;
        for digit in whole.bytes().chain(fraction.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit - b'0')))
                .ok_or_else(|| invalid("value out of range".to_string()))?;
        }

        let (binary_shift, decimal_exponent, format) =
            parse_suffix(suffix).ok_or_else(|| invalid(format!("unknown suffix '{}'", suffix)))?;

        let mut nanos = mantissa
            .checked_mul(1i128 << binary_shift)
            .ok_or_else(|| invalid("value out of range".to_string()))?;

        let exponent = decimal_exponent + 9 - fraction.len() as i32;
        if exponent >= 0 {
            nanos = pow10(exponent)
                .and_then(|scale| nanos.checked_mul(scale))
                .ok_or_else(|| invalid("value out of range".to_string()))?;
        } else if -exponent > MAX_EXPONENT {
            nanos = if nanos > 0 { 1 } else { 0 };
        } else {
            let divisor = pow10(-exponent).ok_or_else(|| invalid("value out of range".to_string()))?;
            nanos = div_ceil(nanos, divisor);
        }

        Ok(Self {
            nanos: if negative { -nanos } else { nanos },
            format,
        })
    }
}

/// Returns (binary shift, decimal exponent, format) for a suffix.
fn parse_suffix(suffix: &str) -> Option<(u32, i32, QuantityFormat)> {
    if let Some((_, shift)) = BINARY_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        return Some((*shift, 0, QuantityFormat::BinarySi));
    }
    if let Some((_, exponent)) = DECIMAL_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        return Some((0, *exponent, QuantityFormat::DecimalSi));
    }

    // Exponent notation: e3, E-2, e+6
    let digits = suffix.strip_prefix(['e', 'E'])?;
    let exponent: i32 = digits.parse().ok()?;
    if exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
        return None;
    }
    Some((0, exponent, QuantityFormat::DecimalSi))
}

fn pow10(exponent: i32) -> Option<i128> {
    10i128.checked_pow(u32::try_from(exponent).ok()?)
}

fn div_ceil(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    if numerator % denominator > 0 {
        quotient + 1
    } else {
        quotient
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.nanos == other.nanos
    }
}

impl Eq for Quantity {}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.nanos.cmp(&other.nanos)
    }
}

impl FromStr for Quantity {
    type Err = DefaultsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::parse(s)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos == 0 {
            return f.write_str("0");
        }

        if self.format == QuantityFormat::BinarySi && self.nanos % NANOS_PER_UNIT == 0 {
            let units = self.nanos / NANOS_PER_UNIT;
            for (suffix, shift) in BINARY_SUFFIXES.iter().rev() {
                let scale = 1i128 << shift;
                if units % scale == 0 {
                    return write!(f, "{}{}", units / scale, suffix);
                }
            }
        }

        for (suffix, exponent) in DECIMAL_SUFFIXES {
            let scale = 10i128.pow((exponent + 9) as u32);
            if self.nanos % scale == 0 {
                return write!(f, "{}{}", self.nanos / scale, suffix);
            }
        }

        write!(f, "{}n", self.nanos)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct QuantityVisitor;

impl Visitor<'_> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a resource quantity such as \"500m\" or \"1Gi\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
        Quantity::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quantity, E> {
        Ok(Quantity::from_units(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
        i64::try_from(v)
            .map(Quantity::from_units)
            .map_err(|_| E::custom("quantity out of range"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Quantity, E> {
        Quantity::parse(&v.to_string()).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}
