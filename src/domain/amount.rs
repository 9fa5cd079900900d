//! Non-negative token quantity at a fixed 18-decimal scale.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AmmError, Result};
use crate::math::mul_div;

/// Number of decimal places every amount is scaled by.
pub const SCALE_DECIMALS: u32 = 18;

/// `10^18`, the raw value of one whole token.
const ONE_RAW: u128 = 10u128.pow(SCALE_DECIMALS);

/// A token quantity in base units (value × 10^18).
///
/// Negative balances do not exist in this domain, so the magnitude is a
/// plain `u128`. Arithmetic never truncates silently: additions and
/// subtractions are checked, and ratios go through a 256-bit
/// [`mul_div`] so `a × n / d` is exact before the final floor.
///
/// Decimal strings are only a boundary concern: parse user input with
/// [`from_decimal_str`](Self::from_decimal_str) and format for display with
/// [`to_decimal_string`](Self::to_decimal_string) or
/// [`format_fixed`](Self::format_fixed). Nothing in the pool math ever
/// consumes a formatted value.
///
/// # Examples
///
/// ```
/// use mini_amm::domain::FixedPointAmount;
///
/// let a = FixedPointAmount::from_decimal_str("1.5").expect("valid");
/// assert_eq!(a.get(), 1_500_000_000_000_000_000);
/// assert_eq!(a.to_decimal_string(), "1.5");
/// assert_eq!(a.format_fixed(2), "1.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct FixedPointAmount(u128);

impl FixedPointAmount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Exactly one whole token (`10^18` base units).
    pub const ONE: Self = Self(ONE_RAW);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates an amount from raw base units.
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Creates an amount from a whole number of tokens.
    ///
    /// Cannot overflow: `u64::MAX × 10^18 < u128::MAX`.
    pub const fn from_tokens(tokens: u64) -> Self {
        Self(tokens as u128 * ONE_RAW)
    }

    /// Returns the raw base-unit value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` if `other > self`.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `floor(self × numerator / denominator)` with a full-width
    /// intermediate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the result exceeds `u128`.
    pub fn mul_div(&self, numerator: Self, denominator: Self) -> Result<Self> {
        mul_div(self.0, numerator.0, denominator.0).map(Self)
    }

    /// Parses a non-negative decimal string in whole-token units.
    ///
    /// Accepted: `"12"`, `"12.5"`, `".5"`, `"5."`, with optional
    /// surrounding whitespace and at most 18 fractional digits.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFormat`] on empty input, a sign character,
    ///   any non-digit, or more than 18 fractional digits.
    /// - [`AmmError::Overflow`] if the value exceeds the `u128` range.
    pub fn from_decimal_str(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(AmmError::InvalidFormat("empty amount"));
        }
        if s.starts_with('-') {
            return Err(AmmError::InvalidFormat("negative amount"));
        }

        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(AmmError::InvalidFormat("no digits"));
        }
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(AmmError::InvalidFormat("non-numeric character"));
        }
        if frac_part.len() > SCALE_DECIMALS as usize {
            return Err(AmmError::InvalidFormat("more than 18 fractional digits"));
        }

        let mut whole: u128 = 0;
        for b in int_part.bytes() {
            whole = whole
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(b - b'0')))
                .ok_or(AmmError::Overflow("amount exceeds u128 range"))?;
        }

        let mut frac: u128 = 0;
        for b in frac_part.bytes() {
            frac = frac * 10 + u128::from(b - b'0');
        }
        // Right-pad the fraction to 18 digits.
        let pad = SCALE_DECIMALS - frac_part.len() as u32;
        frac *= 10u128.pow(pad);

        whole
            .checked_mul(ONE_RAW)
            .and_then(|v| v.checked_add(frac))
            .map(Self)
            .ok_or(AmmError::Overflow("amount exceeds u128 range"))
    }

    /// Formats the exact value in whole-token units with trailing zeros
    /// trimmed (`"1"`, `"0.5"`, `"0.000000000000000001"`).
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        let whole = self.0 / ONE_RAW;
        let frac = self.0 % ONE_RAW;
        if frac == 0 {
            return whole.to_string();
        }
        let digits = format!("{frac:018}");
        format!("{whole}.{}", digits.trim_end_matches('0'))
    }

    /// Formats with exactly `places` fractional digits, rounding half up.
    ///
    /// `places` above 18 is clamped to 18. Display only.
    ///
    /// ```
    /// use mini_amm::domain::FixedPointAmount;
    ///
    /// let a = FixedPointAmount::new(1_234_567_000_000_000_000);
    /// assert_eq!(a.format_fixed(2), "1.23");
    /// assert_eq!(a.format_fixed(4), "1.2346");
    /// assert_eq!(a.format_fixed(0), "1");
    /// ```
    #[must_use]
    pub fn format_fixed(&self, places: u8) -> String {
        let places = u32::from(places).min(SCALE_DECIMALS);
        let unit = 10u128.pow(SCALE_DECIMALS - places);
        let q = self.0 / unit;
        let r = self.0 % unit;
        // q + 1 cannot overflow when unit > 1 since q <= u128::MAX / 10.
        let rounded = if unit > 1 && r >= unit - unit / 2 { q + 1 } else { q };

        if places == 0 {
            return rounded.to_string();
        }
        let scale = 10u128.pow(places);
        let width = places as usize;
        format!("{}.{:0width$}", rounded / scale, rounded % scale)
    }
}

impl fmt::Display for FixedPointAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for FixedPointAmount {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal_str(s)
    }
}

impl Serialize for FixedPointAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for FixedPointAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_decimal_str(&s).map_err(serde::de::Error::custom)
    }
}
