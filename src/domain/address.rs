//! Account address of a token holder.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// A 20-byte EVM-style account address.
///
/// Parsed from and displayed as a `0x`-prefixed, 40-digit hex string.
/// All 20-byte sequences are valid, so [`from_bytes`](Self::from_bytes)
/// is infallible.
///
/// # Examples
///
/// ```
/// use mini_amm::domain::Address;
///
/// let addr: Address = "0x00000000000000000000000000000000000000ff".parse().expect("hex");
/// assert_eq!(addr.as_bytes()[19], 0xff);
/// assert_eq!(addr.to_string(), "0x00000000000000000000000000000000000000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 20-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0
    }

    /// The all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 20])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AmmError::InvalidFormat("address must start with 0x"))?;
        if hex.len() != 40 {
            return Err(AmmError::InvalidFormat("address must have 40 hex digits"));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AmmError::InvalidFormat("address has a non-hex digit"));
        }
        let mut bytes = [0u8; 20];
        for (slot, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks(2)) {
            *slot = (nibble(pair[0]) << 4) | nibble(pair[1]);
        }
        Ok(Self(bytes))
    }
}

/// Value of an ASCII hex digit already checked by `is_ascii_hexdigit`.
const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

impl TryFrom<String> for Address {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_string()
    }
}
