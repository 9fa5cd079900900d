//! Token sides of the two-token pool.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the two pool tokens.
///
/// As a swap direction, `Side::X` means "X in, Y out" and `Side::Y`
/// means "Y in, X out".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Token X (shown as Token A in the frontend).
    X,
    /// Token Y (shown as Token B in the frontend).
    Y,
}

impl Side {
    /// Returns the other token.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::Y => f.write_str("Y"),
        }
    }
}

/// Anything a holder can have a balance of: either pool token or LP shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// A pool token.
    Token(Side),
    /// Liquidity-provider shares of the pool.
    LpShare,
}

impl From<Side> for Asset {
    fn from(side: Side) -> Self {
        Self::Token(side)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(side) => write!(f, "token {side}"),
            Self::LpShare => f.write_str("LP share"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flips() {
        assert_eq!(Side::X.opposite(), Side::Y);
        assert_eq!(Side::Y.opposite(), Side::X);
    }

    #[test]
    fn asset_from_side() {
        assert_eq!(Asset::from(Side::Y), Asset::Token(Side::Y));
        assert_eq!(Asset::LpShare.to_string(), "LP share");
        assert_eq!(Asset::Token(Side::X).to_string(), "token X");
    }
}
