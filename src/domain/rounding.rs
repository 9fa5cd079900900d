//! Explicit rounding direction for division.

/// Rounding direction for every division in the crate.
///
/// Pool math floors amounts paid out and ceils amounts charged, so the
/// pool never loses value to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}
