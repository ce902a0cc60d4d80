//! Ternary weights and their 2-bit wire encoding.
//!
//! | Code | Weight |
//! |------|--------|
//! | `00` | +1 |
//! | `01` | 0 |
//! | `10` | −1 |
//! | `11` | 0 (alias) |
//!
//! `11` is not a fourth state; it decodes to the same [`TernaryWeight::Zero`]
//! as `01`. Re-encoding a weight always produces the canonical code, so
//! `encode(decode(0b11)) == 0b01`.

use core::fmt;

/// Mask selecting the two code bits of a wire value.
pub const CODE_MASK: u8 = 0b11;

/// Canonical code for [`TernaryWeight::Positive`].
pub const CODE_POSITIVE: u8 = 0b00;

/// Canonical code for [`TernaryWeight::Zero`].
pub const CODE_ZERO: u8 = 0b01;

/// Canonical code for [`TernaryWeight::Negative`].
pub const CODE_NEGATIVE: u8 = 0b10;

/// Reserved code, decoded as [`TernaryWeight::Zero`].
pub const CODE_RESERVED: u8 = 0b11;

/// All four wire codes, in numeric order.
pub const ALL_CODES: [u8; 4] = [CODE_POSITIVE, CODE_ZERO, CODE_NEGATIVE, CODE_RESERVED];

/// A coefficient restricted to {+1, 0, −1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TernaryWeight {
    /// +1
    Positive,
    /// 0
    #[default]
    Zero,
    /// −1
    Negative,
}

impl TernaryWeight {
    /// Decode a 2-bit wire code. Bits above the low two are ignored.
    #[inline]
    pub const fn decode(code: u8) -> Self {
        match code & CODE_MASK {
            CODE_POSITIVE => TernaryWeight::Positive,
            CODE_NEGATIVE => TernaryWeight::Negative,
            _ => TernaryWeight::Zero,
        }
    }

    /// Canonical 2-bit wire code.
    #[inline]
    pub const fn encode(self) -> u8 {
        match self {
            TernaryWeight::Positive => CODE_POSITIVE,
            TernaryWeight::Zero => CODE_ZERO,
            TernaryWeight::Negative => CODE_NEGATIVE,
        }
    }

    /// Signed value: +1, 0 or −1.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            TernaryWeight::Positive => 1,
            TernaryWeight::Zero => 0,
            TernaryWeight::Negative => -1,
        }
    }

    /// Membership in the (positive, negative) bit planes.
    #[inline]
    pub const fn planes(self) -> (bool, bool) {
        match self {
            TernaryWeight::Positive => (true, false),
            TernaryWeight::Zero => (false, false),
            TernaryWeight::Negative => (false, true),
        }
    }
}

impl From<u8> for TernaryWeight {
    fn from(code: u8) -> Self {
        Self::decode(code)
    }
}

impl fmt::Display for TernaryWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TernaryWeight::Positive => "+1",
            TernaryWeight::Zero => "0",
            TernaryWeight::Negative => "-1",
        })
    }
}
