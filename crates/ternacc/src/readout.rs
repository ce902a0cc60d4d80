//! Two's-complement result encoding and the split byte readout.
//!
//! The exact result lies in `-128..=128`. It is truncated to the configured
//! [`ResultWidth`] and exposed as two bytes: `low` carries bits `7:0` on the
//! dedicated output port, `high` carries bits `15:8` on the bidirectional
//! port (always 0 for the 8-bit variant).
//!
//! | Value | 8-bit | 16-bit (`high`, `low`) |
//! |-------|-------|------------------------|
//! | 16 | `0x10` | `0x00`, `0x10` |
//! | 128 | `0x80` | `0x00`, `0x80` |
//! | −128 | `0x80` | `0xFF`, `0x80` |
//!
//! The 8-bit variant aliases +128 and −128 onto `0x80`; only the 16-bit
//! variant keeps the whole range distinguishable.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Configured width of the result register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ResultWidth {
    /// 8-bit two's complement.
    W8,
    /// 16-bit two's complement.
    #[default]
    W16,
}

impl ResultWidth {
    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            ResultWidth::W8 => 8,
            ResultWidth::W16 => 16,
        }
    }

    /// Mask covering the register bits.
    pub const fn mask(self) -> u16 {
        match self {
            ResultWidth::W8 => 0x00FF,
            ResultWidth::W16 => 0xFFFF,
        }
    }
}

impl TryFrom<u32> for ResultWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(ResultWidth::W8),
            16 => Ok(ResultWidth::W16),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }
}

impl From<ResultWidth> for u32 {
    fn from(width: ResultWidth) -> Self {
        width.bits()
    }
}

/// Result register contents as seen on the output ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Readout {
    /// Bits `7:0`.
    pub low: u8,
    /// Bits `15:8`; 0 for the 8-bit variant.
    pub high: u8,
    /// Register width the bytes were encoded for.
    pub width: ResultWidth,
}

impl Readout {
    /// A zeroed register of `width`.
    pub const fn zero(width: ResultWidth) -> Self {
        Self {
            low: 0,
            high: 0,
            width,
        }
    }

    /// Encode `value` modulo `2^width`.
    pub const fn encode(value: i16, width: ResultWidth) -> Self {
        let bits = (value as u16) & width.mask();
        Self {
            low: bits as u8,
            high: (bits >> 8) as u8,
            width,
        }
    }

    /// Raw register bits.
    pub const fn bits(&self) -> u16 {
        ((self.high as u16) << 8) | self.low as u16
    }

    /// Sign-extended value.
    pub const fn signed(&self) -> i16 {
        match self.width {
            ResultWidth::W8 => self.low as i8 as i16,
            ResultWidth::W16 => self.bits() as i16,
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width {
            ResultWidth::W8 => write!(f, "{} (0x{:02X})", self.signed(), self.low),
            ResultWidth::W16 => write!(
                f,
                "{} (high=0x{:02X} low=0x{:02X})",
                self.signed(),
                self.high,
                self.low
            ),
        }
    }
}
