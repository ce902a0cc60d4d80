//! Exact population count over fixed-width words.
//!
//! The counter is the arithmetic core of the accumulator: every lane of the
//! weight store is reduced by counting its positive and negative bit planes.
//! It is a pure function with no failure modes; every W-bit pattern yields a
//! count in `0..=W`.
//!
//! # Widths
//!
//! | Word | Bits | Max count |
//! |------|------|-----------|
//! | `u32` | 32 | 32 |
//! | `u64` | 64 | 64 |
//! | `u128` | 128 | 128 |
//!
//! # Strategies
//!
//! Three interchangeable reductions are provided. They are bit-exact with
//! each other for every input and are cross-checked by the test suite:
//!
//! - [`Strategy::Native`]: the platform popcount instruction
//! - [`Strategy::Lut`]: one 256-entry table lookup per byte, summed
//! - [`Strategy::Tree`]: a log-depth SWAR adder tree
//!
//! # Example
//!
//! ```
//! use ternacc::popcount::{popcount, Strategy};
//!
//! assert_eq!(popcount(0xF0F0_F0F0u32), 16);
//! assert_eq!(Strategy::Tree.count(u128::MAX), 128);
//! assert_eq!(Strategy::Lut.count(0x1u64 << 63), 1);
//! ```

pub mod lut;
pub mod patterns;
pub mod registered;
pub mod word;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use registered::RegisteredPopCount;
pub use word::PopWord;

/// Reduction strategy used to count set bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Platform popcount instruction.
    #[default]
    Native,
    /// Per-byte table lookup, summed.
    Lut,
    /// SWAR adder tree.
    Tree,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::Native, Strategy::Lut, Strategy::Tree];

    /// Count the set bits of `word`.
    #[inline]
    pub fn count<W: PopWord>(self, word: W) -> u32 {
        match self {
            Strategy::Native => word.count_native(),
            Strategy::Lut => lut::count_lut(word),
            Strategy::Tree => word.count_tree(),
        }
    }

    /// Lower-case name, as accepted by [`FromStr`] and the config file.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Native => "native",
            Strategy::Lut => "lut",
            Strategy::Tree => "tree",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

/// Count the set bits of `word` with the default strategy.
#[inline]
pub fn popcount<W: PopWord>(word: W) -> u32 {
    Strategy::default().count(word)
}
