//! Stress patterns for population-count exactness.
//!
//! These are the four families a reduction tree is most likely to get wrong:
//! carries between leaf counters, and misaligned boundaries between tree
//! stages. Each family is generated for any [`PopWord`] width.
//!
//! | Family | Count for W = 128 |
//! |--------|-------------------|
//! | low 12-bit exhaustive sweep | 4096 |
//! | every byte value at every byte offset | 256 × 16 |
//! | alternating `0101..` at every rotation | 128 |
//! | all-ones prefix of length 0..W at every rotation | 128 × 128 |

use super::word::PopWord;

/// Width of the exhaustive low-order sweep.
pub const LOW_SWEEP_BITS: u32 = 12;

/// Pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Every value of the low [`LOW_SWEEP_BITS`] bits.
    LowSweep,
    /// Every byte value placed at every byte offset.
    ByteWalk,
    /// Alternating bit pattern at every rotation.
    Checkerboard,
    /// All-ones prefix of every length, at every rotation.
    RotatingFill,
}

impl Family {
    /// All families, in generation order.
    pub const ALL: [Family; 4] = [
        Family::LowSweep,
        Family::ByteWalk,
        Family::Checkerboard,
        Family::RotatingFill,
    ];

    /// Short name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Family::LowSweep => "low-sweep",
            Family::ByteWalk => "byte-walk",
            Family::Checkerboard => "checkerboard",
            Family::RotatingFill => "rotating-fill",
        }
    }

    /// Generate every pattern in this family for width `W`.
    pub fn generate<W: PopWord>(self) -> Vec<W> {
        match self {
            Family::LowSweep => (0..1u128 << LOW_SWEEP_BITS).map(W::from_bits).collect(),
            Family::ByteWalk => (0..W::BITS / 8)
                .flat_map(|offset| (0..=255u128).map(move |b| W::from_bits(b << (offset * 8))))
                .collect(),
            Family::Checkerboard => {
                let base = W::from_bits(0x5555_5555_5555_5555_5555_5555_5555_5555);
                (0..W::BITS).map(|r| base.rotate_left(r)).collect()
            }
            Family::RotatingFill => (0..W::BITS)
                .flat_map(|len| {
                    let fill = W::from_bits(ones_below(len));
                    (0..W::BITS).map(move |r| fill.rotate_left(r))
                })
                .collect(),
        }
    }
}

/// Mask with the low `len` bits set (`len` in `0..=128`).
#[inline]
pub const fn ones_below(len: u32) -> u128 {
    if len == 0 {
        0
    } else if len >= 128 {
        u128::MAX
    } else {
        (1u128 << len) - 1
    }
}

/// Reference count computed one bit at a time, without any [`super::Strategy`].
pub fn reference_count<W: PopWord>(word: W) -> u32 {
    let bits = word.to_bits();
    (0..W::BITS).filter(|&i| (bits >> i) & 1 == 1).count() as u32
}

/// Every pattern of every family for width `W`.
pub fn all<W: PopWord>() -> Vec<W> {
    Family::ALL.iter().flat_map(|f| f.generate::<W>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_sizes() {
        assert_eq!(Family::LowSweep.generate::<u32>().len(), 4096);
        assert_eq!(Family::ByteWalk.generate::<u64>().len(), 256 * 8);
        assert_eq!(Family::Checkerboard.generate::<u128>().len(), 128);
        assert_eq!(Family::RotatingFill.generate::<u32>().len(), 32 * 32);
    }

    #[test]
    fn test_rotating_fill_counts() {
        let patterns = Family::RotatingFill.generate::<u64>();
        for (i, p) in patterns.iter().enumerate() {
            assert_eq!(p.count_ones(), (i / 64) as u32);
        }
    }

    #[test]
    fn test_ones_below() {
        assert_eq!(ones_below(0), 0);
        assert_eq!(ones_below(3), 0b111);
        assert_eq!(ones_below(128), u128::MAX);
    }

    #[test]
    fn test_reference_count() {
        assert_eq!(reference_count(0u32), 0);
        assert_eq!(reference_count(u128::MAX), 128);
        assert_eq!(reference_count(0x8000_0000_0000_0001u64), 2);
    }
}
