//! Precomputed byte table for O(1) per-byte bit counting.
//!
//! The table is computed at compile time and stored in read-only memory.
//! A W-bit word is counted by summing `W / 8` table lookups, which mirrors a
//! hardware counter built from 8-input leaf counters feeding an adder.
//!
//! # Example
//!
//! ```
//! use ternacc::popcount::lut::{byte_popcount, count_lut};
//!
//! assert_eq!(byte_popcount(0b1111_1111), 8);
//! assert_eq!(byte_popcount(0b1010_1010), 4);
//! assert_eq!(count_lut(0xFFFF_0000_0000_00FFu64), 24);
//! ```

use super::word::PopWord;

/// Precomputed set-bit count for every byte value.
///
/// `BYTE_POPCOUNT[x]` = popcount(x) for x in 0..256.
/// Size: 256 bytes (fits in L1 cache).
pub static BYTE_POPCOUNT: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        // Build by recurrence so the table does not depend on count_ones.
        table[i as usize] = (i & 1) as u8 + table[(i >> 1) as usize];
        i += 1;
    }
    table
};

/// O(1) set-bit count of one byte.
#[inline]
pub const fn byte_popcount(value: u8) -> u8 {
    BYTE_POPCOUNT[value as usize]
}

/// Count set bits of a word by summing one table lookup per byte.
#[inline]
pub fn count_lut<W: PopWord>(word: W) -> u32 {
    (0..W::BITS / 8)
        .map(|i| u32::from(byte_popcount(word.byte(i))))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_table_matches_count_ones() {
        for i in 0..=255u8 {
            assert_eq!(byte_popcount(i), i.count_ones() as u8);
        }
    }

    #[test]
    fn test_count_lut_widths() {
        assert_eq!(count_lut(0u32), 0);
        assert_eq!(count_lut(u32::MAX), 32);
        assert_eq!(count_lut(u64::MAX), 64);
        assert_eq!(count_lut(u128::MAX), 128);
        assert_eq!(count_lut(0x8000_0001u32), 2);
    }
}
