//! Word types that the population-count unit accepts.
//!
//! The `PopWord` trait captures the fixed widths the counter is built for
//! (32, 64 and 128 bits) and the handful of operations every counting
//! strategy needs:
//!
//! - Native bit count (hardware instruction where available)
//! - Byte extraction (table lookup strategy)
//! - SWAR reduction tree (adder tree strategy)
//! - Construction from a wider bit pattern and rotation (test patterns)

/// A fixed-width unsigned word accepted by the population-count unit.
///
/// # Implementors
///
/// - `u32`, `u64`, `u128`
///
/// `u8` and `u16` are not implementors; the accumulator widens its 16-bit
/// lane planes to `u32` before counting.
pub trait PopWord: Copy + Default + Eq + Sized + core::fmt::Debug {
    /// Number of bits in this word type.
    const BITS: u32;

    /// All-zeros constant.
    const ZEROS: Self;

    /// All-ones constant (e.g., `0xFFFF_FFFF` for u32).
    const ONES: Self;

    /// Build a word from the low `Self::BITS` bits of `bits`.
    fn from_bits(bits: u128) -> Self;

    /// Widen this word to 128 bits (zero-extended).
    fn to_bits(self) -> u128;

    /// Extract byte `index` (0 = least significant).
    ///
    /// Indices past `Self::BITS / 8` yield 0.
    fn byte(self, index: u32) -> u8;

    /// Rotate left by `n` bits (modulo `Self::BITS`).
    fn rotate_left(self, n: u32) -> Self;

    /// Set-bit count using the platform instruction.
    fn count_native(self) -> u32;

    /// Set-bit count using a log-depth SWAR adder tree.
    ///
    /// ```text
    /// stage 1: 1-bit fields -> 2-bit sums   x - ((x >> 1) & 0x55..)
    /// stage 2: 2-bit fields -> 4-bit sums   (x & 0x33..) + ((x >> 2) & 0x33..)
    /// stage 3: 4-bit fields -> 8-bit sums   (x + (x >> 4)) & 0x0F..
    /// stage 4+: fold bytes                  x + (x >> 8), x + (x >> 16), ...
    /// ```
    ///
    /// Every byte holds at most 128 after the final fold, so the low byte of
    /// the result is the exact count for all supported widths.
    fn count_tree(self) -> u32;
}

// -----------------------------------------------------------------------------
// Scalar implementations
// -----------------------------------------------------------------------------

macro_rules! impl_pop_word {
    ($ty:ty, $bits:expr) => {
        impl PopWord for $ty {
            const BITS: u32 = $bits;
            const ZEROS: Self = 0;
            const ONES: Self = <$ty>::MAX;

            #[inline(always)]
            fn from_bits(bits: u128) -> Self {
                bits as $ty
            }

            #[inline(always)]
            fn to_bits(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn byte(self, index: u32) -> u8 {
                if index >= $bits / 8 {
                    0
                } else {
                    (self >> (index * 8)) as u8
                }
            }

            #[inline(always)]
            fn rotate_left(self, n: u32) -> Self {
                <$ty>::rotate_left(self, n % $bits)
            }

            #[inline(always)]
            fn count_native(self) -> u32 {
                self.count_ones()
            }

            #[inline]
            fn count_tree(self) -> u32 {
                const M1: $ty = <$ty>::MAX / 3; // 0x55..
                const M2: $ty = <$ty>::MAX / 5; // 0x33..
                const M4: $ty = <$ty>::MAX / 17; // 0x0F..

                let mut x = self;
                x -= (x >> 1) & M1;
                x = (x & M2) + ((x >> 2) & M2);
                x = (x + (x >> 4)) & M4;

                let mut shift: u32 = 8;
                while shift < $bits {
                    x += x >> shift;
                    shift <<= 1;
                }
                (x & 0xFF) as u32
            }
        }
    };
}

impl_pop_word!(u32, 32);
impl_pop_word!(u64, 64);
impl_pop_word!(u128, 128);
