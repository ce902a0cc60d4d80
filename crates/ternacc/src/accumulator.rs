//! Masked ternary dot product over the weight store.
//!
//! `evaluate(mask)` is a 1-bit-activation × ternary-weight matrix-vector
//! product: each lane enabled by `mask` contributes the unweighted ternary
//! sum of its 16 elements, and the enabled lanes are summed.
//!
//! ```text
//! lane_i  = pop(positive_i) - pop(negative_i)        in -16..=16
//! result  = Σ lane_i  for every set bit i of mask    in -128..=128
//! ```
//!
//! # Example
//!
//! ```
//! use ternacc::accumulator::TernaryAccumulator;
//! use ternacc::weight::CODE_NEGATIVE;
//!
//! let mut acc = TernaryAccumulator::default();
//! for _ in 0..128 {
//!     acc.load(CODE_NEGATIVE);
//! }
//! assert_eq!(acc.evaluate(0b0000_0011), -32);
//! assert_eq!(acc.evaluate(0xFF), -128);
//! assert_eq!(acc.evaluate(0x00), 0);
//! ```

use crate::popcount::Strategy;
use crate::store::{lane_select, WeightStore, NUM_LANES};
use crate::weight::TernaryWeight;

/// Codes packed into one byte on the wide load path.
pub const CODES_PER_BYTE: usize = 4;

/// Stateful accumulator holding the weight store.
#[derive(Debug, Clone, Default)]
pub struct TernaryAccumulator {
    store: WeightStore,
    strategy: Strategy,
}

impl TernaryAccumulator {
    /// Create an accumulator with a zero store.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            store: WeightStore::zero(),
            strategy,
        }
    }

    /// Shift one 2-bit code into the store as the newest element.
    #[inline]
    pub fn load(&mut self, code: u8) {
        self.store.shift_in(TernaryWeight::decode(code));
    }

    /// Shift four codes packed in `byte` into the store.
    ///
    /// The most significant pair is the oldest: bits `7:6` are shifted in
    /// first and bits `1:0` last, so the byte reads left to right in load
    /// order.
    #[inline]
    pub fn load_packed(&mut self, byte: u8) {
        for code in unpack(byte) {
            self.load(code);
        }
    }

    /// Signed partial sum of one lane, or 0 for `lane >= NUM_LANES`.
    pub fn lane_sum(&self, lane: usize) -> i16 {
        match self.store.lane_planes(lane) {
            Some((pos, neg)) => {
                self.strategy.count(u32::from(pos)) as i16
                    - self.strategy.count(u32::from(neg)) as i16
            }
            None => 0,
        }
    }

    /// Sum of the partial sums of every lane enabled in `mask`.
    pub fn evaluate(&self, mask: u8) -> i16 {
        (0..NUM_LANES)
            .filter(|lane| (mask >> lane) & 1 == 1)
            .map(|lane| self.lane_sum(lane))
            .sum()
    }

    /// Same result as [`evaluate`](Self::evaluate), computed with one
    /// 128-bit count per plane instead of per-lane counts.
    pub fn evaluate_planes(&self, mask: u8) -> i16 {
        let select = lane_select(mask);
        self.strategy.count(self.store.positive_plane() & select) as i16
            - self.strategy.count(self.store.negative_plane() & select) as i16
    }

    /// Clear the store to all zero.
    pub fn reset(&mut self) {
        self.store.clear();
    }

    /// Read-only view of the store.
    pub fn store(&self) -> &WeightStore {
        &self.store
    }

    /// Strategy used for lane reduction.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Split a packed byte into its four codes, oldest first.
#[inline]
pub const fn unpack(byte: u8) -> [u8; CODES_PER_BYTE] {
    [
        (byte >> 6) & 0b11,
        (byte >> 4) & 0b11,
        (byte >> 2) & 0b11,
        byte & 0b11,
    ]
}

/// Pack four codes, oldest first, into one byte.
#[inline]
pub const fn pack(codes: [u8; CODES_PER_BYTE]) -> u8 {
    ((codes[0] & 0b11) << 6) | ((codes[1] & 0b11) << 4) | ((codes[2] & 0b11) << 2) | (codes[3] & 0b11)
}
