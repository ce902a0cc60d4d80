//! The 128-element ternary weight store.
//!
//! The store is held as two 128-bit planes rather than an array of weights:
//! bit `k` of `positive` is set when element `k` is +1, bit `k` of `negative`
//! when it is −1, and neither for 0. The planes are never both set at the
//! same position.
//!
//! # Ordering
//!
//! Element 0 is the oldest, element 127 the newest. [`WeightStore::shift_in`]
//! drops element 0, moves every other element one position toward 0, and
//! writes the new weight at 127. After exactly 128 shifts from any state,
//! element `k` is the `k`-th weight shifted in.
//!
//! # Lane layout
//!
//! ```text
//! bit  127 ........ 112   ...   31 ......... 16   15 .......... 0
//!      [    lane 7     ]  ...   [   lane 1    ]   [   lane 0    ]
//! ```
//!
//! Lane `i` holds elements `16 * i .. 16 * i + 16`, i.e. load positions are
//! assigned to lanes in contiguous blocks of [`LANE_DEPTH`].

use crate::weight::TernaryWeight;

/// Number of lanes.
pub const NUM_LANES: usize = 8;

/// Weights per lane.
pub const LANE_DEPTH: usize = 16;

/// Total weights in the store.
pub const STORE_LEN: usize = NUM_LANES * LANE_DEPTH;

const NEWEST: u32 = STORE_LEN as u32 - 1;

/// Fixed-size ternary weight store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeightStore {
    positive: u128,
    negative: u128,
}

impl WeightStore {
    /// A store with every element [`TernaryWeight::Zero`].
    #[inline]
    pub const fn zero() -> Self {
        Self {
            positive: 0,
            negative: 0,
        }
    }

    /// A store with every element set to `weight`.
    pub const fn uniform(weight: TernaryWeight) -> Self {
        match weight {
            TernaryWeight::Positive => Self {
                positive: u128::MAX,
                negative: 0,
            },
            TernaryWeight::Zero => Self::zero(),
            TernaryWeight::Negative => Self {
                positive: 0,
                negative: u128::MAX,
            },
        }
    }

    /// Build a store by shifting in `weights` oldest-first onto a zero store.
    pub fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = TernaryWeight>,
    {
        let mut store = Self::zero();
        for w in weights {
            store.shift_in(w);
        }
        store
    }

    /// Append `weight` as the newest element and drop the oldest.
    ///
    /// This is the only mutation of the store; every load path goes through it.
    #[inline]
    pub fn shift_in(&mut self, weight: TernaryWeight) {
        let (p, n) = weight.planes();
        self.positive = (self.positive >> 1) | (u128::from(p) << NEWEST);
        self.negative = (self.negative >> 1) | (u128::from(n) << NEWEST);
    }

    /// Reset every element to [`TernaryWeight::Zero`].
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::zero();
    }

    /// Element at position `index` (0 = oldest), or `None` past the end.
    pub fn get(&self, index: usize) -> Option<TernaryWeight> {
        if index >= STORE_LEN {
            return None;
        }
        let p = (self.positive >> index) & 1 == 1;
        let n = (self.negative >> index) & 1 == 1;
        Some(match (p, n) {
            (true, _) => TernaryWeight::Positive,
            (_, true) => TernaryWeight::Negative,
            _ => TernaryWeight::Zero,
        })
    }

    /// All elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = TernaryWeight> + '_ {
        (0..STORE_LEN).filter_map(move |i| self.get(i))
    }

    /// Bit plane of +1 elements.
    #[inline]
    pub const fn positive_plane(&self) -> u128 {
        self.positive
    }

    /// Bit plane of −1 elements.
    #[inline]
    pub const fn negative_plane(&self) -> u128 {
        self.negative
    }

    /// The 16-bit (positive, negative) planes of `lane`, or `None` for
    /// `lane >= NUM_LANES`.
    #[inline]
    pub fn lane_planes(&self, lane: usize) -> Option<(u16, u16)> {
        if lane >= NUM_LANES {
            return None;
        }
        let shift = lane * LANE_DEPTH;
        Some(((self.positive >> shift) as u16, (self.negative >> shift) as u16))
    }
}

/// Expand an 8-bit lane mask into a 128-bit element selector.
///
/// Bit `i` of `mask` selects bits `16 * i .. 16 * i + 16`.
#[inline]
pub const fn lane_select(mask: u8) -> u128 {
    let mut select = 0u128;
    let mut lane = 0;
    while lane < NUM_LANES {
        if (mask >> lane) & 1 == 1 {
            select |= (u16::MAX as u128) << (lane * LANE_DEPTH);
        }
        lane += 1;
    }
    select
}
