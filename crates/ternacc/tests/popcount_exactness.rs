//! Exactness of the population count for every width and strategy.
//!
//! The deterministic sweeps cover the pattern families that break reduction
//! trees (carries between leaf counters, misaligned stage boundaries); the
//! property tests cover random words and cross-strategy agreement.

use proptest::prelude::*;
use ternacc::popcount::patterns::{self, Family};
use ternacc::popcount::{PopWord, RegisteredPopCount, Strategy as Reduction};

fn assert_family_exact<W: PopWord>(family: Family) {
    for strategy in Reduction::ALL {
        for word in family.generate::<W>() {
            assert_eq!(
                strategy.count(word),
                patterns::reference_count(word),
                "{strategy} miscounted {word:?} ({}-bit {})",
                W::BITS,
                family.name()
            );
        }
    }
}

// =============================================================================
// Deterministic sweeps
// =============================================================================

#[test]
fn test_low_sweep_all_widths() {
    assert_family_exact::<u32>(Family::LowSweep);
    assert_family_exact::<u64>(Family::LowSweep);
    assert_family_exact::<u128>(Family::LowSweep);
}

#[test]
fn test_byte_walk_all_widths() {
    assert_family_exact::<u32>(Family::ByteWalk);
    assert_family_exact::<u64>(Family::ByteWalk);
    assert_family_exact::<u128>(Family::ByteWalk);
}

#[test]
fn test_checkerboard_all_widths() {
    assert_family_exact::<u32>(Family::Checkerboard);
    assert_family_exact::<u64>(Family::Checkerboard);
    assert_family_exact::<u128>(Family::Checkerboard);
}

#[test]
fn test_rotating_fill_all_widths() {
    assert_family_exact::<u32>(Family::RotatingFill);
    assert_family_exact::<u64>(Family::RotatingFill);
    assert_family_exact::<u128>(Family::RotatingFill);
}

#[test]
fn test_checkerboard_is_half_full() {
    for word in Family::Checkerboard.generate::<u128>() {
        assert_eq!(Reduction::Tree.count(word), 64);
    }
    for word in Family::Checkerboard.generate::<u32>() {
        assert_eq!(Reduction::Lut.count(word), 16);
    }
}

#[test]
fn test_registered_unit_latency() {
    let mut unit = RegisteredPopCount::<u128>::new(Reduction::Tree);
    let words: Vec<u128> = patterns::all::<u128>().into_iter().take(512).collect();
    let mut previous = 0;
    for word in words {
        unit.present(word);
        assert_eq!(unit.output(), previous, "output changed before the edge");
        unit.tick();
        previous = patterns::reference_count(word);
        assert_eq!(unit.output(), previous);
    }
}

// =============================================================================
// Random words
// =============================================================================

proptest! {
    /// Every strategy agrees with the native count on 32-bit words.
    #[test]
    fn prop_strategies_agree_u32(x: u32) {
        for strategy in Reduction::ALL {
            prop_assert_eq!(strategy.count(x), x.count_ones());
        }
    }

    /// Every strategy agrees with the native count on 64-bit words.
    #[test]
    fn prop_strategies_agree_u64(x: u64) {
        for strategy in Reduction::ALL {
            prop_assert_eq!(strategy.count(x), x.count_ones());
        }
    }

    /// Every strategy agrees with the native count on 128-bit words.
    #[test]
    fn prop_strategies_agree_u128(x: u128) {
        for strategy in Reduction::ALL {
            prop_assert_eq!(strategy.count(x), x.count_ones());
        }
    }

    /// pop(x) + pop(!x) = W
    #[test]
    fn prop_complement_sums_to_width(x: u128) {
        prop_assert_eq!(Reduction::Tree.count(x) + Reduction::Tree.count(!x), 128);
        let lo = x as u32;
        prop_assert_eq!(Reduction::Lut.count(lo) + Reduction::Lut.count(!lo), 32);
    }

    /// pop(a | b) + pop(a & b) = pop(a) + pop(b)
    #[test]
    fn prop_inclusion_exclusion(a in any::<u64>(), b in any::<u64>()) {
        let s = Reduction::Tree;
        prop_assert_eq!(s.count(a | b) + s.count(a & b), s.count(a) + s.count(b));
    }

    /// Rotation preserves the count.
    #[test]
    fn prop_rotation_invariant(x in any::<u128>(), r in 0u32..128) {
        prop_assert_eq!(
            Reduction::Lut.count(PopWord::rotate_left(x, r)),
            Reduction::Lut.count(x)
        );
    }
}
