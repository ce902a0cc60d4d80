//! Conformance suites. Each exposes `validate`, which returns a
//! [`ConformanceReport`](crate::ConformanceReport) and never fails.

pub mod latency;
pub mod load;
pub mod mask;
pub mod popcount;
pub mod reset;
pub mod scenario;

use ternacc::STORE_LEN;

/// Detail lines kept per failing result.
const MAX_DETAILS: usize = 8;

/// Number of pseudo-random code sequences used by the store-driven suites.
const SAMPLE_SEQUENCES: usize = 16;

/// Append `line` unless the detail list is already full.
fn push_detail(details: &mut Vec<String>, line: String) {
    if details.len() < MAX_DETAILS {
        details.push(line);
    }
}

/// Deterministic full-length code sequences (SplitMix64).
///
/// The first sequence is the all-NEGATIVE vector so that every suite also
/// sees the extreme store.
fn sample_sequences() -> Vec<Vec<u8>> {
    let mut state: u64 = 0x7E57_ACC0_0000_0001;
    let mut next = move || {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    };

    let mut sequences = vec![vec![ternacc::weight::CODE_NEGATIVE; STORE_LEN]];
    while sequences.len() < SAMPLE_SEQUENCES {
        let mut codes = Vec::with_capacity(STORE_LEN);
        while codes.len() < STORE_LEN {
            let mut word = next();
            for _ in 0..32 {
                codes.push((word & 0b11) as u8);
                word >>= 2;
            }
        }
        codes.truncate(STORE_LEN);
        sequences.push(codes);
    }
    sequences
}
