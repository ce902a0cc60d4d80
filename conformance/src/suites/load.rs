//! Load-path equivalence.
//!
//! Narrow, wide and serial loading of the same code sequence must leave the
//! same store and read back the same result for every mask.

use ternacc::{CoreConfig, LoadPath, ProtocolDriver};

use super::{push_detail, sample_sequences};
use crate::report::{ConformanceReport, TestResult};

const SUITE: &str = "load/equivalence";

/// Validates every load path against the narrow path.
pub fn validate(config: &CoreConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let sequences = sample_sequences();

    let mut reference = ProtocolDriver::new(config.with_load_path(LoadPath::Narrow));
    reference.reset();

    for path in [LoadPath::Wide, LoadPath::Serial] {
        let mut driver = ProtocolDriver::new(config.with_load_path(path));
        driver.reset();
        let mut details = Vec::new();

        for (i, codes) in sequences.iter().enumerate() {
            reference.load_sequence(codes);
            driver.load_sequence(codes);

            if reference.core().accumulator().store() != driver.core().accumulator().store() {
                push_detail(&mut details, format!("store #{i}: weight stores differ"));
                continue;
            }

            for mask in 0..=u8::MAX {
                reference.set_mask(mask);
                driver.set_mask(mask);
                reference.settle();
                driver.settle();
                if reference.read() != driver.read() {
                    push_detail(
                        &mut details,
                        format!(
                            "store #{i} mask {mask:#04x}: narrow {} vs {path} {}",
                            reference.read(),
                            driver.read()
                        ),
                    );
                }
            }
        }

        report.push(TestResult::from_mismatches(
            SUITE,
            format!(
                "narrow and {path} agree over {} stores × 256 masks ({} beats per load)",
                sequences.len(),
                path.full_load_beats()
            ),
            details,
        ));
    }

    report
}
