//! Empty mask: with no lanes selected the result is zero for any store.

use ternacc::{CoreConfig, ProtocolDriver};

use super::{push_detail, sample_sequences};
use crate::report::{ConformanceReport, TestResult};

const SUITE: &str = "mask/empty";

/// Validates the empty mask over the sample stores.
pub fn validate(config: &CoreConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut driver = ProtocolDriver::new(*config);
    driver.reset();
    driver.set_mask(0);

    let sequences = sample_sequences();
    let mut details = Vec::new();
    for (i, codes) in sequences.iter().enumerate() {
        driver.load_sequence(codes);
        driver.settle();
        let r = driver.read();
        if r.bits() != 0 {
            push_detail(&mut details, format!("store #{i}: {r}"));
        }
    }

    report.push(TestResult::from_mismatches(
        SUITE,
        format!("mask 0x00 over {} stores", sequences.len()),
        details,
    ));
    report
}
