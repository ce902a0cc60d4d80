//! Latency conformance.
//!
//! A load completing on edge N is visible after edge N + depth; a mask
//! presented on edge N after edge N + depth − 1. Before that the
//! previous result must still be on the output, and afterwards it must not
//! move.

use ternacc::weight::{CODE_NEGATIVE, CODE_POSITIVE};
use ternacc::{CoreConfig, ProtocolDriver};

use crate::report::{ConformanceReport, TestResult};

const SUITE: &str = "latency";

/// Extra edges observed after the result is due.
const HOLD_TICKS: usize = 4;

/// Validates load and mask latency for the configured depth.
pub fn validate(config: &CoreConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let depth = config.latency.ticks();

    let mut driver = ProtocolDriver::new(*config);
    driver.reset();

    // One lane keeps the values distinct in the 8-bit width.
    let before = driver.measure(0x01, CODE_POSITIVE).signed();
    driver.load_uniform(CODE_NEGATIVE);
    let target = -before;
    // The first idle edge is one past the final load beat.
    report.push(check_edges(
        trace(&mut driver, depth - 1),
        depth - 1,
        target,
        format!("load visible {depth} edge(s) after the final beat"),
    ));

    // The first idle edge presents the new mask.
    driver.set_mask(0x03);
    report.push(check_edges(
        trace(&mut driver, depth - 1),
        depth - 1,
        2 * target,
        format!("mask change visible on edge {depth} of presentation"),
    ));

    report
}

fn trace(driver: &mut ProtocolDriver, early: usize) -> Vec<i16> {
    (0..early + 1 + HOLD_TICKS)
        .map(|_| driver.idle().readout.signed())
        .collect()
}

/// The first `early` samples must differ from `target`; the rest must equal it.
fn check_edges(seen: Vec<i16>, early: usize, target: i16, message: String) -> TestResult {
    let mut details = Vec::new();
    if let Some(k) = seen[..early].iter().position(|&v| v == target) {
        details.push(format!("visible {} edge(s) early: {seen:?}", early - k));
    }
    if seen[early..].iter().any(|&v| v != target) {
        details.push(format!("not stable at {target}: {seen:?}"));
    }
    TestResult::from_mismatches(SUITE, message, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ternacc::Latency;

    #[test]
    fn test_check_edges() {
        assert!(!check_edges(vec![1, 2, 5, 5], 2, 5, String::new()).is_failure());
        assert!(!check_edges(vec![5, 5], 0, 5, String::new()).is_failure());
        assert!(check_edges(vec![5, 2, 5, 5], 2, 5, String::new()).is_failure());
        assert!(check_edges(vec![1, 2, 5, 4], 2, 5, String::new()).is_failure());
    }

    #[test]
    fn test_every_depth_conforms() -> ternacc::Result<()> {
        for depth in 1..=8 {
            let config = CoreConfig::default().with_latency(Latency::new(depth)?);
            assert!(validate(&config).all_passed(), "depth {depth}");
        }
        Ok(())
    }
}
