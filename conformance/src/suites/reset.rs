//! Reset: while reset is held the output is zero and not valid; after
//! release and a full ZERO load every mask reads zero.

use ternacc::cycle::TickInput;
use ternacc::weight::CODE_NEGATIVE;
use ternacc::{CoreConfig, LoadPath, ProtocolDriver, MIN_RESET_TICKS};

use super::push_detail;
use crate::report::{ConformanceReport, TestResult};

const SUITE: &str = "reset";

/// Validates reset behavior for every load path.
pub fn validate(config: &CoreConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for path in LoadPath::ALL {
        let mut driver = ProtocolDriver::new(config.with_load_path(path));
        driver.reset();
        driver.measure(0xFF, CODE_NEGATIVE);

        let mut details = Vec::new();
        for tick in 0..MIN_RESET_TICKS {
            let out = driver.core_mut().tick(TickInput::reset());
            if out.valid || out.readout.bits() != 0 {
                push_detail(
                    &mut details,
                    format!("reset tick {tick}: output {} valid={}", out.readout, out.valid),
                );
            }
        }

        driver.reset();
        for mask in 0..=u8::MAX {
            driver.set_mask(mask);
            let out = driver.settle();
            if !out.valid || out.readout.bits() != 0 {
                push_detail(
                    &mut details,
                    format!("mask {mask:#04x}: {} valid={}", out.readout, out.valid),
                );
            }
        }

        report.push(TestResult::from_mismatches(
            SUITE,
            format!("{path}: output held at zero, then zero for all 256 masks"),
            details,
        ));
    }

    report
}
