//! Uniform-weight scenario matrix.
//!
//! Loads all 128 weights with one code, selects lanes with a mask, and checks
//! the readout against `popcount(mask) × 16 × sign(code)` encoded in the
//! configured width. With the 16-bit width the split bytes are also checked
//! the way the bench reads them: `low` on the output port, `high` on the
//! bidirectional port.

use ternacc::weight::{TernaryWeight, ALL_CODES, CODE_NEGATIVE, CODE_POSITIVE};
use ternacc::{CoreConfig, ProtocolDriver, Readout, ResultWidth, LANE_DEPTH, NUM_LANES};

use crate::report::{ConformanceReport, TestResult};

const SUITE: &str = "scenario/uniform";
const SPLIT: &str = "scenario/readback";

/// Masks exercised by the bench: one lane, none, two lanes, all lanes.
pub const MASKS: [u8; 4] = [0x01, 0x00, 0x03, 0xFF];

/// Expected exact result for a uniform store of `code` under `mask`.
pub fn expected(mask: u8, code: u8) -> i16 {
    let lanes = mask.count_ones() as i16;
    lanes * LANE_DEPTH as i16 * i16::from(TernaryWeight::decode(code).sign())
}

/// Validates the scenario matrix under `config`.
pub fn validate(config: &CoreConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let width = config.result_width;
    let mut driver = ProtocolDriver::new(*config);
    driver.reset();

    for mask in MASKS {
        for code in ALL_CODES {
            let r = driver.measure(mask, code);
            let want = expected(mask, code);
            let want_bits = (want as u16) & width.mask();
            let message = format!("mask {mask:#04x} code {code:02b}: {r}");

            if r.bits() != want_bits {
                report.push(TestResult::fail_with_details(
                    SUITE,
                    message,
                    vec![format!("expected {want} ({want_bits:#06x})")],
                ));
            } else if width == ResultWidth::W8 && want == 128 {
                report.push(TestResult::warn(
                    SUITE,
                    format!("{message}: +128 reads back as -128 in an 8-bit register"),
                ));
            } else {
                report.push(TestResult::pass(SUITE, message));
            }
        }
    }

    if width == ResultWidth::W16 {
        check_split_readback(&mut driver, &mut report);
    }

    report
}

fn check_split_readback(driver: &mut ProtocolDriver, report: &mut ConformanceReport) {
    let all = u8::MAX >> (8 - NUM_LANES);
    let full = (NUM_LANES * LANE_DEPTH) as u16;

    let r = driver.measure(all, CODE_POSITIVE);
    report.push(check_bytes(r, "all lanes +1", u16::from(r.low) == full && r.high == 0));

    // Sign extension: every bit of the high byte above bit 0 is set.
    let r = driver.measure(all, CODE_NEGATIVE);
    let ok = u16::from(r.low) == 0x100 - full && r.high >> 1 == u8::MAX >> 1;
    report.push(check_bytes(r, "all lanes -1", ok));
}

fn check_bytes(r: Readout, what: &str, ok: bool) -> TestResult {
    let message = format!("{what}: high={:#04x} low={:#04x}", r.high, r.low);
    if ok {
        TestResult::pass(SPLIT, message)
    } else {
        TestResult::fail(SPLIT, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_matrix() {
        assert_eq!(expected(0x01, 0b00), 16);
        assert_eq!(expected(0x03, 0b00), 32);
        assert_eq!(expected(0xFF, 0b00), 128);
        assert_eq!(expected(0xFF, 0b10), -128);
        assert_eq!(expected(0xFF, 0b01), 0);
        assert_eq!(expected(0xFF, 0b11), 0);
        assert_eq!(expected(0x00, 0b10), 0);
    }

    #[test]
    fn test_sixteen_bit_has_no_warnings() {
        let report = validate(&CoreConfig::default());
        assert_eq!(report.warning_count(), 0);
        assert!(report.all_passed());
        assert_eq!(report.results.len(), MASKS.len() * ALL_CODES.len() + 2);
    }
}
