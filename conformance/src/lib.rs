//! ternacc conformance suite.
//!
//! Drives the `ternacc` model through the same reset, load and readback
//! protocol the hardware testbench uses and re-derives its assertions, plus
//! the algebraic properties every configuration must satisfy.
//!
//! # Conformance Scope
//!
//! | Suite | Checks |
//! |-------|--------|
//! | `popcount` | exactness per width, pattern family and strategy; registered latency |
//! | `scenario` | uniform-weight matrix, masks 0x01/0x00/0x03/0xFF × codes 00/01/10/11 |
//! | `mask` | empty mask yields zero for any store |
//! | `load` | narrow, wide and serial loading agree |
//! | `reset` | reset plus a full ZERO load yields zero for every mask |
//! | `latency` | result not visible early, stable afterwards |
//!
//! # Entry Point
//!
//! ```
//! use ternacc::CoreConfig;
//! use ternacc_conformance::run_all;
//!
//! let report = run_all(&CoreConfig::pipelined());
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod suites;

pub use report::{ConformanceReport, Severity, TestResult};

use ternacc::CoreConfig;
use tracing::info;

/// Runs every suite against `config` and returns the aggregated report.
///
/// Suites are run in this order:
/// 1. PopCount exactness and registered latency (configuration independent)
/// 2. Uniform-weight scenario matrix
/// 3. Empty mask
/// 4. Load-path equivalence
/// 5. Reset
/// 6. Latency
pub fn run_all(config: &CoreConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let runs: [(&str, fn(&CoreConfig) -> ConformanceReport); 6] = [
        ("popcount", |_| suites::popcount::validate()),
        ("scenario", suites::scenario::validate),
        ("mask", suites::mask::validate),
        ("load", suites::load::validate),
        ("reset", suites::reset::validate),
        ("latency", suites::latency::validate),
    ];

    for (name, run) in runs {
        let part = run(config);
        info!(
            suite = name,
            passed = part.pass_count(),
            warnings = part.warning_count(),
            failed = part.failure_count(),
            "suite finished"
        );
        report.extend(part);
    }

    report
}

#[cfg(test)]
mod tests_unit {
    use super::*;
    use ternacc::{LoadPath, ResultWidth};

    #[test]
    fn default_config_passes() {
        let report = run_all(&CoreConfig::default());
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "conformance failures: {:#?}", failures);
    }

    #[test]
    fn pipelined_serial_passes() {
        let config = CoreConfig::pipelined().with_load_path(LoadPath::Serial);
        assert!(run_all(&config).all_passed());
    }

    #[test]
    fn eight_bit_width_warns_on_alias() {
        let config = CoreConfig::default().with_result_width(ResultWidth::W8);
        let report = run_all(&config);
        assert!(report.all_passed());
        assert!(report.warning_count() > 0);
    }
}
