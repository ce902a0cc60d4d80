//! PopCount exactness.
//!
//! Every pattern family at every width, counted by every strategy, must match
//! the bit-by-bit reference. The registered unit must report the count of the
//! word presented before the most recent edge.

use ternacc::popcount::patterns::{self, Family};
use ternacc::popcount::{PopWord, RegisteredPopCount, Strategy};

use super::push_detail;
use crate::report::{ConformanceReport, TestResult};

const SUITE: &str = "popcount/exactness";
const REGISTERED: &str = "popcount/registered";

/// Validates exactness for W ∈ {32, 64, 128} and the registered unit.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    check_width::<u32>(&mut report);
    check_width::<u64>(&mut report);
    check_width::<u128>(&mut report);
    for strategy in Strategy::ALL {
        check_registered(&mut report, strategy);
    }
    report
}

fn check_width<W: PopWord>(report: &mut ConformanceReport) {
    for family in Family::ALL {
        let words = family.generate::<W>();
        let mut details = Vec::new();
        for strategy in Strategy::ALL {
            for &word in &words {
                let got = strategy.count(word);
                let want = patterns::reference_count(word);
                if got != want {
                    push_detail(
                        &mut details,
                        format!("{strategy}: {word:#x?} counted {got}, expected {want}"),
                    );
                }
            }
        }
        report.push(TestResult::from_mismatches(
            SUITE,
            format!(
                "{}-bit {}: {} words × {} strategies",
                W::BITS,
                family.name(),
                words.len(),
                Strategy::ALL.len()
            ),
            details,
        ));
    }
}

fn check_registered(report: &mut ConformanceReport, strategy: Strategy) {
    let mut unit = RegisteredPopCount::<u128>::new(strategy);
    let mut previous = 0;
    let mut details = Vec::new();

    for word in patterns::all::<u128>() {
        unit.present(word);
        if unit.output() != previous {
            push_detail(
                &mut details,
                format!("output changed before the edge for {word:#x}"),
            );
        }
        unit.tick();
        previous = patterns::reference_count(word);
        if unit.output() != previous {
            push_detail(
                &mut details,
                format!("{word:#x}: registered {}, expected {previous}", unit.output()),
            );
        }
    }

    report.push(TestResult::from_mismatches(
        REGISTERED,
        format!("{strategy}: one-edge latency"),
        details,
    ));
}
