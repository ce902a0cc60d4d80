//! ternacc - Ternary-weight popcount accumulator
//!
//! A bit-exact model of a small fixed-function accelerator: a 128-element
//! ternary weight store, split into 8 lanes of 16, reduced lane by lane with
//! an exact population count and summed under an 8-bit lane mask.
//!
//! # Data Flow
//!
//! ```text
//! weight port ──▶ WeightLoader ──▶ WeightStore (2 × u128 bit planes)
//!                                        │
//! lane mask ─────────────────────────────┤
//!                                        ▼
//!                       per-lane pop(pos) - pop(neg)
//!                                        │
//!                                        ▼
//!                          Σ enabled lanes  (-128..=128)
//!                                        │
//!                                        ▼
//!                       DelayLine (1 or 3 stages) ──▶ Readout
//! ```
//!
//! # Layers
//!
//! | Layer | Type | Timing |
//! |-------|------|--------|
//! | Arithmetic | [`popcount`], [`TernaryAccumulator`] | combinational |
//! | Cycle | [`CycleCore`] | one call = one clock edge |
//! | Protocol | [`ProtocolDriver`] | reset / load / settle / read |
//!
//! # Weight Codes
//!
//! | Code | Weight |
//! |------|--------|
//! | `00` | +1 |
//! | `01` | 0 |
//! | `10` | −1 |
//! | `11` | 0 |
//!
//! # Example: Accumulator
//!
//! ```
//! use ternacc::TernaryAccumulator;
//! use ternacc::weight::CODE_POSITIVE;
//!
//! let mut acc = TernaryAccumulator::default();
//! for _ in 0..128 {
//!     acc.load(CODE_POSITIVE);
//! }
//! assert_eq!(acc.evaluate(0b0000_0001), 16);
//! assert_eq!(acc.evaluate(0xFF), 128);
//! ```
//!
//! # Example: Protocol
//!
//! ```
//! use ternacc::{CoreConfig, LoadPath, ProtocolDriver};
//! use ternacc::weight::CODE_NEGATIVE;
//!
//! let config = CoreConfig::pipelined().with_load_path(LoadPath::Serial);
//! let mut driver = ProtocolDriver::new(config);
//! driver.reset();
//! let r = driver.measure(0xFF, CODE_NEGATIVE);
//! assert_eq!((r.high, r.low), (0xFF, 0x80));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Population count (word trait, strategies, registered unit, test patterns)
pub mod popcount;

// Ternary weights and wire codes
pub mod weight;

// 128-element weight store
pub mod store;

// Masked ternary dot product
pub mod accumulator;

// Weight-load paths
pub mod load;

// Result width and readout bytes
pub mod readout;

// Result delay line
pub mod pipeline;

// Clock-edge core
pub mod cycle;

// Reset/load/readback sequencer
pub mod driver;

// Configuration
pub mod config;

// Error types
pub mod error;

// Text parsing for operator input
pub mod parse;

pub use accumulator::TernaryAccumulator;
pub use config::CoreConfig;
pub use cycle::{CycleCore, TickInput, TickOutput, MIN_RESET_TICKS};
pub use driver::ProtocolDriver;
pub use error::{Error, Result};
pub use load::{LoadPath, WeightLoader};
pub use pipeline::{DelayLine, Latency, MAX_PIPELINE_DEPTH};
pub use popcount::{popcount, PopWord, RegisteredPopCount, Strategy};
pub use readout::{Readout, ResultWidth};
pub use store::{WeightStore, LANE_DEPTH, NUM_LANES, STORE_LEN};
pub use weight::TernaryWeight;
