//! Cycle-level core: one call to [`CycleCore::tick`] is one clock edge.
//!
//! # Edge semantics
//!
//! All inputs are sampled at the edge and all outputs are the register
//! values after it. On each edge, in order:
//!
//! 1. If `reset` is asserted: clear the store, the serial assembler and the
//!    pipeline, drive a zero output, and stop.
//! 2. Evaluate `mask` against the store as it stood before this edge and
//!    shift the result into the delay line.
//! 3. If `load_enable` is set, feed `weight_port` to the loader.
//!
//! A load completing on edge N is therefore visible on the output after
//! edge N + depth, and a mask presented on edge N after edge N + depth − 1.
//! Loads and evaluations are serialized by construction: there is exactly
//! one writer (step 3), and it runs after the read (step 2).

use tracing::{debug, trace, warn};

use crate::accumulator::TernaryAccumulator;
use crate::config::CoreConfig;
use crate::load::WeightLoader;
use crate::pipeline::DelayLine;
use crate::readout::Readout;

/// Minimum number of edges reset must be held.
pub const MIN_RESET_TICKS: u32 = 10;

/// Values on the input ports for one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// Synchronous reset, active high.
    pub reset: bool,
    /// Consume `weight_port` on this edge.
    pub load_enable: bool,
    /// Weight-load stream; interpretation set by the load path.
    pub weight_port: u8,
    /// Lane mask for evaluation.
    pub mask: u8,
}

impl TickInput {
    /// An edge with reset asserted.
    pub const fn reset() -> Self {
        Self {
            reset: true,
            load_enable: false,
            weight_port: 0,
            mask: 0,
        }
    }

    /// An edge that only evaluates `mask`.
    pub const fn idle(mask: u8) -> Self {
        Self {
            reset: false,
            load_enable: false,
            weight_port: 0,
            mask,
        }
    }

    /// An edge that evaluates `mask` and consumes one load beat.
    pub const fn load(beat: u8, mask: u8) -> Self {
        Self {
            reset: false,
            load_enable: true,
            weight_port: beat,
            mask,
        }
    }
}

/// Values on the output ports after one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutput {
    /// Result register.
    pub readout: Readout,
    /// The output stage holds an evaluated value rather than reset contents.
    pub valid: bool,
}

/// The accumulator wrapped in its load front end and result pipeline.
#[derive(Debug, Clone)]
pub struct CycleCore {
    config: CoreConfig,
    accumulator: TernaryAccumulator,
    loader: WeightLoader,
    pipeline: DelayLine<Option<i16>>,
    output: TickOutput,
    reset_ticks: u32,
    ticks: u64,
}

impl CycleCore {
    /// Build a core for `config` in its post-reset state.
    pub fn new(config: CoreConfig) -> Self {
        debug!(
            width = config.result_width.bits(),
            depth = config.latency.ticks(),
            load_path = %config.load_path,
            strategy = %config.strategy,
            "core configured"
        );
        Self {
            config,
            accumulator: TernaryAccumulator::new(config.strategy),
            loader: WeightLoader::new(config.load_path),
            pipeline: DelayLine::new(config.latency),
            output: TickOutput {
                readout: Readout::zero(config.result_width),
                valid: false,
            },
            reset_ticks: 0,
            ticks: 0,
        }
    }

    /// Advance one clock edge.
    pub fn tick(&mut self, input: TickInput) -> TickOutput {
        self.ticks += 1;

        if input.reset {
            if self.reset_ticks == 0 {
                debug!(tick = self.ticks, "reset asserted");
            }
            self.reset_ticks = self.reset_ticks.saturating_add(1);
            self.accumulator.reset();
            self.loader.reset();
            self.pipeline.flush();
            self.output = TickOutput {
                readout: Readout::zero(self.config.result_width),
                valid: false,
            };
            return self.output;
        }

        if self.reset_ticks > 0 {
            if self.reset_ticks < MIN_RESET_TICKS {
                warn!(
                    held = self.reset_ticks,
                    min = MIN_RESET_TICKS,
                    "reset released early"
                );
            } else {
                debug!(held = self.reset_ticks, "reset released");
            }
            self.reset_ticks = 0;
        }

        let value = self.accumulator.evaluate(input.mask);
        let staged = self.pipeline.clock(Some(value));

        if input.load_enable {
            self.loader.beat(input.weight_port, &mut self.accumulator);
            trace!(beat = input.weight_port, "load beat");
        }

        self.output = match staged {
            Some(v) => TickOutput {
                readout: Readout::encode(v, self.config.result_width),
                valid: true,
            },
            None => TickOutput {
                readout: Readout::zero(self.config.result_width),
                valid: false,
            },
        };
        self.output
    }

    /// Output ports after the most recent edge.
    pub fn output(&self) -> TickOutput {
        self.output
    }

    /// Edges since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether reset is currently asserted.
    pub fn in_reset(&self) -> bool {
        self.reset_ticks > 0
    }

    /// Configuration the core was built with.
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Read-only view of the accumulator.
    pub fn accumulator(&self) -> &TernaryAccumulator {
        &self.accumulator
    }
}
