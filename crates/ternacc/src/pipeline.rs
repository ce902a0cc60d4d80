//! Fixed-depth delay line for the result path.
//!
//! The accumulator supports two latency profiles. Both are the same delay
//! line with a different number of register stages:
//!
//! ```text
//! depth 1 (immediate):  eval ──▶ [ out ]
//! depth 3 (pipelined):  eval ──▶ [ in ] ──▶ [ mid ] ──▶ [ out ]
//! ```
//!
//! Each stage holds a whole value. On every tick the stages shift by one and
//! the last stage is the visible output, so a reader only ever observes a
//! complete previously-computed value, never a mixture of two.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Largest supported pipeline depth.
pub const MAX_PIPELINE_DEPTH: usize = 8;

/// Number of register stages between evaluation and the output port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Latency(u8);

impl Latency {
    /// Single output register.
    pub const IMMEDIATE: Latency = Latency(1);

    /// Input, compute and output registers.
    pub const PIPELINED: Latency = Latency(3);

    /// Validate a depth in `1..=MAX_PIPELINE_DEPTH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PipelineDepth`] for 0 or an oversize depth.
    pub fn new(depth: u32) -> Result<Self, Error> {
        if depth == 0 || depth as usize > MAX_PIPELINE_DEPTH {
            return Err(Error::PipelineDepth {
                depth,
                max: MAX_PIPELINE_DEPTH,
            });
        }
        Ok(Latency(depth as u8))
    }

    /// Depth in ticks.
    pub const fn ticks(self) -> usize {
        self.0 as usize
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::IMMEDIATE
    }
}

impl TryFrom<u32> for Latency {
    type Error = Error;

    fn try_from(depth: u32) -> Result<Self, Self::Error> {
        Latency::new(depth)
    }
}

impl From<Latency> for u32 {
    fn from(latency: Latency) -> Self {
        u32::from(latency.0)
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Latency::IMMEDIATE => f.write_str("immediate (1 tick)"),
            Latency::PIPELINED => f.write_str("pipelined (3 ticks)"),
            Latency(n) => write!(f, "{n} ticks"),
        }
    }
}

/// Shift register of `latency.ticks()` stages.
#[derive(Debug, Clone)]
pub struct DelayLine<T: Copy + Default> {
    stages: [T; MAX_PIPELINE_DEPTH],
    depth: usize,
}

impl<T: Copy + Default> DelayLine<T> {
    /// Create a delay line with every stage holding `T::default()`.
    pub fn new(latency: Latency) -> Self {
        Self {
            stages: [T::default(); MAX_PIPELINE_DEPTH],
            depth: latency.ticks(),
        }
    }

    /// Shift `value` into the first stage and return the new output.
    #[inline]
    pub fn clock(&mut self, value: T) -> T {
        self.stages.copy_within(0..self.depth - 1, 1);
        self.stages[0] = value;
        self.output()
    }

    /// Current output (last stage).
    #[inline]
    pub fn output(&self) -> T {
        self.stages[self.depth - 1]
    }

    /// Reset every stage to `T::default()`.
    pub fn flush(&mut self) {
        self.stages = [T::default(); MAX_PIPELINE_DEPTH];
    }

    /// Number of stages.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
