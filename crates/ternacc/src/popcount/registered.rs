//! Registered (one-tick latency) population-count unit.
//!
//! Models the synchronous request/response pair the counter exposes at its
//! boundary: a word presented before a clock edge is counted on that edge,
//! and the count is readable from the output register afterwards.
//!
//! ```text
//!            edge N           edge N+1
//! input  ──[ word A ]────────[ word B ]──────
//! output ──[ prev   ]────────[ pop(A) ]──────[ pop(B) ]
//! ```

use super::word::PopWord;
use super::Strategy;

/// Population counter with a registered output.
#[derive(Debug, Clone)]
pub struct RegisteredPopCount<W: PopWord> {
    strategy: Strategy,
    input: W,
    output: u32,
}

impl<W: PopWord> Default for RegisteredPopCount<W> {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl<W: PopWord> RegisteredPopCount<W> {
    /// Create a unit with a zeroed input and output register.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            input: W::ZEROS,
            output: 0,
        }
    }

    /// Drive the input port. Takes effect on the next [`tick`](Self::tick).
    #[inline]
    pub fn present(&mut self, word: W) {
        self.input = word;
    }

    /// Advance one clock edge: the output register captures the count of
    /// the word currently on the input port.
    #[inline]
    pub fn tick(&mut self) {
        self.output = self.strategy.count(self.input);
    }

    /// Read the output register.
    #[inline]
    pub fn output(&self) -> u32 {
        self.output
    }

    /// Present `word`, advance one edge and return the registered count.
    #[inline]
    pub fn clock(&mut self, word: W) -> u32 {
        self.present(word);
        self.tick();
        self.output
    }

    /// Strategy used by the combinational stage.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_lags_input_by_one_edge() {
        let mut unit = RegisteredPopCount::<u64>::new(Strategy::Tree);
        unit.present(u64::MAX);
        assert_eq!(unit.output(), 0);
        unit.tick();
        assert_eq!(unit.output(), 64);

        unit.present(0b1011);
        assert_eq!(unit.output(), 64);
        unit.tick();
        assert_eq!(unit.output(), 3);
    }

    #[test]
    fn test_clock_convenience() {
        let mut unit = RegisteredPopCount::<u128>::default();
        assert_eq!(unit.clock(u128::MAX), 128);
        assert_eq!(unit.clock(1 << 100), 1);
    }
}
