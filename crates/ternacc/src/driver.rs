//! Protocol driver that sequences a [`CycleCore`] the way the external
//! integration must.
//!
//! # Sequence
//!
//! ```text
//! reset()          hold reset for MIN_RESET_TICKS edges, release,
//!                  then shift in 128 ZERO codes
//! set_mask(m)      choose the lanes that count
//! load_uniform(c)  shift in 128 copies of code c      (or load_sequence)
//! settle()         idle for the configured pipeline depth
//! read()           sample the result register
//! ```
//!
//! # Example
//!
//! ```
//! use ternacc::{CoreConfig, ProtocolDriver};
//! use ternacc::weight::CODE_NEGATIVE;
//!
//! let mut driver = ProtocolDriver::new(CoreConfig::pipelined());
//! driver.reset();
//! driver.set_mask(0xFF);
//! driver.load_uniform(CODE_NEGATIVE);
//! driver.settle();
//! assert_eq!(driver.read().signed(), -128);
//! ```

use tracing::{debug, info};

use crate::config::CoreConfig;
use crate::cycle::{CycleCore, TickInput, TickOutput, MIN_RESET_TICKS};
use crate::readout::Readout;
use crate::store::STORE_LEN;
use crate::weight::CODE_ZERO;

/// Sequencer for the reset, load and readback protocol.
#[derive(Debug, Clone)]
pub struct ProtocolDriver {
    core: CycleCore,
    mask: u8,
}

impl ProtocolDriver {
    /// Wrap a fresh core built from `config`.
    pub fn new(config: CoreConfig) -> Self {
        Self {
            core: CycleCore::new(config),
            mask: 0,
        }
    }

    /// Hold reset, release it, and clear the store with 128 ZERO codes.
    pub fn reset(&mut self) {
        info!("reset");
        for _ in 0..MIN_RESET_TICKS {
            self.core.tick(TickInput::reset());
        }
        self.load_sequence(&[CODE_ZERO; STORE_LEN]);
    }

    /// Drive the lane mask used on every following edge.
    pub fn set_mask(&mut self, mask: u8) {
        self.mask = mask;
    }

    /// Current lane mask.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Shift in `codes`, oldest first, through the configured load path.
    pub fn load_sequence(&mut self, codes: &[u8]) {
        let path = self.core.config().load_path;
        let beats = path.encode(codes);
        for &beat in &beats {
            self.core.tick(TickInput::load(beat, self.mask));
        }
        debug!(codes = codes.len(), beats = beats.len(), %path, "load sequence complete");
    }

    /// Shift in 128 copies of `code`.
    pub fn load_uniform(&mut self, code: u8) {
        self.load_sequence(&[code; STORE_LEN]);
    }

    /// Advance one edge without loading.
    pub fn idle(&mut self) -> TickOutput {
        self.core.tick(TickInput::idle(self.mask))
    }

    /// Idle until a result for the current store and mask is visible.
    pub fn settle(&mut self) -> TickOutput {
        for _ in 0..self.core.config().latency.ticks() {
            self.idle();
        }
        self.core.output()
    }

    /// Result register after the most recent edge.
    pub fn read(&self) -> Readout {
        self.core.output().readout
    }

    /// Load `code` uniformly under `mask`, settle and read.
    pub fn measure(&mut self, mask: u8, code: u8) -> Readout {
        self.set_mask(mask);
        self.load_uniform(code);
        self.settle();
        self.read()
    }

    /// Underlying core.
    pub fn core(&self) -> &CycleCore {
        &self.core
    }

    /// Mutable access to the core for edge-level stimulus.
    pub fn core_mut(&mut self) -> &mut CycleCore {
        &mut self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::LoadPath;
    use crate::readout::ResultWidth;
    use crate::weight::{ALL_CODES, CODE_NEGATIVE, CODE_POSITIVE};

    #[test]
    fn test_reset_sequence_length() {
        let mut driver = ProtocolDriver::new(CoreConfig::default());
        driver.reset();
        assert_eq!(driver.core().ticks(), u64::from(MIN_RESET_TICKS) + 128);

        let mut serial = ProtocolDriver::new(CoreConfig::default().with_load_path(LoadPath::Serial));
        serial.reset();
        assert_eq!(serial.core().ticks(), u64::from(MIN_RESET_TICKS) + 256);
    }

    #[test]
    fn test_reset_yields_zero_for_every_mask() {
        let mut driver = ProtocolDriver::new(CoreConfig::pipelined());
        driver.reset();
        for mask in [0x00, 0x01, 0x5A, 0xFF] {
            driver.set_mask(mask);
            driver.settle();
            assert_eq!(driver.read().signed(), 0);
        }
    }

    #[test]
    fn test_measure_matrix() {
        let mut driver = ProtocolDriver::new(CoreConfig::default());
        driver.reset();
        assert_eq!(driver.measure(0x01, CODE_POSITIVE).signed(), 16);
        assert_eq!(driver.measure(0x03, CODE_POSITIVE).signed(), 32);
        assert_eq!(driver.measure(0xFF, CODE_NEGATIVE).signed(), -128);
        for code in ALL_CODES {
            assert_eq!(driver.measure(0x00, code).signed(), 0);
        }
    }

    #[test]
    fn test_eight_bit_readout() {
        let config = CoreConfig::default().with_result_width(ResultWidth::W8);
        let mut driver = ProtocolDriver::new(config);
        driver.reset();
        let r = driver.measure(0x03, CODE_NEGATIVE);
        assert_eq!(r.low, 0x100u16.wrapping_sub(32) as u8);
        assert_eq!(r.high, 0);
    }
}
