//! Weight-load paths.
//!
//! Three ways to stream the 128 codes into the store, all converging on
//! [`WeightStore::shift_in`](crate::store::WeightStore::shift_in):
//!
//! | Path | Port bits used | Codes per beat | Beats per full load |
//! |------|----------------|----------------|---------------------|
//! | [`LoadPath::Serial`] | bit 0 | ½ (high bit, then low bit) | 256 |
//! | [`LoadPath::Narrow`] | bits 1:0 | 1 | 128 |
//! | [`LoadPath::Wide`] | bits 7:0 | 4 (bits 7:6 oldest) | 32 |

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::accumulator::{pack, TernaryAccumulator, CODES_PER_BYTE};
use crate::error::Error;
use crate::store::STORE_LEN;
use crate::weight::CODE_ZERO;

/// How the weight port is interpreted on a load beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPath {
    /// One 2-bit code per beat.
    #[default]
    Narrow,
    /// Four 2-bit codes packed in one byte per beat.
    Wide,
    /// One bit per beat, high bit of each code first.
    Serial,
}

impl LoadPath {
    /// All paths, in declaration order.
    pub const ALL: [LoadPath; 3] = [LoadPath::Narrow, LoadPath::Wide, LoadPath::Serial];

    /// Beats needed to shift in `codes` codes.
    pub const fn beats_for(self, codes: usize) -> usize {
        match self {
            LoadPath::Narrow => codes,
            LoadPath::Wide => codes.div_ceil(CODES_PER_BYTE),
            LoadPath::Serial => codes * 2,
        }
    }

    /// Beats needed for a full store load.
    pub const fn full_load_beats(self) -> usize {
        self.beats_for(STORE_LEN)
    }

    /// Lower-case name, as accepted by [`FromStr`] and the config file.
    pub const fn name(self) -> &'static str {
        match self {
            LoadPath::Narrow => "narrow",
            LoadPath::Wide => "wide",
            LoadPath::Serial => "serial",
        }
    }

    /// Encode a code sequence, oldest first, as port values for this path.
    ///
    /// On the wide path a trailing partial group is padded at its oldest end
    /// with zero codes, which shift in ahead of the real ones.
    pub fn encode(self, codes: &[u8]) -> Vec<u8> {
        match self {
            LoadPath::Narrow => codes.iter().map(|c| c & 0b11).collect(),
            LoadPath::Wide => codes
                .chunks(CODES_PER_BYTE)
                .map(|chunk| {
                    let mut group = [CODE_ZERO; CODES_PER_BYTE];
                    let pad = CODES_PER_BYTE - chunk.len();
                    group[pad..].copy_from_slice(chunk);
                    pack(group)
                })
                .collect(),
            LoadPath::Serial => codes
                .iter()
                .flat_map(|c| [(c >> 1) & 1, c & 1])
                .collect(),
        }
    }
}

impl fmt::Display for LoadPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoadPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoadPath::ALL
            .into_iter()
            .find(|path| path.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownLoadPath(s.to_string()))
    }
}

/// Beat-level front end that feeds the accumulator.
///
/// Holds the half-assembled code of the serial path between beats.
#[derive(Debug, Clone, Default)]
pub struct WeightLoader {
    path: LoadPath,
    pending_high: Option<u8>,
}

impl WeightLoader {
    /// Create a loader for `path`.
    pub fn new(path: LoadPath) -> Self {
        Self {
            path,
            pending_high: None,
        }
    }

    /// Consume one beat of the weight port.
    pub fn beat(&mut self, port: u8, acc: &mut TernaryAccumulator) {
        match self.path {
            LoadPath::Narrow => acc.load(port),
            LoadPath::Wide => acc.load_packed(port),
            LoadPath::Serial => {
                let bit = port & 1;
                match self.pending_high.take() {
                    Some(high) => acc.load((high << 1) | bit),
                    None => self.pending_high = Some(bit),
                }
            }
        }
    }

    /// Drop any half-assembled serial code.
    pub fn reset(&mut self) {
        self.pending_high = None;
    }

    /// Whether a serial code is half-assembled.
    pub fn is_mid_code(&self) -> bool {
        self.pending_high.is_some()
    }

    /// Configured path.
    pub fn path(&self) -> LoadPath {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::{CODE_NEGATIVE, CODE_POSITIVE, CODE_RESERVED};

    fn sequence() -> Vec<u8> {
        (0..STORE_LEN).map(|i| ((i * 7 + 3) % 4) as u8).collect()
    }

    fn load_via(path: LoadPath, codes: &[u8]) -> TernaryAccumulator {
        let mut acc = TernaryAccumulator::default();
        let mut loader = WeightLoader::new(path);
        for beat in path.encode(codes) {
            loader.beat(beat, &mut acc);
        }
        acc
    }

    #[test]
    fn test_beat_counts() {
        assert_eq!(LoadPath::Narrow.full_load_beats(), 128);
        assert_eq!(LoadPath::Wide.full_load_beats(), 32);
        assert_eq!(LoadPath::Serial.full_load_beats(), 256);
        for path in LoadPath::ALL {
            assert_eq!(path.encode(&sequence()).len(), path.full_load_beats());
        }
    }

    #[test]
    fn test_paths_converge() {
        let codes = sequence();
        let narrow = load_via(LoadPath::Narrow, &codes);
        for path in [LoadPath::Wide, LoadPath::Serial] {
            assert_eq!(load_via(path, &codes).store(), narrow.store(), "{path}");
        }
    }

    #[test]
    fn test_serial_high_bit_first() {
        let mut acc = TernaryAccumulator::default();
        let mut loader = WeightLoader::new(LoadPath::Serial);
        loader.beat(1, &mut acc);
        assert!(loader.is_mid_code());
        loader.beat(0, &mut acc);
        assert!(!loader.is_mid_code());
        assert_eq!(
            acc.store().get(127).map(|w| w.encode()),
            Some(CODE_NEGATIVE)
        );
    }

    #[test]
    fn test_serial_ignores_upper_port_bits() {
        let mut acc = TernaryAccumulator::default();
        let mut loader = WeightLoader::new(LoadPath::Serial);
        loader.beat(0b1110, &mut acc);
        loader.beat(0b1110, &mut acc);
        assert_eq!(
            acc.store().get(127).map(|w| w.encode()),
            Some(CODE_POSITIVE)
        );
    }

    #[test]
    fn test_wide_encoding_order() {
        let beats =
            LoadPath::Wide.encode(&[CODE_NEGATIVE, CODE_ZERO, CODE_RESERVED, CODE_POSITIVE]);
        assert_eq!(beats, vec![0b10_01_11_00]);

        let padded = LoadPath::Wide.encode(&[CODE_NEGATIVE]);
        assert_eq!(padded, vec![0b01_01_01_10]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("serial".parse::<LoadPath>().ok(), Some(LoadPath::Serial));
        assert_eq!("Wide".parse::<LoadPath>().ok(), Some(LoadPath::Wide));
        assert!("diagonal".parse::<LoadPath>().is_err());
    }
}
