//! Error types for configuration and text parsing.
//!
//! The accumulator itself has no failure modes; every code, mask and word
//! is valid. Errors only arise when a configuration or an operator-supplied
//! value is read from text.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fallible `ternacc` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a configuration or parsing operator input.
#[derive(Debug, Error)]
pub enum Error {
    /// Result width other than 8 or 16 bits.
    #[error("unsupported result width {0} (expected 8 or 16)")]
    UnsupportedWidth(u32),

    /// Pipeline depth outside the supported range.
    #[error("pipeline depth {depth} outside 1..={max}")]
    PipelineDepth {
        /// Requested depth.
        depth: u32,
        /// Largest supported depth.
        max: usize,
    },

    /// Popcount strategy name not recognized.
    #[error("unknown popcount strategy `{0}` (expected native, lut or tree)")]
    UnknownStrategy(String),

    /// Load path name not recognized.
    #[error("unknown load path `{0}` (expected narrow, wide or serial)")]
    UnknownLoadPath(String),

    /// Weight code text not in `0..=3`.
    #[error("invalid weight code `{0}` (expected 00, 01, 10, 11 or 0..=3)")]
    InvalidCode(String),

    /// Lane mask text not an 8-bit value.
    #[error("invalid lane mask `{0}` (expected 0..=255, 0x.. or 0b..)")]
    InvalidMask(String),

    /// Popcount input text not an unsigned integer of the requested width.
    #[error("invalid {width}-bit word `{text}`")]
    InvalidWord {
        /// Text that failed to parse.
        text: String,
        /// Requested width in bits.
        width: u32,
    },

    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for [`crate::CoreConfig`].
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be written as TOML.
    #[error("failed to write config: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
