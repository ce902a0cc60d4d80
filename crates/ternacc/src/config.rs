//! Core configuration.
//!
//! A configuration fixes the four build-time choices of the accumulator:
//! result width, pipeline depth, load path, and popcount strategy. It can be
//! built in code or read from TOML:
//!
//! ```toml
//! result_width = 16      # 8 or 16
//! pipeline_depth = 3     # 1 (immediate) ..= 8
//! load_path = "serial"   # narrow | wide | serial
//! strategy = "tree"      # native | lut | tree
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] value
//! (16-bit, immediate, narrow, native).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::load::LoadPath;
use crate::pipeline::Latency;
use crate::popcount::Strategy;
use crate::readout::ResultWidth;

/// Build-time configuration of a [`CycleCore`](crate::CycleCore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Width of the result register.
    pub result_width: ResultWidth,
    /// Register stages between evaluation and the output port.
    #[serde(rename = "pipeline_depth")]
    pub latency: Latency,
    /// Weight port interpretation.
    pub load_path: LoadPath,
    /// Lane reduction strategy.
    pub strategy: Strategy,
}

impl CoreConfig {
    /// Immediate-latency configuration with defaults elsewhere.
    pub fn immediate() -> Self {
        Self::default()
    }

    /// Three-stage pipelined configuration with defaults elsewhere.
    pub fn pipelined() -> Self {
        Self::default().with_latency(Latency::PIPELINED)
    }

    /// Set the result width.
    pub fn with_result_width(mut self, width: ResultWidth) -> Self {
        self.result_width = width;
        self
    }

    /// Set the pipeline depth.
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Set the load path.
    pub fn with_load_path(mut self, path: LoadPath) -> Self {
        self.load_path = path;
        self
    }

    /// Set the popcount strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] for malformed text, unknown keys, or values
    /// outside the supported ranges.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CoreConfig = toml::from_str(text)?;
        debug!(?config, "parsed core config");
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TomlWrite`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
