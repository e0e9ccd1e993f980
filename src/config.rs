//! Reader configuration and builder.
//!
//! - ReaderConfig::default() — checksums verified.
//! - ReaderConfig::from_env() — same defaults, overridable via TFR_CRC_CHECK.
//! - ReaderBuilder — fluent overrides on top of env (or clean defaults).
//!
//! The flag is fixed when a RecordReader is constructed and never changes afterwards.

use std::fmt;

use log::warn;

use crate::consts::ENV_CRC_CHECK;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Verify masked CRC32C of the length and payload fields.
    /// When false the checksum fields are still consumed from the stream.
    /// Env: TFR_CRC_CHECK = 0|1|true|false|on|off|yes|no (default true)
    pub crc_check: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { crc_check: true }
    }
}

impl ReaderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var(ENV_CRC_CHECK) {
            match parse_bool(&v) {
                Some(on) => cfg.crc_check = on,
                None => warn!(
                    "{}: unrecognized value {:?}, keeping {}",
                    ENV_CRC_CHECK, v, cfg.crc_check
                ),
            }
        }

        cfg
    }

    pub fn with_crc_check(mut self, on: bool) -> Self {
        self.crc_check = on;
        self
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> Self {
        self
    }
}

impl fmt::Display for ReaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReaderConfig {{ crc_check: {} }}", self.crc_check)
    }
}

/// Builder that produces a ReaderConfig.
#[derive(Clone, Debug)]
pub struct ReaderBuilder {
    cfg: ReaderConfig,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: ReaderConfig::from_env(),
        }
    }
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: ReaderConfig::default(),
        }
    }

    pub fn crc_check(mut self, on: bool) -> Self {
        self.cfg.crc_check = on;
        self
    }

    pub fn build(self) -> ReaderConfig {
        self.cfg
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
