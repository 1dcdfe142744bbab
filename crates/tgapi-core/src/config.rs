use std::env;

use serde::Deserialize;

use crate::{errors::Error, Result};

/// Object nesting allowed before decoding gives up with `DepthExceeded`.
///
/// Kept below serde_json's own recursion limit (128) so the codec's error, not
/// the parser's, is what callers see for deep reply chains.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Codec limits.
///
/// Deserializable so a host can embed it in its own config file; missing keys
/// fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecConfig {
    /// Load overrides from the environment (`TGAPI_MAX_DEPTH`).
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(raw) = env_str("TGAPI_MAX_DEPTH") {
            cfg.max_depth = raw.trim().parse::<usize>().map_err(|_| {
                Error::Config(format!("TGAPI_MAX_DEPTH must be a positive integer, got {raw:?}"))
            })?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}
