//! Session configuration loaded from JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::TraceLimits;
use crate::foundation::error::{TraceError, TraceResult};
use crate::playback::controller::PlaybackOpts;

/// Playback tuning plus input limits. Every field is optional in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Autoplay speed and its bounds.
    pub playback: PlaybackOpts,
    /// Input size caps enforced before generation.
    pub limits: TraceLimits,
}

impl SessionConfig {
    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TraceResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TraceError::config(format!("parse session config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json(s: &str) -> TraceResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> TraceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TraceError::config(format!("open session config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check playback bounds and limits.
    pub fn validate(&self) -> TraceResult<()> {
        self.playback.validate()?;
        self.limits.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
