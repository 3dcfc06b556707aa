//! Tunables for clustering, cursor matching and the deferred clear.
//!
//! Loaded from a JSON file; every field is optional and falls back to the defaults
//! below.
//!
//! ```json
//! { "threshold": { "fraction": 0.01 }, "tolerance_px": 5.0, "hide_delay_ms": 3000 }
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{MarkerError, require_duration};

/// Default clustering threshold: 1% of the video duration
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.01;
/// Default cursor tolerance in pixels
pub const DEFAULT_TOLERANCE_PX: f64 = 5.0;
/// Default delay before an active selection is cleared (milliseconds)
pub const DEFAULT_HIDE_DELAY_MS: u64 = 3000;

/// How close two time codes must be to share a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterThreshold {
    /// Fraction of the total duration; needs a known duration
    Fraction(f64),
    /// Fixed number of seconds; usable without a duration
    Seconds(f64),
}

impl ClusterThreshold {
    /// Resolve to a threshold in seconds.
    ///
    /// # Errors
    ///
    /// [`MarkerError::NoDuration`] for a fractional threshold when the duration is
    /// unknown or non-positive.
    pub fn resolve(&self, duration: Option<f64>) -> Result<f64, MarkerError> {
        match *self {
            Self::Fraction(fraction) => Ok(require_duration(duration)? * fraction),
            Self::Seconds(seconds) => Ok(seconds),
        }
    }

    fn validate(&self) -> Result<(), MarkerError> {
        match *self {
            Self::Fraction(f) if !(f > 0.0 && f <= 1.0) => Err(MarkerError::invalid_config(
                format!("threshold fraction must be in (0, 1], got {}", f),
            )),
            Self::Seconds(s) if !(s.is_finite() && s >= 0.0) => Err(MarkerError::invalid_config(
                format!("threshold seconds must be finite and non-negative, got {}", s),
            )),
            _ => Ok(()),
        }
    }
}

impl Default for ClusterThreshold {
    fn default() -> Self {
        Self::Fraction(DEFAULT_THRESHOLD_FRACTION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub threshold: ClusterThreshold,
    pub tolerance_px: f64,
    pub hide_delay_ms: u64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            threshold: ClusterThreshold::default(),
            tolerance_px: DEFAULT_TOLERANCE_PX,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
        }
    }
}

impl MarkerConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MarkerError> {
        self.threshold.validate()?;
        if !(self.tolerance_px.is_finite() && self.tolerance_px >= 0.0) {
            return Err(MarkerError::invalid_config(format!(
                "tolerance_px must be finite and non-negative, got {}",
                self.tolerance_px
            )));
        }
        if self.hide_delay_ms == 0 {
            return Err(MarkerError::invalid_config("hide_delay_ms must be positive"));
        }
        Ok(())
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}
