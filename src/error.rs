use thiserror::Error;

use crate::models::SourceRef;

/// Conditions the core reports back to its host.
///
/// None of these are fatal: the host decides whether to retry (duration not yet
/// known), skip, or log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarkerError {
    /// A source carried no text. Extraction degrades to zero records for it.
    #[error("source {source_ref} has no text")]
    MalformedInput { source_ref: SourceRef },
    /// The video duration is unknown, non-finite, or not positive.
    #[error("video duration is unknown or non-positive ({duration:?})")]
    NoDuration { duration: Option<f64> },
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl MarkerError {
    pub(crate) fn malformed(source_ref: SourceRef) -> Self {
        Self::MalformedInput { source_ref }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig { message: message.into() }
    }
}

/// Returns the duration when it can anchor a time axis.
pub fn require_duration(duration: Option<f64>) -> Result<f64, MarkerError> {
    match duration {
        Some(d) if d.is_finite() && d > 0.0 => Ok(d),
        _ => Err(MarkerError::NoDuration { duration }),
    }
}
