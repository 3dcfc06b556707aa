use std::fmt;

use serde::{Deserialize, Serialize};

use super::timecode::TimeCodeToken;

/// Opaque handle to a piece of host content (a description block or a comment
/// thread).
///
/// The core never dereferences it; it only hands it back to the presentation layer
/// so the host can locate the original element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRef(pub u64);

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One block of host text to scan for time codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSource {
    /// `None` when the host could not read the element's text
    pub text: Option<String>,
    pub source_ref: SourceRef,
    /// The video description, as opposed to a comment
    pub is_primary: bool,
}

impl TextSource {
    pub fn primary(text: impl Into<String>, source_ref: SourceRef) -> Self {
        Self { text: Some(text.into()), source_ref, is_primary: true }
    }

    pub fn comment(text: impl Into<String>, source_ref: SourceRef) -> Self {
        Self { text: Some(text.into()), source_ref, is_primary: false }
    }

    /// A source whose element exists but whose text is unavailable.
    pub fn missing(source_ref: SourceRef, is_primary: bool) -> Self {
        Self { text: None, source_ref, is_primary }
    }
}

/// A single time code found in a source, with the trimmed line it appeared on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampRecord {
    pub token: TimeCodeToken,
    pub line_text: String,
    pub source_ref: SourceRef,
    pub is_primary: bool,
}

impl TimestampRecord {
    pub fn offset_seconds(&self) -> u32 {
        self.token.offset_seconds()
    }
}
