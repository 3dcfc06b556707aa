//! Extraction and clustering of time-code records
//!
//! # Error Handling Strategy
//!
//! - **Source-level failures**: A source with no text is reported as
//!   [`MarkerError::MalformedInput`](crate::error::MarkerError::MalformedInput) in the
//!   extraction report and logged, but the remaining sources are still scanned.
//!
//! - **Duration-dependent work**: Resolving a fractional clustering threshold without a
//!   usable duration fails fast with
//!   [`MarkerError::NoDuration`](crate::error::MarkerError::NoDuration) so the caller can
//!   retry once the video metadata is known.
//!
//! - **Degenerate inputs**: Empty record lists and singleton groups are valid and
//!   produce empty or single-member output, never errors.

pub mod clustering;
pub mod extraction;

pub use clustering::{cluster, cluster_records};
pub use extraction::{ExtractionReport, extract, extract_report};
