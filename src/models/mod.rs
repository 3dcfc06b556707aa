//! Data model for time-code markers.
//!
//! - [`TimeCodeToken`] - A recognized `mm:ss` / `hh:mm:ss` span and its offset
//! - [`TextSource`] - One block of host text (description or comment) to scan
//! - [`TimestampRecord`] - One token found in a source, with its surrounding line
//! - [`Group`] - Temporally close records clustered under one anchor
//! - [`Marker`] - A group placed on the progress axis
//!
//! Records, groups and markers are immutable once built. Every extraction pass
//! produces a fresh set and the previous one is discarded wholesale.

pub mod group;
pub mod record;
pub mod timecode;

pub use group::{Group, Marker};
pub use record::{SourceRef, TextSource, TimestampRecord};
pub use timecode::TimeCodeToken;
