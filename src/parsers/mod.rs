//! Parsers for time codes and for offline dumps of description/comment text
//!
//! # Error Handling Strategy
//!
//! - **Time codes**: [`parse_timecodes`] never fails. Text without time codes yields
//!   no tokens.
//!
//! - **Comment dumps**: Malformed JSONL lines are logged and skipped, so a single bad
//!   line does not drop the whole thread. If >50% of lines fail, or >100 consecutive
//!   lines fail, the file is rejected as corrupted.
//!
//! - **Missing text**: A comment line whose `text` is null becomes a
//!   [`TextSource::missing`](crate::models::TextSource::missing) source so extraction
//!   can report it as malformed input without aborting.

pub mod sources;
pub mod timecode;

pub use sources::{DESCRIPTION_REF, parse_comments_file, read_description_file};
pub use timecode::parse_timecodes;
