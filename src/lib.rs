//! Timecode Markers - Turn time codes in video descriptions and comments into
//! timeline markers
//!
//! This library is the data core behind a progress-bar marker overlay. It:
//!
//! - Recognizes `mm:ss` / `hh:mm:ss` time codes in free-form text
//! - Extracts one record per time code, keeping the line it appeared on
//! - Clusters temporally close records into groups anchored at their earliest member
//! - Places groups on the progress axis and matches a cursor to the nearest marker
//! - Tracks the active marker with a debounced clear
//!
//! Rendering is left to the host, which receives selection changes through
//! [`presentation::PresentationAdapter`].
//!
//! # Example
//!
//! ```
//! use timecode_markers::{SourceRef, TextSource, build_index, cluster, extract, find_nearest};
//!
//! let sources = vec![
//!     TextSource::primary("0:00 Intro\n4:10 Build", SourceRef(0)),
//!     TextSource::comment("4:12 the best part", SourceRef(1)),
//! ];
//! let records = extract(&sources);
//! let groups = cluster(&records, 3.0);
//! assert_eq!(groups.len(), 2);
//!
//! let index = build_index(groups, Some(500.0))?;
//! let marker = find_nearest(&index, 0.5, 0.01).unwrap();
//! assert_eq!(marker.group.len(), 2);
//! # Ok::<(), timecode_markers::MarkerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod presentation;
pub mod proximity;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use config::{ClusterThreshold, MarkerConfig};
pub use error::MarkerError;
pub use indexer::{ExtractionReport, cluster, cluster_records, extract, extract_report};
pub use models::{Group, Marker, SourceRef, TextSource, TimeCodeToken, TimestampRecord};
pub use parsers::parse_timecodes;
pub use proximity::{
    MarkerIndex, ProgressBar, Selection, SelectionChange, SelectionState, build_index,
    find_nearest,
};
pub use session::{MarkerSession, RebuildSummary};
