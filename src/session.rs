//! Owned per-video state tying extraction, clustering, the marker index and the
//! selection together.
//!
//! A host keeps one [`MarkerSession`] per player. It calls [`MarkerSession::rebuild`]
//! whenever the description/comments or the duration change, forwards pointer
//! events, and calls [`MarkerSession::tick`] from its event loop so the deferred
//! clear can fire. Every call that changes the selection returns the
//! [`SelectionChange`] the presentation layer must render.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use timecode_markers::{MarkerConfig, MarkerSession, ProgressBar, SourceRef, TextSource};
//!
//! let mut session = MarkerSession::new(MarkerConfig::default());
//! let sources = vec![TextSource::primary("0:00 Intro\n5:00 Main part", SourceRef(0))];
//! session.rebuild(&sources, Some(600.0))?;
//!
//! // Cursor 2px right of the 5:00 marker on a 600px bar
//! let change = session.pointer_moved(ProgressBar::new(600.0), 302.0, Instant::now());
//! assert_eq!(change.unwrap().current.unwrap().anchor_offset_seconds(), 300);
//! # Ok::<(), timecode_markers::MarkerError>(())
//! ```

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::MarkerConfig;
use crate::error::MarkerError;
use crate::indexer::{cluster, extract_report};
use crate::models::TextSource;
use crate::proximity::{
    MarkerIndex, ProgressBar, Selection, SelectionChange, SharedIndex, build_index,
};

/// Counts from one successful rebuild
#[derive(Debug, Clone, PartialEq)]
pub struct RebuildSummary {
    pub sources_scanned: usize,
    pub malformed_sources: usize,
    pub records: usize,
    pub markers: usize,
    pub threshold_seconds: f64,
    /// Set when the active marker disappeared from the new index
    pub selection_change: Option<SelectionChange>,
}

#[derive(Debug)]
pub struct MarkerSession {
    config: MarkerConfig,
    index: SharedIndex,
    selection: Selection,
}

impl MarkerSession {
    pub fn new(config: MarkerConfig) -> Self {
        let selection = Selection::new(config.hide_delay());
        Self { config, index: SharedIndex::new(), selection }
    }

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    /// Snapshot of the published index, `None` before the first successful rebuild.
    pub fn index(&self) -> Option<Arc<MarkerIndex>> {
        self.index.snapshot()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Re-extract, re-cluster and publish a fresh index.
    ///
    /// The new index is built completely before it replaces the old one. Repeating a
    /// rebuild with the same input publishes an identical index.
    ///
    /// # Errors
    ///
    /// [`MarkerError::NoDuration`] when the duration is unknown or non-positive. The
    /// previously published index is left in place; retry once metadata is loaded.
    pub fn rebuild(
        &mut self,
        sources: &[TextSource],
        duration: Option<f64>,
    ) -> Result<RebuildSummary, MarkerError> {
        let report = extract_report(sources);
        let threshold_seconds = self.config.threshold.resolve(duration)?;
        let index = build_index(cluster(&report.records, threshold_seconds), duration)?;

        let vanished =
            self.selection.active().is_some_and(|active| !index.markers().contains(active));
        let selection_change = if vanished { self.selection.reset() } else { None };

        let summary = RebuildSummary {
            sources_scanned: report.sources_scanned,
            malformed_sources: report.malformed.len(),
            records: report.records.len(),
            markers: index.len(),
            threshold_seconds,
            selection_change,
        };

        self.index.publish(index);
        info!(
            records = summary.records,
            markers = summary.markers,
            malformed = summary.malformed_sources,
            "Published marker index"
        );

        Ok(summary)
    }

    /// Remove all markers, e.g. when the player switches to another video.
    pub fn clear(&mut self) -> Option<SelectionChange> {
        self.index.clear();
        self.selection.reset()
    }

    /// Query at `cursor_px` with the configured pixel tolerance.
    pub fn pointer_moved(
        &mut self,
        bar: ProgressBar,
        cursor_px: f64,
        now: Instant,
    ) -> Option<SelectionChange> {
        let index = self.index.snapshot();
        let found =
            index.as_deref().and_then(|i| i.find_nearest_px(bar, cursor_px, self.config.tolerance_px));
        debug!(cursor_px, hit = ?found.map(|m| m.anchor_offset_seconds()), "Pointer moved");
        self.selection.on_query(found, now)
    }

    pub fn pointer_left(&mut self, now: Instant) {
        self.selection.on_pointer_leave(now);
    }

    pub fn detail_entered(&mut self) {
        self.selection.on_detail_enter();
    }

    pub fn detail_left(&mut self, now: Instant) {
        self.selection.on_detail_leave(now);
    }

    /// Fire the deferred clear if it is due.
    pub fn tick(&mut self, now: Instant) -> Option<SelectionChange> {
        self.selection.poll(now)
    }
}
