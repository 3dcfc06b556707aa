use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::debug;

use crate::error::{MarkerError, require_duration};
use crate::models::{Group, Marker};

/// Markers in ascending anchor order for one video duration.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIndex {
    markers: Vec<Marker>,
    duration_seconds: f64,
}

impl MarkerIndex {
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// First marker within `tolerance_fraction` of `cursor_fraction`.
    ///
    /// Markers are scanned in ascending anchor order, so when several fall within
    /// tolerance the earliest timestamp wins.
    pub fn find_nearest(&self, cursor_fraction: f64, tolerance_fraction: f64) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|m| (cursor_fraction - m.position_fraction).abs() <= tolerance_fraction)
    }

    /// [`find_nearest`](Self::find_nearest) with the cursor and tolerance in pixels.
    pub fn find_nearest_px(
        &self,
        bar: ProgressBar,
        cursor_px: f64,
        tolerance_px: f64,
    ) -> Option<&Marker> {
        if !bar.is_measurable() {
            return None;
        }
        self.find_nearest(bar.fraction_at(cursor_px), bar.span_fraction(tolerance_px))
    }
}

/// Build one marker per group, positioned at `anchor / duration`.
///
/// Anchors past the end of the video are clamped to the end of the axis.
///
/// # Errors
///
/// [`MarkerError::NoDuration`] when the duration is unknown or non-positive; no index
/// is produced.
pub fn build_index(groups: Vec<Group>, duration: Option<f64>) -> Result<MarkerIndex, MarkerError> {
    let duration_seconds = require_duration(duration)?;

    let markers: Vec<Marker> = groups
        .into_iter()
        .map(|group| {
            let position = f64::from(group.anchor_offset_seconds()) / duration_seconds;
            if position > 1.0 {
                debug!(
                    anchor = group.anchor_offset_seconds(),
                    duration_seconds, "Timestamp past end of video, clamping marker"
                );
            }
            Marker { group, position_fraction: position.clamp(0.0, 1.0) }
        })
        .collect();

    Ok(MarkerIndex { markers, duration_seconds })
}

/// Query helper matching the free-function form of the index API.
pub fn find_nearest(
    index: &MarkerIndex,
    cursor_fraction: f64,
    tolerance_fraction: f64,
) -> Option<&Marker> {
    index.find_nearest(cursor_fraction, tolerance_fraction)
}

/// Width of the rendered progress axis, for converting pixels to fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    pub width_px: f64,
}

impl ProgressBar {
    pub fn new(width_px: f64) -> Self {
        Self { width_px }
    }

    /// A zero-width (hidden) bar cannot be queried.
    pub fn is_measurable(&self) -> bool {
        self.width_px.is_finite() && self.width_px > 0.0
    }

    /// Axis position under a cursor `cursor_px` from the bar's left edge.
    pub fn fraction_at(&self, cursor_px: f64) -> f64 {
        cursor_px / self.width_px
    }

    /// Fraction of the axis covered by `px` pixels.
    pub fn span_fraction(&self, px: f64) -> f64 {
        px / self.width_px
    }

    /// Pixel offset of a marker from the bar's left edge.
    pub fn marker_px(&self, marker: &Marker) -> f64 {
        marker.position_fraction * self.width_px
    }
}

/// Holder that publishes a fully built index in one atomic swap.
///
/// Readers take a snapshot and keep using it even if a rebuild lands meanwhile.
pub struct SharedIndex {
    current: ArcSwapOption<MarkerIndex>,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self { current: ArcSwapOption::from(None) }
    }

    /// Current index, or `None` if nothing usable has been published.
    pub fn snapshot(&self) -> Option<Arc<MarkerIndex>> {
        self.current.load_full()
    }

    pub fn publish(&self, index: MarkerIndex) {
        self.current.store(Some(Arc::new(index)));
    }

    pub fn clear(&self) {
        self.current.store(None);
    }
}

impl Default for SharedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SharedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers = self.current.load().as_ref().map(|index| index.len());
        f.debug_struct("SharedIndex").field("markers", &markers).finish()
    }
}
