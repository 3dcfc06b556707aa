//! Anchor-based temporal clustering.
//!
//! Records are stable-sorted by offset and walked once. A record joins the open
//! group iff its offset is within the threshold of that group's *first* member; it
//! is never compared to the most recently added member. A slow drift of timestamps
//! can therefore close a group even though every adjacent pair is within threshold.

use tracing::debug;

use crate::config::ClusterThreshold;
use crate::error::MarkerError;
use crate::models::{Group, TimestampRecord};

/// Partition `records` into groups with the given threshold in seconds.
///
/// Groups come out in ascending anchor order and together hold every input record
/// exactly once. A negative or NaN threshold is treated as zero, so identical
/// offsets still share a group.
///
/// # Examples
///
/// ```
/// use timecode_markers::{SourceRef, TextSource, cluster, extract};
///
/// let records = extract(&[TextSource::comment("0:10 0:13 0:20", SourceRef(1))]);
/// let groups = cluster(&records, 3.0);
/// let anchors: Vec<u32> = groups.iter().map(|g| g.anchor_offset_seconds()).collect();
/// assert_eq!(anchors, vec![10, 20]);
/// ```
pub fn cluster(records: &[TimestampRecord], threshold_seconds: f64) -> Vec<Group> {
    let threshold = if threshold_seconds.is_nan() { 0.0 } else { threshold_seconds.max(0.0) };

    let mut sorted: Vec<&TimestampRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.offset_seconds());

    let mut groups = Vec::new();
    let mut current: Option<Group> = None;

    for record in sorted {
        match current.as_mut() {
            Some(group) if within(group.anchor_offset_seconds(), record, threshold) => {
                group.push(record.clone());
            }
            _ => {
                if let Some(closed) = current.replace(Group::start(record.clone())) {
                    groups.push(closed);
                }
            }
        }
    }

    if let Some(last) = current {
        groups.push(last);
    }

    debug!(records = records.len(), groups = groups.len(), threshold, "Clustered timestamps");

    groups
}

/// Resolve `threshold` against `duration` and cluster.
///
/// # Errors
///
/// [`MarkerError::NoDuration`] when a fractional threshold meets an unknown or
/// non-positive duration.
pub fn cluster_records(
    records: &[TimestampRecord],
    threshold: ClusterThreshold,
    duration: Option<f64>,
) -> Result<Vec<Group>, MarkerError> {
    let seconds = threshold.resolve(duration)?;
    Ok(cluster(records, seconds))
}

fn within(anchor: u32, record: &TimestampRecord, threshold: f64) -> bool {
    f64::from(record.offset_seconds().abs_diff(anchor)) <= threshold
}
