//! Boundary to the layer that renders markers and the detail surface.
//!
//! The core never touches a display. It hands the host [`DetailEntry`] rows for the
//! active marker and a [`SelectionChange`] whenever the selection moves; the host
//! implements [`PresentationAdapter`] to act on them.

mod timestamps;

pub use timestamps::format_offset;

use serde::Serialize;

use crate::models::{Group, Marker, SourceRef};
use crate::proximity::SelectionChange;

/// Receives selection transitions from a [`MarkerSession`](crate::MarkerSession).
pub trait PresentationAdapter {
    /// Re-render the detail surface for `change.current`, or remove it when `None`.
    fn selection_changed(&mut self, change: &SelectionChange);
}

/// Forward `change` to `adapter` if there is one.
pub fn notify<A: PresentationAdapter + ?Sized>(adapter: &mut A, change: Option<SelectionChange>) {
    if let Some(change) = change {
        adapter.selection_changed(&change);
    }
}

/// Where a detail row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Description,
    Comment,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Comment => "comment",
        }
    }
}

/// One row of the detail surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    pub time_code: String,
    pub text: String,
    pub source_ref: SourceRef,
    pub kind: SourceKind,
}

impl DetailEntry {
    /// Rows for every member of the marker's group, in group order.
    pub fn from_marker(marker: &Marker) -> Vec<Self> {
        Self::from_group(&marker.group)
    }

    pub fn from_group(group: &Group) -> Vec<Self> {
        group
            .members()
            .iter()
            .map(|record| Self {
                time_code: record.token.normalized_text().to_string(),
                text: record.line_text.clone(),
                source_ref: record.source_ref,
                kind: if record.is_primary { SourceKind::Description } else { SourceKind::Comment },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::{cluster, extract};
    use crate::models::TextSource;
    use crate::proximity::build_index;

    #[derive(Default)]
    struct Recorder {
        changes: Vec<SelectionChange>,
    }

    impl PresentationAdapter for Recorder {
        fn selection_changed(&mut self, change: &SelectionChange) {
            self.changes.push(change.clone());
        }
    }

    fn marker() -> Marker {
        let sources = vec![
            TextSource::primary("00:01:00 Chapter one", SourceRef(0)),
            TextSource::comment("  1:01 look at this  ", SourceRef(5)),
        ];
        let index = build_index(cluster(&extract(&sources), 3.0), Some(100.0)).unwrap();
        index.markers()[0].clone()
    }

    #[test]
    fn test_detail_entries() {
        let entries = DetailEntry::from_marker(&marker());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].time_code, "01:00");
        assert_eq!(entries[0].text, "00:01:00 Chapter one");
        assert_eq!(entries[0].kind, SourceKind::Description);
        assert_eq!(entries[1].text, "1:01 look at this");
        assert_eq!(entries[1].source_ref, SourceRef(5));
        assert_eq!(entries[1].kind.label(), "comment");
    }

    #[test]
    fn test_notify_forwards_only_changes() {
        let mut recorder = Recorder::default();
        notify(&mut recorder, None);
        assert!(recorder.changes.is_empty());

        let change = SelectionChange { previous: None, current: Some(marker()) };
        notify(&mut recorder, Some(change.clone()));
        assert_eq!(recorder.changes, vec![change]);
    }
}
