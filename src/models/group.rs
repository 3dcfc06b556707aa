use serde::Serialize;

use super::record::TimestampRecord;

/// Records whose offsets lie within the clustering threshold of the earliest one.
///
/// A group always has at least one member, and its anchor is the offset of its
/// first (earliest) member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    anchor_offset_seconds: u32,
    members: Vec<TimestampRecord>,
}

impl Group {
    pub(crate) fn start(first: TimestampRecord) -> Self {
        Self { anchor_offset_seconds: first.offset_seconds(), members: vec![first] }
    }

    pub(crate) fn push(&mut self, record: TimestampRecord) {
        self.members.push(record);
    }

    pub fn anchor_offset_seconds(&self) -> u32 {
        self.anchor_offset_seconds
    }

    /// Members in ascending offset order, ties kept in extraction order.
    pub fn members(&self) -> &[TimestampRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn into_members(self) -> Vec<TimestampRecord> {
        self.members
    }
}

/// A group placed on the progress axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub group: Group,
    /// `anchor / duration`, clamped to `[0, 1]`
    pub position_fraction: f64,
}

impl Marker {
    pub fn anchor_offset_seconds(&self) -> u32 {
        self.group.anchor_offset_seconds()
    }
}
