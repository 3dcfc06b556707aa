//! Active-marker state with a debounced clear.
//!
//! ```text
//! Inactive ──query hit m──▶ Active(m) ──query hit m'──▶ Active(m')
//!                              │
//!            pointer left / query miss / detail left: clear scheduled
//!                              │
//!      query or detail entered before the deadline: clear cancelled
//!                              │
//!                  deadline reached (poll) ──▶ Inactive
//! ```
//!
//! The clear is never immediate so a pointer moving from the marker into the
//! detail surface does not close it. The host drives time: every entry point takes
//! `now`, and [`Selection::poll`] fires the clear once the deadline has passed.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::models::Marker;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Inactive,
    Active(Marker),
}

/// Emitted on every state transition; the presentation layer re-renders or removes
/// the detail surface in response.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub previous: Option<Marker>,
    pub current: Option<Marker>,
}

#[derive(Debug, Clone)]
pub struct Selection {
    state: SelectionState,
    /// At most one pending clear; scheduling replaces it
    pending_clear: Option<Instant>,
    hide_delay: Duration,
}

impl Selection {
    pub fn new(hide_delay: Duration) -> Self {
        Self { state: SelectionState::Inactive, pending_clear: None, hide_delay }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn active(&self) -> Option<&Marker> {
        match &self.state {
            SelectionState::Active(marker) => Some(marker),
            SelectionState::Inactive => None,
        }
    }

    /// Deadline of the pending clear, so the host can arm a wake-up.
    pub fn pending_clear(&self) -> Option<Instant> {
        self.pending_clear
    }

    /// Apply the result of a cursor query.
    ///
    /// Any pending clear is cancelled first. A hit on a different marker switches
    /// immediately; a miss while active schedules a clear instead of dropping the
    /// selection.
    pub fn on_query(&mut self, found: Option<&Marker>, now: Instant) -> Option<SelectionChange> {
        self.cancel_clear();

        match found {
            Some(marker) if self.active() == Some(marker) => None,
            Some(marker) => Some(self.transition(SelectionState::Active(marker.clone()))),
            None => {
                self.schedule_clear(now);
                None
            }
        }
    }

    /// The pointer left the queryable region.
    pub fn on_pointer_leave(&mut self, now: Instant) {
        self.schedule_clear(now);
    }

    /// The pointer entered the detail surface; keep it open.
    pub fn on_detail_enter(&mut self) {
        self.cancel_clear();
    }

    /// The pointer left the detail surface.
    pub fn on_detail_leave(&mut self, now: Instant) {
        self.schedule_clear(now);
    }

    /// Fire the pending clear if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<SelectionChange> {
        match self.pending_clear {
            Some(deadline) if now >= deadline => {
                self.pending_clear = None;
                debug!("Deferred clear fired");
                Some(self.transition(SelectionState::Inactive))
            }
            _ => None,
        }
    }

    /// Drop the selection immediately, e.g. when its marker no longer exists.
    pub fn reset(&mut self) -> Option<SelectionChange> {
        self.cancel_clear();
        match self.state {
            SelectionState::Inactive => None,
            SelectionState::Active(_) => Some(self.transition(SelectionState::Inactive)),
        }
    }

    fn schedule_clear(&mut self, now: Instant) {
        if self.active().is_some() {
            self.pending_clear = Some(now + self.hide_delay);
        }
    }

    fn cancel_clear(&mut self) {
        self.pending_clear = None;
    }

    fn transition(&mut self, next: SelectionState) -> SelectionChange {
        let previous = std::mem::replace(&mut self.state, next);
        let previous = match previous {
            SelectionState::Active(marker) => Some(marker),
            SelectionState::Inactive => None,
        };
        SelectionChange { previous, current: self.active().cloned() }
    }
}
