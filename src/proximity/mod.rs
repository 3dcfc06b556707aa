//! Cursor matching against markers on the progress axis.
//!
//! [`MarkerIndex`] places each group at `anchor / duration` and answers
//! nearest-marker queries. [`Selection`] holds the active marker and the deferred
//! clear that keeps the detail surface open while the pointer travels into it.

pub mod index;
pub mod selection;

pub use index::{MarkerIndex, ProgressBar, SharedIndex, build_index, find_nearest};
pub use selection::{Selection, SelectionChange, SelectionState};
