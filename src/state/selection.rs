//! Selected channel index.

use crate::catalog::normalize_index;

/// Index of the channel sitting in the selection slot.
///
/// The index is kept in `[0, len)` of the catalog it was built for; every
/// relative change goes through [`normalize_index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: usize,
}

impl SelectionState {
    /// Creates a selection pointing at the first channel.
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    /// Returns the selected catalog index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Jumps straight to `index`, wrapped into `[0, len)`.
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected_index = normalize_index(index as i64, len);
    }

    /// Applies a snap of `slots` whole slots.
    ///
    /// A positive offset means the wheel moved toward lower indices, so the
    /// selection moves back by the same amount.
    pub fn apply_snap(&mut self, slots: i64, len: usize) {
        self.selected_index = normalize_index(self.selected_index as i64 - slots, len);
    }
}
