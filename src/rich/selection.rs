//! Selection type shared by the cursor, the selection and the IME composition.

use serde::{Deserialize, Serialize};

/// A text selection with anchor (where it started) and head (where the cursor is).
/// Positions are char offsets into the text. A collapsed selection is a plain cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub const fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Check if selection is collapsed (anchor == head)
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Smaller of anchor and head
    pub fn min(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Larger of anchor and head
    pub fn max(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Number of selected positions
    pub fn len(&self) -> usize {
        self.max() - self.min()
    }

}
