//! Edit classification: did the text change, and by how much.
//!
//! A host only reports "here is the new text and the new selection". From the
//! old and new selections alone we infer where text was inserted and removed.

use super::selection::Selection;

/// Insertion and removal extents inferred from a selection change.
///
/// Values are signed: a negative `added_len` means nothing was added, a
/// negative `removed_len` means nothing was removed (typing forward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDelta {
    /// Old selection as it was before the edit
    pub old_min: isize,
    pub old_max: isize,
    pub old_collapsed: bool,
    /// Insertion runs from `old.min` to `new.max`
    pub add_start: isize,
    pub add_end: isize,
    pub added_len: isize,
    /// Backspace distance for a collapsed old selection, else the replaced length
    pub removed_len: isize,
    pub removed_start: isize,
    /// Window of positions the edit touches
    pub sel_min: isize,
    pub sel_max: isize,
}

impl EditDelta {
    pub fn from_selections(old: Selection, new: Selection) -> Self {
        let old_min = old.min() as isize;
        let old_max = old.max() as isize;
        let new_min = new.min() as isize;
        let new_max = new.max() as isize;

        let add_start = old_min;
        let add_end = new_max;

        let (removed_len, removed_start) = if old.is_collapsed() {
            (old_min - new_min, new_min)
        } else {
            (old.len() as isize, old_min)
        };

        Self {
            old_min,
            old_max,
            old_collapsed: old.is_collapsed(),
            add_start,
            add_end,
            added_len: add_end - add_start,
            removed_len,
            removed_start,
            sel_min: add_start.min(add_end),
            sel_max: add_start.max(add_end).max(old_max),
        }
    }

    /// Net shift applied to ranges entirely after the edit window
    pub fn offset(&self) -> isize {
        self.added_len.max(0) - self.removed_len.max(0)
    }
}

/// Decide whether the text content changed, as opposed to the cursor moving or
/// a selection being extended.
///
/// `text_changed_in_range(start, end)` reports whether old and new text differ
/// in `start..end`. It must only be called when both texts have the same
/// length; this function guarantees that by calling it only when
/// `text_length_delta == 0`.
///
/// A same-length paste of identical content is indistinguishable from a
/// selection move and is reported as unchanged.
pub fn has_text_changed(
    text_length_delta: isize,
    old_selection: Selection,
    new_selection: Selection,
    text_changed_in_range: impl FnOnce(usize, usize) -> bool,
) -> bool {
    // An expanded new selection never comes from typing
    if !new_selection.is_collapsed() {
        return false;
    }

    if text_length_delta != 0 {
        return true;
    }

    // Same length: the old selection was replaced by text ending at new.max.
    // "foo bar baz", old selection "bar " replaced by "hellow" -> "foohellowbaz"
    // This also covers a batch delete where new.max == old.min.
    let expected_delta = -(old_selection.len() as isize) + new_selection.max() as isize
        - old_selection.min() as isize;

    expected_delta == text_length_delta
        && text_changed_in_range(old_selection.min(), new_selection.max())
}

/// Classify an edit, returning its extents if the text changed
pub fn classify_edit(
    text_length_delta: isize,
    old_selection: Selection,
    new_selection: Selection,
    text_changed_in_range: impl FnOnce(usize, usize) -> bool,
) -> Option<EditDelta> {
    if has_text_changed(
        text_length_delta,
        old_selection,
        new_selection,
        text_changed_in_range,
    ) {
        Some(EditDelta::from_selections(old_selection, new_selection))
    } else {
        None
    }
}
