//! Range transformer: moves, grows, trims and drops style ranges so they stay
//! attached to the right characters after a text edit.

use tracing::trace;

use super::classify::{classify_edit, EditDelta};
use super::range::StyleRange;
use super::selection::Selection;

/// Deletion policy: when an edit deletes the position right before a range's
/// start (joining it with preceding text), return `true` to drop the range.
pub type OnDeleteStart = fn(usize, usize) -> bool;

/// Span policy: only an empty span vanishes when its start is deleted.
///
/// `"abc []|def"` (an empty span, cursor after it) backspaced becomes `"abc|def"`
/// with the span gone, while a non-empty span just moves left.
pub fn span_on_delete_start(start: usize, end: usize) -> bool {
    start == end
}

/// Paragraph policy: deleting into the start of a paragraph removes it.
///
/// `"abc[|paragraph]"` backspaced becomes `"ab|paragraph"` with no paragraph style.
pub fn paragraph_on_delete_start(_start: usize, _end: usize) -> bool {
    true
}

/// Length of the intersection of `l_start..l_end` and `r_start..r_end`
pub fn intersect_len(l_start: isize, l_end: isize, r_start: isize, r_end: isize) -> isize {
    if l_start <= r_start && r_start < l_end {
        return r_end.min(l_end) - r_start;
    }
    if r_start <= l_start && l_start < r_end {
        return r_end.min(l_end) - l_start;
    }
    0
}

fn to_position(value: isize) -> usize {
    debug_assert!(value >= 0, "transformed position went negative: {value}");
    value.max(0) as usize
}

/// Apply `delta` to a single range. `None` means the range is dropped.
fn offset_range<T: Clone>(
    range: &StyleRange<T>,
    delta: &EditDelta,
    on_delete_start: OnDeleteStart,
) -> Option<StyleRange<T>> {
    let range_start = range.start() as isize;
    let range_end = range.end() as isize;
    let range_len = range_end - range_start;

    if range_end < delta.sel_min {
        return Some(range.clone());
    }

    if delta.sel_max < range_start {
        let offset = delta.offset();
        return Some(range.with_ordered_bounds(
            to_position(range_start + offset),
            to_position(range_end + offset),
        ));
    }

    let mut start = range_start;
    let mut span_len =
        range_len - intersect_len(delta.old_min, delta.old_max, range_start, range_end);

    if delta.old_collapsed
        && delta.removed_len > 0
        && range_start < delta.old_max
        && delta.sel_min < range_end
    {
        span_len -= delta.removed_len;
    }

    if delta.removed_len > 0 {
        let deletes_into_start = delta.removed_start < range_start
            && range_start <= delta.removed_start + delta.removed_len;
        if deletes_into_start && on_delete_start(range.start(), range.end()) {
            trace!(range = %range.bounds_string(), "dropped: start deleted");
            return None;
        }

        if delta.sel_min < range_start {
            start = delta.sel_min;
        }
    }

    if delta.added_len > 0 {
        if range.expands_on_insert_at(to_position(delta.old_min)) {
            span_len += delta.added_len;
        } else if delta.add_start < range_start
            || (delta.add_start == range_start && !range.start_inclusive())
        {
            // Text typed in front of the range, or at a start that does not absorb it
            start += delta.added_len;
        }
    }

    if span_len < 0 {
        trace!(range = %range.bounds_string(), "dropped: more removed than it held");
        return None;
    }

    if start == range_start && span_len == range_len {
        return Some(range.clone());
    }

    // "ab{c[def]}g" with the braces deleted: the span went with its text
    if start < range_start && range_len > 0 && span_len == 0 {
        trace!(range = %range.bounds_string(), "dropped: consumed by edit");
        return None;
    }

    // Trimming a range from its end makes the new end sticky:
    // "abc(def)|ghi" backspaced becomes "abc(de]|ghi"
    let trimmed_from_end =
        delta.removed_len > 0 && delta.old_max == range_end && delta.sel_min > range_start;

    Some(StyleRange::from_ordered(
        range.item().clone(),
        to_position(start),
        to_position(start + span_len),
        range.start_inclusive(),
        range.end_inclusive() || trimmed_from_end,
    ))
}

/// Move every range in `ranges` according to an already classified edit.
///
/// Ranges untouched by the edit are returned as-is; the output keeps input order.
pub fn offset_ranges<T: Clone>(
    ranges: &[StyleRange<T>],
    delta: &EditDelta,
    on_delete_start: OnDeleteStart,
) -> Vec<StyleRange<T>> {
    ranges
        .iter()
        .filter_map(|range| offset_range(range, delta, on_delete_start))
        .collect()
}

/// Classify the edit and move `ranges` accordingly.
///
/// Returns `None` when only the selection changed: the caller keeps its
/// ranges untouched. This is distinct from `Some(vec![])`, which means every
/// range was dropped.
pub fn offset_ranges_for_selection_change<T: Clone>(
    ranges: &[StyleRange<T>],
    text_length_delta: isize,
    text_changed_in_range: impl FnOnce(usize, usize) -> bool,
    old_selection: Selection,
    new_selection: Selection,
    on_delete_start: OnDeleteStart,
) -> Option<Vec<StyleRange<T>>> {
    let delta = classify_edit(
        text_length_delta,
        old_selection,
        new_selection,
        text_changed_in_range,
    )?;
    Some(offset_ranges(ranges, &delta, on_delete_start))
}
