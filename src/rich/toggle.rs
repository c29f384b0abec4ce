//! Toggle engine: is a style active over the selection, and switching it on or off.

use super::range::StyleRange;
use super::selection::Selection;

/// Decides whether a style payload counts as "the same style".
///
/// Payloads may carry incidental properties, so matching is done on a chosen
/// subset of them rather than with `==`. Any `Fn(&T) -> bool` is a matcher.
pub trait StyleMatcher<T> {
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> StyleMatcher<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Check if the ranges matching `matcher` cover `start..end` with no gap.
///
/// Matching ranges are swept in start order; the first gap fails the check.
pub fn fills_range<T>(
    ranges: &[StyleRange<T>],
    start: usize,
    end: usize,
    matcher: &impl StyleMatcher<T>,
) -> bool {
    let mut matching: Vec<&StyleRange<T>> = ranges
        .iter()
        .filter(|range| matcher.matches(range.item()))
        .collect();
    matching.sort_by_key(|range| range.start());

    let mut covered_to = start;
    for range in matching {
        if range.end() < covered_to {
            continue;
        }
        if covered_to < range.start() {
            return false;
        }
        if end <= range.end() {
            return true;
        }
        covered_to = range.end();
    }

    false
}

/// Check if a style is active for the selection.
///
/// For a cursor: a matching range would absorb text typed there.
/// For a selection: matching ranges fill it completely.
pub fn is_active<T>(
    ranges: &[StyleRange<T>],
    selection: Selection,
    matcher: &impl StyleMatcher<T>,
) -> bool {
    if selection.is_collapsed() {
        ranges.iter().any(|range| {
            matcher.matches(range.item()) && range.expands_on_insert_at(selection.min())
        })
    } else {
        fills_range(ranges, selection.min(), selection.max(), matcher)
    }
}

/// Append a new range over the selection. The end is always inclusive so text
/// typed right after the selection continues the style.
pub fn toggle_on<T: Clone>(
    ranges: &[StyleRange<T>],
    selection: Selection,
    item: T,
    start_inclusive: bool,
) -> Vec<StyleRange<T>> {
    let mut out = ranges.to_vec();
    out.push(StyleRange::from_ordered(
        item,
        selection.min(),
        selection.max(),
        start_inclusive,
        true,
    ));
    out
}

/// Remove the matching style from exactly `start..end_exclusive`, splitting
/// or trimming ranges that extend past it. Empty remainders are discarded.
pub fn minus_spans_in_range<T: Clone>(
    ranges: &[StyleRange<T>],
    start: usize,
    end_exclusive: usize,
    matcher: &impl StyleMatcher<T>,
) -> Vec<StyleRange<T>> {
    let mut out = Vec::with_capacity(ranges.len() + 1);

    for range in ranges {
        if !matcher.matches(range.item()) {
            out.push(range.clone());
            continue;
        }

        let left = || {
            StyleRange::from_ordered(
                range.item().clone(),
                range.start(),
                start,
                range.start_inclusive(),
                false,
            )
        };
        let right = || range.with_ordered_bounds(end_exclusive, range.end());

        if start <= range.start() && range.end() < end_exclusive {
            // Selection covers the whole range
        } else if range.start() <= start && end_exclusive <= range.end() {
            // SELECTION:      -----
            // RANGE    :    ----------
            // REMAINDER:    __     ___
            push_non_empty(&mut out, left());
            push_non_empty(&mut out, right());
        } else if range.contains(start) {
            // SELECTION:     ---------
            // RANGE    : --------
            // REMAINDER: ____
            push_non_empty(&mut out, left());
        } else if range.contains(end_exclusive) {
            // SELECTION: ---------
            // RANGE    :      --------
            // REMAINDER:          ____
            push_non_empty(&mut out, right());
        } else {
            out.push(range.clone());
        }
    }

    out
}

fn push_non_empty<T>(out: &mut Vec<StyleRange<T>>, range: StyleRange<T>) {
    if !range.is_empty() {
        out.push(range);
    }
}

/// Keep only matching ranges that contain neither `start` nor `end`.
///
/// Paragraph styles are never trimmed: a paragraph touched by the selection
/// loses the style entirely. Ranges the matcher rejects are dropped as well,
/// so toggling one paragraph format off clears every other paragraph format.
/// Nothing enforces that same-kind paragraph ranges do not overlap, so every
/// touched one goes.
pub fn remove_intersecting_with_range<T: Clone>(
    ranges: &[StyleRange<T>],
    start: usize,
    end: usize,
    matcher: &impl StyleMatcher<T>,
) -> Vec<StyleRange<T>> {
    ranges
        .iter()
        .filter(|range| {
            matcher.matches(range.item()) && !(range.contains(start) || range.contains(end))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Style {
        Bold,
        Italic,
    }

    fn range(item: Style, start: usize, end: usize, si: bool, ei: bool) -> StyleRange<Style> {
        StyleRange::new(item, start, end, si, ei).unwrap()
    }

    fn is_bold(style: &Style) -> bool {
        *style == Style::Bold
    }

    #[test]
    fn test_fills_range_contiguous() {
        let ranges = [
            range(Style::Bold, 4, 10, false, true),
            range(Style::Bold, 0, 4, false, true),
        ];
        assert!(fills_range(&ranges, 0, 10, &is_bold));
        assert!(fills_range(&ranges, 2, 6, &is_bold));
    }

    #[test]
    fn test_fills_range_uncovered_tail() {
        let ranges = [
            range(Style::Bold, 0, 4, false, true),
            range(Style::Bold, 4, 8, false, true),
        ];
        assert!(!fills_range(&ranges, 0, 10, &is_bold));
    }

    #[test]
    fn test_fills_range_gap() {
        let ranges = [
            range(Style::Bold, 0, 3, false, true),
            range(Style::Bold, 5, 10, false, true),
        ];
        assert!(!fills_range(&ranges, 0, 10, &is_bold));
    }

    #[test]
    fn test_fills_range_ignores_other_styles() {
        let ranges = [
            range(Style::Bold, 0, 3, false, true),
            range(Style::Italic, 3, 10, false, true),
        ];
        assert!(!fills_range(&ranges, 0, 10, &is_bold));
    }

    #[test]
    fn test_fills_range_skips_ranges_left_of_window() {
        let ranges = [
            range(Style::Bold, 0, 2, false, true),
            range(Style::Bold, 3, 9, false, true),
        ];
        assert!(fills_range(&ranges, 4, 8, &is_bold));
    }

    #[test]
    fn test_is_active_at_cursor() {
        let ranges = [range(Style::Bold, 2, 5, false, true)];
        assert!(!is_active(&ranges, Selection::collapsed(2), &is_bold));
        assert!(is_active(&ranges, Selection::collapsed(3), &is_bold));
        assert!(is_active(&ranges, Selection::collapsed(5), &is_bold));
        assert!(!is_active(&ranges, Selection::collapsed(6), &is_bold));
    }

    #[test]
    fn test_toggle_on_empty_text() {
        let out = toggle_on(&[], Selection::collapsed(0), Style::Bold, false);
        assert_eq!(out, vec![range(Style::Bold, 0, 0, false, true)]);
        // End inclusive: typing at 0 continues the style
        assert!(is_active(&out, Selection::collapsed(0), &is_bold));
    }

    #[test]
    fn test_toggle_on_normalizes_reversed_selection() {
        let out = toggle_on(&[], Selection::new(7, 2), Style::Italic, true);
        assert_eq!(out, vec![range(Style::Italic, 2, 7, true, true)]);
    }

    #[test]
    fn test_minus_spans_covering_whole_range() {
        let ranges = [range(Style::Bold, 2, 4, false, true)];
        assert!(minus_spans_in_range(&ranges, 0, 10, &is_bold).is_empty());
    }

    #[test]
    fn test_minus_spans_splits_range() {
        let ranges = [range(Style::Bold, 0, 10, true, true)];
        let out = minus_spans_in_range(&ranges, 3, 6, &is_bold);
        assert_eq!(
            out,
            vec![
                range(Style::Bold, 0, 3, true, false),
                range(Style::Bold, 6, 10, true, true),
            ]
        );
    }

    #[test]
    fn test_minus_spans_trims_left_and_right() {
        let ranges = [
            range(Style::Bold, 0, 5, false, false),
            range(Style::Bold, 7, 12, false, true),
        ];
        let out = minus_spans_in_range(&ranges, 3, 9, &is_bold);
        assert_eq!(
            out,
            vec![
                range(Style::Bold, 0, 3, false, false),
                range(Style::Bold, 9, 12, false, true),
            ]
        );
    }

    #[test]
    fn test_minus_spans_exact_match_drops() {
        let ranges = [range(Style::Bold, 3, 6, false, true)];
        assert!(minus_spans_in_range(&ranges, 3, 6, &is_bold).is_empty());
    }

    #[test]
    fn test_minus_spans_keeps_other_styles() {
        let italic = range(Style::Italic, 0, 10, false, true);
        let out = minus_spans_in_range(&[italic.clone()], 2, 4, &is_bold);
        assert_eq!(out, vec![italic]);
    }

    #[test]
    fn test_minus_spans_at_cursor_on_inclusive_end() {
        let ranges = [range(Style::Bold, 1, 5, false, true)];
        let out = minus_spans_in_range(&ranges, 5, 5, &is_bold);
        assert_eq!(out, vec![range(Style::Bold, 1, 5, false, false)]);
        assert!(!is_active(&out, Selection::collapsed(5), &is_bold));
    }

    #[test]
    fn test_remove_intersecting_drops_whole_paragraph() {
        let ranges = [range(Style::Bold, 0, 20, true, true)];
        assert!(remove_intersecting_with_range(&ranges, 5, 6, &is_bold).is_empty());
    }

    #[test]
    fn test_remove_intersecting_keeps_only_untouched_matching() {
        let far = range(Style::Bold, 30, 40, true, true);
        let other = range(Style::Italic, 0, 20, true, true);
        let distant_other = range(Style::Italic, 50, 60, true, true);
        let out = remove_intersecting_with_range(&[far.clone(), other, distant_other], 5, 6, &is_bold);
        assert_eq!(out, vec![far]);
    }

    #[test]
    fn test_closure_matcher() {
        let ranges = [range(Style::Italic, 0, 4, false, true)];
        let italic = |style: &Style| *style == Style::Italic;
        assert!(is_active(&ranges, Selection::new(0, 4), &italic));
    }
}
