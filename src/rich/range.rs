//! Style ranges: a payload attached to an interval of text positions.

use serde::{Deserialize, Serialize};

use crate::error::{PaperError, Result};

/// A style payload over `start..end` with independently inclusive boundaries.
///
/// Inclusivity decides two things: whether a boundary position is contained,
/// and whether text typed exactly at that boundary extends the range.
/// Ranges are values; every change produces a new range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RangeRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct StyleRange<T> {
    item: T,
    start: usize,
    end: usize,
    start_inclusive: bool,
    end_inclusive: bool,
}

#[derive(Deserialize)]
struct RangeRepr<T> {
    item: T,
    start: usize,
    end: usize,
    #[serde(default)]
    start_inclusive: bool,
    #[serde(default)]
    end_inclusive: bool,
}

impl<T> TryFrom<RangeRepr<T>> for StyleRange<T> {
    type Error = PaperError;

    fn try_from(repr: RangeRepr<T>) -> Result<Self> {
        StyleRange::new(
            repr.item,
            repr.start,
            repr.end,
            repr.start_inclusive,
            repr.end_inclusive,
        )
    }
}

impl<T> StyleRange<T> {
    /// Create a range, failing with [`PaperError::InvalidRange`] if `start > end`
    pub fn new(
        item: T,
        start: usize,
        end: usize,
        start_inclusive: bool,
        end_inclusive: bool,
    ) -> Result<Self> {
        if start > end {
            return Err(PaperError::InvalidRange { start, end });
        }
        Ok(Self {
            item,
            start,
            end,
            start_inclusive,
            end_inclusive,
        })
    }

    /// Construct from bounds the caller has already proven ordered
    pub(crate) fn from_ordered(
        item: T,
        start: usize,
        end: usize,
        start_inclusive: bool,
        end_inclusive: bool,
    ) -> Self {
        debug_assert!(start <= end, "invalid range ({start} > {end})");
        Self {
            item,
            start,
            end,
            start_inclusive,
            end_inclusive,
        }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    pub fn end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    /// `end - start`
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if `position` lies inside the range, honoring boundary inclusivity.
    ///
    /// An empty range that is start inclusive contains its own boundary point.
    pub fn contains(&self, position: usize) -> bool {
        (self.start < position || (self.start_inclusive && self.start == position))
            && (position < self.end || (self.end_inclusive && self.end == position))
    }

    /// Whether text inserted at `cursor` should grow this range.
    ///
    /// Differs from [`contains`](Self::contains) on empty ranges: `[3..3)` with
    /// cursor 3 expands because the start is inclusive.
    pub fn expands_on_insert_at(&self, cursor: usize) -> bool {
        (self.start < cursor && cursor < self.end)
            || (self.start_inclusive && self.start == cursor)
            || (self.end_inclusive && self.end == cursor)
    }

    /// Readable boundary notation such as `(1..3]`, for logs and errors
    pub fn bounds_string(&self) -> String {
        format!(
            "{}{}..{}{}",
            if self.start_inclusive { '[' } else { '(' },
            self.start,
            self.end,
            if self.end_inclusive { ']' } else { ')' }
        )
    }
}

impl<T: Clone> StyleRange<T> {
    pub(crate) fn with_ordered_bounds(&self, start: usize, end: usize) -> Self {
        Self::from_ordered(
            self.item.clone(),
            start,
            end,
            self.start_inclusive,
            self.end_inclusive,
        )
    }
}
