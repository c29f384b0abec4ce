//! EditorValue - the snapshot a host hands in and gets back on every edit.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::style::{ParagraphStyle, SpanStyle};
use crate::util::text::{char_len, equals_in_range};

use super::classify::classify_edit;
use super::range::StyleRange;
use super::selection::Selection;
use super::styled_text::StyledText;
use super::toggle::{self, StyleMatcher};
use super::transform::{offset_ranges, paragraph_on_delete_start, span_on_delete_start};

/// Styled text plus selection and in-progress composition.
///
/// Values are never mutated: every operation returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorValue {
    pub styled_text: StyledText,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<Selection>,
}

impl EditorValue {
    /// Unstyled text with the cursor at the start
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            styled_text: StyledText::plain(text),
            selection: Selection::default(),
            composition: None,
        }
    }

    pub fn with_styled_text(
        styled_text: StyledText,
        selection: Selection,
        composition: Option<Selection>,
    ) -> Self {
        Self {
            styled_text,
            selection,
            composition,
        }
    }

    pub fn text(&self) -> &str {
        self.styled_text.text()
    }

    /// Copy with a new selection, ranges untouched
    pub fn with_selection(&self, selection: Selection) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }

    /// Apply an edit reported by the host: the text as it now reads and the
    /// selection after the edit.
    ///
    /// If only the selection moved, the styled text is kept as-is. Otherwise
    /// span and paragraph ranges follow the edit; annotations are carried over
    /// verbatim, minus any that no longer fit the new text.
    pub fn apply_text_change(
        &self,
        new_text: &str,
        new_selection: Selection,
        new_composition: Option<Selection>,
    ) -> Result<Self> {
        let old_text = self.styled_text.text();
        let old_len = char_len(old_text);
        let new_len = char_len(new_text);
        let text_length_delta = new_len as isize - old_len as isize;

        let text_changed_in_range = |start: usize, end: usize| {
            debug_assert_eq!(
                old_len, new_len,
                "range comparison is only valid when old and new text have the same length"
            );
            !equals_in_range(old_text, new_text, start, end)
        };

        let Some(delta) = classify_edit(
            text_length_delta,
            self.selection,
            new_selection,
            text_changed_in_range,
        ) else {
            return Ok(Self {
                styled_text: self.styled_text.clone(),
                selection: new_selection,
                composition: new_composition,
            });
        };

        let span_styles =
            offset_ranges(self.styled_text.span_styles(), &delta, span_on_delete_start);
        let paragraph_styles = offset_ranges(
            self.styled_text.paragraph_styles(),
            &delta,
            paragraph_on_delete_start,
        );

        let (kept, dropped): (Vec<_>, Vec<_>) = self
            .styled_text
            .annotations()
            .iter()
            .cloned()
            .partition(|range| range.end() <= new_len);
        if !dropped.is_empty() {
            warn!(
                count = dropped.len(),
                text_len = new_len,
                "annotations past the end of the edited text dropped"
            );
        }

        debug!(
            delta = text_length_delta,
            added = delta.added_len,
            removed = delta.removed_len,
            spans = span_styles.len(),
            paragraphs = paragraph_styles.len(),
            "text changed"
        );

        Ok(Self {
            styled_text: StyledText::new(new_text, span_styles, paragraph_styles, kept)?,
            selection: new_selection,
            composition: new_composition,
        })
    }

    /// Append a span range as-is
    pub fn plus_span_style(&self, range: StyleRange<SpanStyle>) -> Result<Self> {
        let mut spans = self.styled_text.span_styles().to_vec();
        spans.push(range);
        Ok(Self {
            styled_text: self.styled_text.with_span_styles(spans)?,
            ..self.clone()
        })
    }

    /// Append a paragraph range as-is. Overlap with existing paragraph ranges
    /// is not checked.
    pub fn plus_paragraph_style(&self, range: StyleRange<ParagraphStyle>) -> Result<Self> {
        let mut paragraphs = self.styled_text.paragraph_styles().to_vec();
        paragraphs.push(range);
        Ok(Self {
            styled_text: self.styled_text.with_paragraph_styles(paragraphs)?,
            ..self.clone()
        })
    }

    /// Whether the matching span style applies at the cursor or fills the selection
    pub fn is_span_active(&self, matcher: &impl StyleMatcher<SpanStyle>) -> bool {
        toggle::is_active(self.styled_text.span_styles(), self.selection, matcher)
    }

    /// Whether the matching paragraph style applies at the cursor or fills the selection
    pub fn is_paragraph_active(&self, matcher: &impl StyleMatcher<ParagraphStyle>) -> bool {
        toggle::is_active(
            self.styled_text.paragraph_styles(),
            self.selection,
            matcher,
        )
    }

    /// Switch a span style over the selection: add a `(min..max]` span if it
    /// is not active, otherwise cut it out of exactly the selection.
    pub fn toggle_span(
        &self,
        factory: impl FnOnce() -> SpanStyle,
        matcher: &impl StyleMatcher<SpanStyle>,
    ) -> Result<Self> {
        let spans = self.styled_text.span_styles();
        let spans = if self.is_span_active(matcher) {
            toggle::minus_spans_in_range(
                spans,
                self.selection.min(),
                self.selection.max(),
                matcher,
            )
        } else {
            toggle::toggle_on(spans, self.selection, factory(), false)
        };

        Ok(Self {
            styled_text: self.styled_text.with_span_styles(spans)?,
            ..self.clone()
        })
    }

    /// Switch a paragraph style over the selection: add a `[min..max]` range if
    /// it is not active, otherwise drop every matching paragraph touching
    /// either selection boundary.
    pub fn toggle_paragraph(
        &self,
        factory: impl FnOnce() -> ParagraphStyle,
        matcher: &impl StyleMatcher<ParagraphStyle>,
    ) -> Result<Self> {
        let paragraphs = self.styled_text.paragraph_styles();
        let paragraphs = if self.is_paragraph_active(matcher) {
            toggle::remove_intersecting_with_range(
                paragraphs,
                self.selection.min(),
                self.selection.max(),
                matcher,
            )
        } else {
            toggle::toggle_on(paragraphs, self.selection, factory(), true)
        };

        Ok(Self {
            styled_text: self.styled_text.with_paragraph_styles(paragraphs)?,
            ..self.clone()
        })
    }
}
