//! StyledText - raw text plus span, paragraph and annotation ranges.

use serde::{Deserialize, Serialize};

use crate::error::{PaperError, RangeKind, Result};
use crate::style::{ParagraphStyle, SpanStyle};
use crate::util::text::char_len;

use super::range::StyleRange;

/// Immutable text with three parallel range collections.
///
/// Every range is guaranteed to lie within `0..=len` where `len` is the char
/// length of the text. Collections keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StyledTextRepr")]
pub struct StyledText {
    text: String,
    span_styles: Vec<StyleRange<SpanStyle>>,
    paragraph_styles: Vec<StyleRange<ParagraphStyle>>,
    annotations: Vec<StyleRange<String>>,
}

#[derive(Deserialize)]
struct StyledTextRepr {
    text: String,
    #[serde(default)]
    span_styles: Vec<StyleRange<SpanStyle>>,
    #[serde(default)]
    paragraph_styles: Vec<StyleRange<ParagraphStyle>>,
    #[serde(default)]
    annotations: Vec<StyleRange<String>>,
}

impl TryFrom<StyledTextRepr> for StyledText {
    type Error = PaperError;

    fn try_from(repr: StyledTextRepr) -> Result<Self> {
        StyledText::new(
            repr.text,
            repr.span_styles,
            repr.paragraph_styles,
            repr.annotations,
        )
    }
}

fn check_bounds<T>(kind: RangeKind, ranges: &[StyleRange<T>], text_len: usize) -> Result<()> {
    match ranges.iter().find(|range| range.end() > text_len) {
        Some(range) => Err(PaperError::RangeOutOfBounds {
            kind,
            range: range.bounds_string(),
            text_len,
        }),
        None => Ok(()),
    }
}

impl StyledText {
    /// Build a styled text, failing with [`PaperError::RangeOutOfBounds`] if any
    /// range reaches past the end of `text`
    pub fn new(
        text: impl Into<String>,
        span_styles: Vec<StyleRange<SpanStyle>>,
        paragraph_styles: Vec<StyleRange<ParagraphStyle>>,
        annotations: Vec<StyleRange<String>>,
    ) -> Result<Self> {
        let text = text.into();
        let text_len = char_len(&text);
        check_bounds(RangeKind::Span, &span_styles, text_len)?;
        check_bounds(RangeKind::Paragraph, &paragraph_styles, text_len)?;
        check_bounds(RangeKind::Annotation, &annotations, text_len)?;

        Ok(Self {
            text,
            span_styles,
            paragraph_styles,
            annotations,
        })
    }

    /// Unstyled text
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in chars
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn span_styles(&self) -> &[StyleRange<SpanStyle>] {
        &self.span_styles
    }

    pub fn paragraph_styles(&self) -> &[StyleRange<ParagraphStyle>] {
        &self.paragraph_styles
    }

    pub fn annotations(&self) -> &[StyleRange<String>] {
        &self.annotations
    }

    /// Copy with new span styles
    pub fn with_span_styles(&self, span_styles: Vec<StyleRange<SpanStyle>>) -> Result<Self> {
        check_bounds(RangeKind::Span, &span_styles, self.len())?;
        Ok(Self {
            span_styles,
            ..self.clone()
        })
    }

    /// Copy with new paragraph styles
    pub fn with_paragraph_styles(
        &self,
        paragraph_styles: Vec<StyleRange<ParagraphStyle>>,
    ) -> Result<Self> {
        check_bounds(RangeKind::Paragraph, &paragraph_styles, self.len())?;
        Ok(Self {
            paragraph_styles,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontWeight;

    fn bold(start: usize, end: usize) -> StyleRange<SpanStyle> {
        let style = SpanStyle {
            font_weight: Some(FontWeight::BOLD),
            ..Default::default()
        };
        StyleRange::new(style, start, end, false, true).unwrap()
    }

    #[test]
    fn test_construct_within_bounds() {
        let text = StyledText::new("hello", vec![bold(0, 5)], vec![], vec![]).unwrap();
        assert_eq!(text.len(), 5);
        assert_eq!(text.span_styles().len(), 1);
    }

    #[test]
    fn test_span_out_of_bounds() {
        let err = StyledText::new("hi", vec![bold(1, 3)], vec![], vec![]).unwrap_err();
        assert_eq!(
            err,
            PaperError::RangeOutOfBounds {
                kind: RangeKind::Span,
                range: "(1..3]".to_string(),
                text_len: 2,
            }
        );
    }

    #[test]
    fn test_annotation_out_of_bounds() {
        let note = StyleRange::new("link".to_string(), 0, 4, false, false).unwrap();
        let err = StyledText::new("abc", vec![], vec![], vec![note]).unwrap_err();
        assert!(matches!(
            err,
            PaperError::RangeOutOfBounds {
                kind: RangeKind::Annotation,
                ..
            }
        ));
    }

    #[test]
    fn test_bounds_count_chars_not_bytes() {
        // 5 chars, 7 bytes
        assert!(StyledText::new("héllö", vec![bold(0, 5)], vec![], vec![]).is_ok());
        assert!(StyledText::new("héllö", vec![bold(0, 6)], vec![], vec![]).is_err());
    }

    #[test]
    fn test_with_span_styles_replaces_only_spans() {
        let para = StyleRange::new(ParagraphStyle::default(), 0, 5, true, true).unwrap();
        let text = StyledText::new("hello", vec![], vec![para], vec![]).unwrap();
        let updated = text.with_span_styles(vec![bold(0, 2)]).unwrap();
        assert_eq!(updated.span_styles().len(), 1);
        assert_eq!(updated.paragraph_styles(), text.paragraph_styles());
        assert!(text.with_span_styles(vec![bold(0, 6)]).is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_bounds() {
        let json = r#"{"text":"ab","span_styles":[{"item":{},"start":0,"end":3}]}"#;
        assert!(serde_json::from_str::<StyledText>(json).is_err());

        let json = r#"{"text":"abc","span_styles":[{"item":{},"start":0,"end":3}]}"#;
        let text: StyledText = serde_json::from_str(json).unwrap();
        assert_eq!(text.span_styles()[0].len(), 3);
    }
}
