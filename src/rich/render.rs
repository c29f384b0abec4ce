//! Flattening a [`StyledText`] into render-ready segments.
//!
//! A renderer wants runs of text with one resolved style each, not a pile of
//! overlapping ranges. Segments are ordered, never overlap, and cover the
//! whole text.

use serde::Serialize;

use crate::style::{ParagraphStyle, SpanStyle};
use crate::util::text::char_slice;

use super::range::StyleRange;
use super::styled_text::StyledText;

/// A run of text with a single resolved style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// All spans covering the run, merged in insertion order
    pub span: SpanStyle,
    /// Paragraph ranges covering the run, merged in insertion order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<ParagraphStyle>,
}

fn covering<T>(ranges: &[StyleRange<T>], start: usize, end: usize) -> impl Iterator<Item = &T> {
    ranges
        .iter()
        .filter(move |range| range.start() <= start && end <= range.end())
        .map(StyleRange::item)
}

/// Cut the text at every range boundary and resolve each piece's style.
///
/// Zero-length spans carry no visual effect and are ignored.
pub fn segments(styled: &StyledText) -> Vec<Segment> {
    let len = styled.len();
    if len == 0 {
        return Vec::new();
    }

    let spans: Vec<StyleRange<SpanStyle>> = styled
        .span_styles()
        .iter()
        .filter(|range| !range.is_empty())
        .cloned()
        .collect();

    let mut cuts = vec![0, len];
    for range in &spans {
        cuts.push(range.start());
        cuts.push(range.end());
    }
    for range in styled.paragraph_styles() {
        cuts.push(range.start());
        cuts.push(range.end());
    }
    cuts.sort_unstable();
    cuts.dedup();

    cuts.windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let span = covering(&spans, start, end)
                .fold(SpanStyle::default(), |acc, style| acc.merge(style));
            let paragraph = covering(styled.paragraph_styles(), start, end)
                .fold(None, |acc: Option<ParagraphStyle>, style| {
                    Some(match acc {
                        Some(acc) => acc.merge(style),
                        None => style.clone(),
                    })
                });

            Segment {
                start,
                end,
                text: char_slice(styled.text(), start..end).to_string(),
                span,
                paragraph,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, FontWeight, TextAlign};

    fn bold() -> SpanStyle {
        SpanStyle {
            font_weight: Some(FontWeight::BOLD),
            ..Default::default()
        }
    }

    fn red() -> SpanStyle {
        SpanStyle {
            color: Some(Color::RED),
            ..Default::default()
        }
    }

    fn span(style: SpanStyle, start: usize, end: usize) -> StyleRange<SpanStyle> {
        StyleRange::new(style, start, end, false, true).unwrap()
    }

    #[test]
    fn test_plain_text_is_one_segment() {
        let out = segments(&StyledText::plain("hello"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "hello");
        assert!(out[0].span.is_unset());
        assert_eq!(out[0].paragraph, None);
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        assert!(segments(&StyledText::plain("")).is_empty());
    }

    #[test]
    fn test_overlapping_spans_are_cut_and_merged() {
        let text = StyledText::new(
            "hello world",
            vec![span(bold(), 0, 7), span(red(), 4, 11)],
            vec![],
            vec![],
        )
        .unwrap();

        let out = segments(&text);
        let texts: Vec<&str> = out.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["hell", "o w", "orld"]);

        assert_eq!(out[0].span, bold());
        assert_eq!(out[1].span, bold().merge(&red()));
        assert_eq!(out[2].span, red());
    }

    #[test]
    fn test_zero_length_spans_do_not_cut() {
        let text = StyledText::new("abcd", vec![span(bold(), 2, 2)], vec![], vec![]).unwrap();
        let out = segments(&text);
        assert_eq!(out.len(), 1);
        assert!(out[0].span.is_unset());
    }

    #[test]
    fn test_paragraph_applies_to_covered_segments() {
        let centered = ParagraphStyle {
            text_align: Some(TextAlign::Center),
            ..Default::default()
        };
        let para = StyleRange::new(centered.clone(), 0, 5, true, true).unwrap();
        let text = StyledText::new("title\nbody", vec![], vec![para], vec![]).unwrap();

        let out = segments(&text);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "title");
        assert_eq!(out[0].paragraph, Some(centered));
        assert_eq!(out[1].text, "\nbody");
        assert_eq!(out[1].paragraph, None);
    }

    #[test]
    fn test_segments_cover_text_without_gaps() {
        let text = StyledText::new(
            "héllo wörld",
            vec![span(bold(), 1, 3), span(red(), 5, 9)],
            vec![],
            vec![],
        )
        .unwrap();
        let out = segments(&text);

        assert_eq!(out.first().map(|s| s.start), Some(0));
        assert_eq!(out.last().map(|s| s.end), Some(11));
        for pair in out.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let joined: String = out.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "héllo wörld");
    }
}
