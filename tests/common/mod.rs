//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use paper::messages::Msg;
use paper::note::Note;
use paper::rich::{EditorValue, Selection, StyleRange, StyledText};
use paper::style::{FontStyle, FontWeight, ParagraphStyle, SpanStyle, TextAlign};
use paper::update::update;
use paper::util::{char_len, char_to_byte};

pub fn bold() -> SpanStyle {
    SpanStyle {
        font_weight: Some(FontWeight::BOLD),
        ..Default::default()
    }
}

pub fn italic() -> SpanStyle {
    SpanStyle {
        font_style: Some(FontStyle::Italic),
        ..Default::default()
    }
}

pub fn centered() -> ParagraphStyle {
    ParagraphStyle {
        text_align: Some(TextAlign::Center),
        ..Default::default()
    }
}

pub fn is_bold(style: &SpanStyle) -> bool {
    style.font_weight == Some(FontWeight::BOLD)
}

pub fn range<T>(item: T, start: usize, end: usize, si: bool, ei: bool) -> StyleRange<T> {
    StyleRange::new(item, start, end, si, ei).unwrap()
}

/// Create a value with given text, span ranges and selection
pub fn value_with_spans(
    text: &str,
    spans: Vec<StyleRange<SpanStyle>>,
    selection: Selection,
) -> EditorValue {
    let styled = StyledText::new(text, spans, vec![], vec![]).unwrap();
    EditorValue::with_styled_text(styled, selection, None)
}

/// Create a value with given text, paragraph ranges and selection
pub fn value_with_paragraphs(
    text: &str,
    paragraphs: Vec<StyleRange<ParagraphStyle>>,
    selection: Selection,
) -> EditorValue {
    let styled = StyledText::new(text, vec![], paragraphs, vec![]).unwrap();
    EditorValue::with_styled_text(styled, selection, None)
}

/// Type `s` at the collapsed cursor, the way a text field reports it
pub fn type_text(value: &EditorValue, s: &str) -> EditorValue {
    let at = value.selection.head;
    let text = value.text();
    let byte = char_to_byte(text, at);
    let new_text = format!("{}{}{}", &text[..byte], s, &text[byte..]);
    value
        .apply_text_change(&new_text, Selection::collapsed(at + char_len(s)), None)
        .unwrap()
}

/// Delete the selection, or the char before a collapsed cursor
pub fn backspace(value: &EditorValue) -> EditorValue {
    let (start, end) = if value.selection.is_collapsed() {
        (value.selection.head.saturating_sub(1), value.selection.head)
    } else {
        (value.selection.min(), value.selection.max())
    };
    let text = value.text();
    let new_text = format!(
        "{}{}",
        &text[..char_to_byte(text, start)],
        &text[char_to_byte(text, end)..]
    );
    value
        .apply_text_change(&new_text, Selection::collapsed(start), None)
        .unwrap()
}

pub fn span_bounds(value: &EditorValue) -> Vec<String> {
    value
        .styled_text
        .span_styles()
        .iter()
        .map(|r| r.bounds_string())
        .collect()
}

pub fn paragraph_bounds(value: &EditorValue) -> Vec<String> {
    value
        .styled_text
        .paragraph_styles()
        .iter()
        .map(|r| r.bounds_string())
        .collect()
}

/// Run a YAML message script against a new note
pub fn replay(script: &str) -> Note {
    let msgs: Vec<Msg> = serde_yaml::from_str(script).unwrap();
    let mut note = Note::default();
    for msg in msgs {
        update(&mut note, msg).unwrap();
    }
    note
}
