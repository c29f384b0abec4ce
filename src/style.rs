//! Concrete style payloads carried by span and paragraph ranges
//!
//! Every property is optional: a style only says what it sets. Overlapping
//! styles are combined with `merge`, where the later style wins per property.

use serde::{Deserialize, Serialize};

/// RGBA color packed as `0xRRGGBBAA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000FF);
    pub const WHITE: Color = Color(0xFFFFFFFF);
    pub const RED: Color = Color(0xFF0000FF);
    pub const GREEN: Color = Color(0x00FF00FF);
    pub const BLUE: Color = Color(0x0000FFFF);
    pub const GRAY: Color = Color(0x888888FF);
    pub const LIGHT_GRAY: Color = Color(0xCCCCCCFF);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Font weight on the usual 100..900 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    Center,
    End,
    Justify,
}

/// Character-level style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    /// Font size in scale-independent pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<TextDecoration>,
}

impl SpanStyle {
    /// Overlay the properties `other` sets on top of `self`
    pub fn merge(&self, other: &SpanStyle) -> SpanStyle {
        SpanStyle {
            font_weight: other.font_weight.or(self.font_weight),
            font_style: other.font_style.or(self.font_style),
            font_size: other.font_size.or(self.font_size),
            color: other.color.or(self.color),
            background: other.background.or(self.background),
            decoration: other.decoration.or(self.decoration),
        }
    }

    /// True if the style sets nothing
    pub fn is_unset(&self) -> bool {
        *self == SpanStyle::default()
    }
}

/// Paragraph-level style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Line height in scale-independent pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// Leading indent of the first line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_indent: Option<f32>,
}

impl ParagraphStyle {
    pub fn merge(&self, other: &ParagraphStyle) -> ParagraphStyle {
        ParagraphStyle {
            text_align: other.text_align.or(self.text_align),
            line_height: other.line_height.or(self.line_height),
            text_indent: other.text_indent.or(self.text_indent),
        }
    }
}
