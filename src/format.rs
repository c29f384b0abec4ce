//! Formatting presets offered by a toolbar
//!
//! Each preset is both a factory (the style to add) and a matcher (which
//! existing styles count as "this format"). Matching only looks at the one
//! property the preset sets, so a bold red span still counts as bold.

use serde::{Deserialize, Serialize};

use crate::config::PaperConfig;
use crate::rich::StyleMatcher;
use crate::style::{
    Color, FontStyle, FontWeight, ParagraphStyle, SpanStyle, TextAlign, TextDecoration,
};

/// Character-level formats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanFormat {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    /// Large text used for inline headings
    FontSize(f32),
    TextColor(Color),
    Highlight(Color),
}

impl SpanFormat {
    /// Heading preset sized from config
    pub fn heading(config: &PaperConfig) -> Self {
        SpanFormat::FontSize(config.heading_font_size)
    }

    /// The standard toolbar, in display order
    pub fn toolbar(config: &PaperConfig) -> Vec<SpanFormat> {
        vec![
            SpanFormat::Bold,
            SpanFormat::Italic,
            SpanFormat::Strikethrough,
            SpanFormat::Underline,
            SpanFormat::heading(config),
            SpanFormat::TextColor(Color::RED),
            SpanFormat::TextColor(Color::GREEN),
            SpanFormat::TextColor(Color::BLUE),
            SpanFormat::TextColor(Color::LIGHT_GRAY),
            SpanFormat::Highlight(Color::GRAY),
        ]
    }

    /// The style this format adds
    pub fn style(&self) -> SpanStyle {
        let mut style = SpanStyle::default();
        match *self {
            SpanFormat::Bold => style.font_weight = Some(FontWeight::BOLD),
            SpanFormat::Italic => style.font_style = Some(FontStyle::Italic),
            SpanFormat::Underline => style.decoration = Some(TextDecoration::Underline),
            SpanFormat::Strikethrough => style.decoration = Some(TextDecoration::LineThrough),
            SpanFormat::FontSize(size) => style.font_size = Some(size),
            SpanFormat::TextColor(color) => style.color = Some(color),
            SpanFormat::Highlight(color) => style.background = Some(color),
        }
        style
    }
}

impl StyleMatcher<SpanStyle> for SpanFormat {
    fn matches(&self, item: &SpanStyle) -> bool {
        match *self {
            SpanFormat::Bold => item.font_weight == Some(FontWeight::BOLD),
            SpanFormat::Italic => item.font_style == Some(FontStyle::Italic),
            SpanFormat::Underline => item.decoration == Some(TextDecoration::Underline),
            SpanFormat::Strikethrough => item.decoration == Some(TextDecoration::LineThrough),
            SpanFormat::FontSize(size) => item.font_size == Some(size),
            SpanFormat::TextColor(color) => item.color == Some(color),
            SpanFormat::Highlight(color) => item.background == Some(color),
        }
    }
}

/// Paragraph-level formats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphFormat {
    Align(TextAlign),
    Indent(f32),
}

impl ParagraphFormat {
    pub fn style(&self) -> ParagraphStyle {
        let mut style = ParagraphStyle::default();
        match *self {
            ParagraphFormat::Align(align) => style.text_align = Some(align),
            ParagraphFormat::Indent(indent) => style.text_indent = Some(indent),
        }
        style
    }
}

impl StyleMatcher<ParagraphStyle> for ParagraphFormat {
    fn matches(&self, item: &ParagraphStyle) -> bool {
        match *self {
            ParagraphFormat::Align(align) => item.text_align == Some(align),
            ParagraphFormat::Indent(indent) => item.text_indent == Some(indent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_format_matches_own_style() {
        for format in SpanFormat::toolbar(&PaperConfig::default()) {
            assert!(format.matches(&format.style()), "{format:?}");
        }
    }

    #[test]
    fn test_matching_ignores_incidental_properties() {
        let bold_red = SpanFormat::Bold.style().merge(&SpanFormat::TextColor(Color::RED).style());
        assert!(SpanFormat::Bold.matches(&bold_red));
        assert!(SpanFormat::TextColor(Color::RED).matches(&bold_red));
        assert!(!SpanFormat::TextColor(Color::BLUE).matches(&bold_red));
        assert!(!SpanFormat::Italic.matches(&bold_red));
    }

    #[test]
    fn test_underline_and_strikethrough_are_distinct() {
        assert!(!SpanFormat::Underline.matches(&SpanFormat::Strikethrough.style()));
    }

    #[test]
    fn test_heading_uses_config_size() {
        let config = PaperConfig {
            heading_font_size: 40.0,
            ..Default::default()
        };
        assert_eq!(SpanFormat::heading(&config).style().font_size, Some(40.0));
    }

    #[test]
    fn test_paragraph_format() {
        let center = ParagraphFormat::Align(TextAlign::Center);
        assert!(center.matches(&center.style()));
        assert!(!ParagraphFormat::Align(TextAlign::End).matches(&center.style()));
    }

    #[test]
    fn test_format_deserializes_from_yaml() {
        let format: SpanFormat = serde_yaml::from_str("bold").unwrap();
        assert_eq!(format, SpanFormat::Bold);
        let format: SpanFormat = serde_yaml::from_str("font_size: 32.0").unwrap();
        assert_eq!(format, SpanFormat::FontSize(32.0));
    }
}
