//! Message types for the Elm-style architecture
//!
//! All note changes flow through these messages. They deserialize from YAML
//! so an edit session can be replayed from a script.

use serde::{Deserialize, Serialize};

use crate::config::PaperConfig;
use crate::format::{ParagraphFormat, SpanFormat};
use crate::rich::Selection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Msg {
    SetHeading(String),
    /// Move focus to a body item
    SelectItem(usize),
    /// The host's text field now reads `text` with `selection`
    EditText {
        index: usize,
        text: String,
        selection: Selection,
        #[serde(default)]
        composition: Option<Selection>,
    },
    SetSelection {
        index: usize,
        selection: Selection,
    },
    ToggleSpan {
        index: usize,
        format: SpanFormat,
    },
    ToggleParagraph {
        index: usize,
        format: ParagraphFormat,
    },
    /// Insert an image before `index`; `None` width means the configured default
    AddImage {
        index: usize,
        path: String,
        #[serde(default)]
        width_percentage: Option<f32>,
    },
    UpdateImage {
        index: usize,
        path: String,
        width_percentage: f32,
    },
    RemoveImage {
        index: usize,
    },
}

impl Msg {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Msg::SetHeading(_) => "SetHeading",
            Msg::SelectItem(_) => "SelectItem",
            Msg::EditText { .. } => "EditText",
            Msg::SetSelection { .. } => "SetSelection",
            Msg::ToggleSpan { .. } => "ToggleSpan",
            Msg::ToggleParagraph { .. } => "ToggleParagraph",
            Msg::AddImage { .. } => "AddImage",
            Msg::UpdateImage { .. } => "UpdateImage",
            Msg::RemoveImage { .. } => "RemoveImage",
        }
    }

    /// Body index of the text item this message edits, if any
    pub fn text_index(&self) -> Option<usize> {
        match *self {
            Msg::EditText { index, .. }
            | Msg::SetSelection { index, .. }
            | Msg::ToggleSpan { index, .. }
            | Msg::ToggleParagraph { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Fill in values the message leaves to configuration
    pub fn with_config_defaults(self, config: &PaperConfig) -> Self {
        match self {
            Msg::AddImage {
                index,
                path,
                width_percentage: None,
            } => Msg::AddImage {
                index,
                path,
                width_percentage: Some(config.default_image_width),
            },
            msg => msg,
        }
    }
}
