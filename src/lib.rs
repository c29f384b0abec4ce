//! Paper - rich-text notes with style ranges that follow the text
//!
//! This crate provides the styled text model, a toggle engine for span and
//! paragraph formats, and an Elm-style note document driven by messages.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod format;
pub mod messages;
pub mod note;
pub mod rich;
pub mod style;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use config::PaperConfig;
pub use error::{PaperError, Result};
pub use format::{ParagraphFormat, SpanFormat};
pub use messages::Msg;
pub use note::{BodyItem, Note, NoteImage};
pub use rich::{EditorValue, Selection, StyleRange, StyledText};
