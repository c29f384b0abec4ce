//! Command-line argument parsing for the script runner
//!
//! Supports:
//! - Replaying a YAML edit script against a new or saved note
//! - Printing the resulting note, or its render segments

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::PaperConfig;
use crate::messages::Msg;
use crate::note::{BodyItem, Note, NoteImage};
use crate::rich::{segments, Segment};

/// Replay note edits from a script
#[derive(Parser, Debug)]
#[command(name = "paper", version, about = "Replay rich-text note edits")]
pub struct CliArgs {
    /// YAML file holding a list of messages
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Start from this note (JSON) instead of an empty one
    #[arg(long, value_name = "FILE")]
    pub note: Option<PathBuf>,

    /// Config file to use instead of the one in the config directory
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// What to print once the script has run
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The whole note as JSON
    Json,
    /// Render segments for each body item, as JSON
    Segments,
}

/// One body item as a renderer sees it
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedItem<'a> {
    Text {
        index: usize,
        segments: Vec<Segment>,
    },
    Image {
        index: usize,
        #[serde(flatten)]
        image: &'a NoteImage,
    },
}

impl CliArgs {
    pub fn load_config(&self) -> Result<PaperConfig> {
        match &self.config {
            Some(path) => PaperConfig::load_from(path).context("Failed to load --config"),
            None => Ok(PaperConfig::load()),
        }
    }

    /// The note named by `--note`, or a new one stamped with `now`
    pub fn load_note(&self, now: u64) -> Result<Note> {
        let Some(path) = &self.note else {
            return Ok(Note::new(now));
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read note {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse note {}", path.display()))
    }
}

pub fn load_script(path: &Path) -> Result<Vec<Msg>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse script {}", path.display()))
}

pub fn rendered_items(note: &Note) -> Vec<RenderedItem<'_>> {
    note.body()
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            BodyItem::Text(value) => RenderedItem::Text {
                index,
                segments: segments(&value.styled_text),
            },
            BodyItem::Image(image) => RenderedItem::Image { index, image },
        })
        .collect()
}

pub fn render_output(note: &Note, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(note)?,
        OutputFormat::Segments => serde_json::to_string_pretty(&rendered_items(note))?,
    };
    Ok(out)
}
