//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=paper::rich::transform=trace` - per-range decisions
//! - `RUST_LOG=paper::update=debug` - one line per message
//!
//! # Log Files
//!
//! Logs are written to `~/.config/paper/logs/paper.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::rich::{EditorValue, Selection};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. Console output goes
/// to stderr so it never mixes with a command's printed result.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "paper.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of an editor value for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSnapshot {
    pub text_len: usize,
    pub selection: Selection,
    pub spans: usize,
    pub paragraphs: usize,
    pub annotations: usize,
}

impl ValueSnapshot {
    pub fn from_value(value: &EditorValue) -> Self {
        let styled = &value.styled_text;
        Self {
            text_len: styled.len(),
            selection: value.selection,
            spans: styled.span_styles().len(),
            paragraphs: styled.paragraph_styles().len(),
            annotations: styled.annotations().len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ValueSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.text_len != other.text_len {
            changes.push(format!("len: {} → {}", self.text_len, other.text_len));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {}..{} → {}..{}",
                self.selection.anchor,
                self.selection.head,
                other.selection.anchor,
                other.selection.head
            ));
        }
        for (label, before, after) in [
            ("spans", self.spans, other.spans),
            ("paragraphs", self.paragraphs, other.paragraphs),
            ("annotations", self.annotations, other.annotations),
        ] {
            if before != after {
                changes.push(format!("{}: {} → {}", label, before, after));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let value = EditorValue::new("abc");
        let snapshot = ValueSnapshot::from_value(&value);
        assert_eq!(snapshot.diff(&snapshot.clone()), None);
    }

    #[test]
    fn test_diff_describes_changes() {
        let before = ValueSnapshot::from_value(&EditorValue::new("ab"));
        let after = ValueSnapshot::from_value(
            &EditorValue::new("abc").with_selection(Selection::collapsed(3)),
        );
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("len: 2 → 3; selection: 0..0 → 3..3")
        );
    }
}
