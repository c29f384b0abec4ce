//! Rich-text value model: text annotated with overlapping style ranges.
//!
//! The hard part is keeping ranges attached to the right characters while the
//! text is edited, without re-deriving styles on every keystroke.
//!
//! # Architecture
//!
//! The core components, leaf first:
//!
//! - [`StyleRange`]: a style payload over an interval, with per-boundary inclusivity
//! - [`StyledText`]: text plus span, paragraph and annotation ranges, bounds-checked
//! - [`classify`]: did an edit change the text, and where was text added and removed
//! - [`transform`]: moves, grows, trims and drops ranges for a classified edit
//! - [`toggle`]: style activity over a selection, and adding or removing a style
//! - [`EditorValue`]: styled text + selection + composition, the host-facing snapshot
//! - [`render`]: flattens a styled text into non-overlapping segments
//!
//! # Example
//!
//! ```
//! use paper::rich::{EditorValue, Selection};
//! use paper::style::{FontWeight, SpanStyle};
//!
//! let is_bold = |s: &SpanStyle| s.font_weight == Some(FontWeight::BOLD);
//! let bold = || SpanStyle { font_weight: Some(FontWeight::BOLD), ..Default::default() };
//!
//! // Select "hello" and make it bold
//! let value = EditorValue::new("hello world").with_selection(Selection::new(0, 5));
//! let value = value.toggle_span(bold, &is_bold).unwrap();
//!
//! // Type "!" at the end of the bold run: the span grows
//! let value = value.with_selection(Selection::collapsed(5));
//! let value = value
//!     .apply_text_change("hello! world", Selection::collapsed(6), None)
//!     .unwrap();
//!
//! assert_eq!(value.styled_text.span_styles()[0].end(), 6);
//! ```

pub mod classify;
mod range;
pub mod render;
mod selection;
mod styled_text;
pub mod toggle;
pub mod transform;
mod value;

// Re-export main types
pub use classify::{classify_edit, has_text_changed, EditDelta};
pub use range::StyleRange;
pub use render::{segments, Segment};
pub use selection::Selection;
pub use styled_text::StyledText;
pub use toggle::StyleMatcher;
pub use transform::{
    intersect_len, offset_ranges, offset_ranges_for_selection_change, paragraph_on_delete_start,
    span_on_delete_start, OnDeleteStart,
};
pub use value::EditorValue;
