//! Update function for the Elm-style architecture
//!
//! All note changes flow through [`update`]. It takes the note by `&mut`, so
//! edits are applied one at a time by whoever owns the note.

use tracing::{debug, span, Level};

use crate::error::Result;
use crate::messages::Msg;
use crate::note::{Note, NoteImage};
use crate::tracing::ValueSnapshot;

/// Main update function - logs and dispatches
pub fn update(note: &mut Note, msg: Msg) -> Result<()> {
    let msg_name = msg.name();
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let text_index = msg.text_index();
    let before = text_index
        .and_then(|index| note.text(index).ok())
        .map(ValueSnapshot::from_value);

    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(note, msg);

    if let (Some(before), Some(index)) = (&before, text_index) {
        if let Ok(value) = note.text(index) {
            if let Some(diff) = before.diff(&ValueSnapshot::from_value(value)) {
                debug!(target: "value", index, %diff, "state changed");
            }
        }
    }

    if let Err(ref e) = result {
        debug!(msg = %msg_name, error = %e, "rejected");
    }

    result
}

fn update_inner(note: &mut Note, msg: Msg) -> Result<()> {
    match msg {
        Msg::SetHeading(heading) => {
            note.heading = heading;
            Ok(())
        }
        Msg::SelectItem(index) => note.select(index),
        Msg::EditText {
            index,
            text,
            selection,
            composition,
        } => note.edit_text(index, &text, selection, composition),
        Msg::SetSelection { index, selection } => note.set_selection(index, selection),
        Msg::ToggleSpan { index, format } => note.toggle_span(index, format),
        Msg::ToggleParagraph { index, format } => note.toggle_paragraph(index, format),
        Msg::AddImage {
            index,
            path,
            width_percentage,
        } => {
            let image = NoteImage {
                path,
                width_percentage: width_percentage.unwrap_or(NoteImage::DEFAULT_WIDTH),
            };
            note.add_image(index, image)
        }
        Msg::UpdateImage {
            index,
            path,
            width_percentage,
        } => note.update_image(index, path, width_percentage),
        Msg::RemoveImage { index } => note.remove_image(index).map(|_| ()),
    }
}
