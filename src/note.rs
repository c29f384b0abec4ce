//! Note document: a heading plus an ordered body of text and image items.
//!
//! Each text item is its own [`EditorValue`]; images sit between them. The
//! body never ends on an image, so there is always a text item to type into
//! after the last picture.

use serde::{Deserialize, Serialize};

use crate::error::{PaperError, Result};
use crate::format::{ParagraphFormat, SpanFormat};
use crate::rich::{EditorValue, Selection};

/// An image placed in the note body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteImage {
    pub path: String,
    /// Fraction of the page width, `1.0` is full width
    #[serde(default = "NoteImage::default_width")]
    pub width_percentage: f32,
}

impl NoteImage {
    pub const DEFAULT_WIDTH: f32 = 1.0;

    fn default_width() -> f32 {
        Self::DEFAULT_WIDTH
    }

    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            width_percentage: Self::DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyItem {
    Text(EditorValue),
    Image(NoteImage),
}

impl BodyItem {
    pub fn empty_text() -> Self {
        BodyItem::Text(EditorValue::default())
    }

    pub fn as_text(&self) -> Option<&EditorValue> {
        match self {
            BodyItem::Text(value) => Some(value),
            BodyItem::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&NoteImage> {
        match self {
            BodyItem::Image(image) => Some(image),
            BodyItem::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub heading: String,
    /// Creation time, milliseconds since the Unix epoch
    #[serde(default)]
    pub time: u64,
    body: Vec<BodyItem>,
    /// Index of the body item holding focus
    #[serde(default)]
    selected: usize,
}

impl Default for Note {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Note {
    /// An untitled note with one empty text item
    pub fn new(time: u64) -> Self {
        Self {
            heading: String::new(),
            time,
            body: vec![BodyItem::empty_text()],
            selected: 0,
        }
    }

    pub fn body(&self) -> &[BodyItem] {
        &self.body
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn text(&self, index: usize) -> Result<&EditorValue> {
        self.body
            .get(index)
            .and_then(BodyItem::as_text)
            .ok_or(PaperError::NoSuchItem {
                index,
                expected: "text",
            })
    }

    pub fn image(&self, index: usize) -> Result<&NoteImage> {
        self.body
            .get(index)
            .and_then(BodyItem::as_image)
            .ok_or(PaperError::NoSuchItem {
                index,
                expected: "image",
            })
    }

    fn text_mut(&mut self, index: usize) -> Result<&mut EditorValue> {
        match self.body.get_mut(index) {
            Some(BodyItem::Text(value)) => Ok(value),
            _ => Err(PaperError::NoSuchItem {
                index,
                expected: "text",
            }),
        }
    }

    fn image_mut(&mut self, index: usize) -> Result<&mut NoteImage> {
        match self.body.get_mut(index) {
            Some(BodyItem::Image(image)) => Ok(image),
            _ => Err(PaperError::NoSuchItem {
                index,
                expected: "image",
            }),
        }
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.body.len() {
            return Err(PaperError::NoSuchItem {
                index,
                expected: "body",
            });
        }
        self.selected = index;
        Ok(())
    }

    /// Replace a text item's content with what the host now shows.
    /// Focus moves to the edited item.
    pub fn edit_text(
        &mut self,
        index: usize,
        text: &str,
        selection: Selection,
        composition: Option<Selection>,
    ) -> Result<()> {
        let value = self.text_mut(index)?;
        *value = value.apply_text_change(text, selection, composition)?;
        self.selected = index;
        Ok(())
    }

    pub fn set_selection(&mut self, index: usize, selection: Selection) -> Result<()> {
        let value = self.text_mut(index)?;
        *value = value.with_selection(selection);
        self.selected = index;
        Ok(())
    }

    pub fn toggle_span(&mut self, index: usize, format: SpanFormat) -> Result<()> {
        let value = self.text_mut(index)?;
        *value = value.toggle_span(|| format.style(), &format)?;
        self.selected = index;
        Ok(())
    }

    pub fn toggle_paragraph(&mut self, index: usize, format: ParagraphFormat) -> Result<()> {
        let value = self.text_mut(index)?;
        *value = value.toggle_paragraph(|| format.style(), &format)?;
        self.selected = index;
        Ok(())
    }

    /// Insert an image before `index`. An image landing at the end of the
    /// body gets an empty text item after it.
    pub fn add_image(&mut self, index: usize, image: NoteImage) -> Result<()> {
        if index > self.body.len() {
            return Err(PaperError::NoSuchItem {
                index,
                expected: "body",
            });
        }

        self.body.insert(index, BodyItem::Image(image));
        if self.body.len() - 1 <= index {
            self.body.push(BodyItem::empty_text());
        }
        if self.selected >= index {
            self.selected += 1;
        }
        Ok(())
    }

    pub fn update_image(&mut self, index: usize, path: String, width_percentage: f32) -> Result<()> {
        let image = self.image_mut(index)?;
        image.path = path;
        image.width_percentage = width_percentage;
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) -> Result<NoteImage> {
        let image = self.image(index)?.clone();
        self.body.remove(index);

        if self.body.is_empty() {
            self.body.push(BodyItem::empty_text());
        }
        if self.selected > index {
            self.selected -= 1;
        }
        self.selected = self.selected.min(self.body.len() - 1);
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_has_one_empty_text_item() {
        let note = Note::new(42);
        assert_eq!(note.time, 42);
        assert_eq!(note.body(), &[BodyItem::empty_text()]);
        assert_eq!(note.selected(), 0);
    }

    #[test]
    fn test_image_at_end_appends_text_item() {
        let mut note = Note::default();
        note.add_image(1, NoteImage::new("cat.png")).unwrap();

        assert_eq!(note.body().len(), 3);
        assert!(note.body()[1].as_image().is_some());
        assert!(note.body()[2].as_text().is_some());
    }

    #[test]
    fn test_image_in_middle_does_not_append() {
        let mut note = Note::default();
        note.add_image(0, NoteImage::new("cat.png")).unwrap();

        assert_eq!(note.body().len(), 2);
        assert!(note.body()[0].as_image().is_some());
        assert!(note.body()[1].as_text().is_some());
        assert_eq!(note.selected(), 1);
    }

    #[test]
    fn test_add_image_past_end_fails() {
        let mut note = Note::default();
        assert!(matches!(
            note.add_image(5, NoteImage::new("x.png")),
            Err(PaperError::NoSuchItem { index: 5, .. })
        ));
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let mut note = Note::default();
        assert!(note.update_image(0, "x.png".into(), 0.5).is_err());
        assert!(note.remove_image(0).is_err());

        note.add_image(1, NoteImage::new("cat.png")).unwrap();
        assert!(note
            .edit_text(1, "x", Selection::collapsed(1), None)
            .is_err());
    }

    #[test]
    fn test_remove_image_adjusts_selection() {
        let mut note = Note::default();
        note.add_image(1, NoteImage::new("cat.png")).unwrap();
        note.select(2).unwrap();

        let removed = note.remove_image(1).unwrap();
        assert_eq!(removed.path, "cat.png");
        assert_eq!(note.body().len(), 2);
        assert_eq!(note.selected(), 1);
    }

    #[test]
    fn test_edit_selects_item() {
        let mut note = Note::default();
        note.add_image(0, NoteImage::new("cat.png")).unwrap();
        note.add_image(0, NoteImage::new("dog.png")).unwrap();
        note.select(0).unwrap();

        note.edit_text(2, "hi", Selection::collapsed(2), None).unwrap();
        assert_eq!(note.selected(), 2);
        assert_eq!(note.text(2).unwrap().text(), "hi");
    }

    #[test]
    fn test_note_json_shape() {
        let mut note = Note::new(7);
        note.add_image(1, NoteImage::new("cat.png")).unwrap();

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["body"][0]["type"], "text");
        assert_eq!(json["body"][1]["type"], "image");
        assert_eq!(json["body"][1]["path"], "cat.png");

        let back: Note = serde_json::from_value(json).unwrap();
        assert_eq!(back, note);
    }
}
