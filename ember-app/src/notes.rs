//! Shift note board
//!
//! Purely local annotations, newest first. No remote persistence.

use chrono::Utc;
use shared::models::{NoteTag, ShiftNote};
use shared::{AppError, AppResult};
use uuid::Uuid;

/// In-memory note list owned by the operations screen
#[derive(Debug, Default)]
pub struct NoteBoard {
    notes: Vec<ShiftNote>,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes, newest first
    pub fn notes(&self) -> &[ShiftNote] {
        &self.notes
    }

    /// Add a note; empty or whitespace-only text is rejected
    pub fn submit(&mut self, text: &str, tag: NoteTag) -> AppResult<&ShiftNote> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Note text is required"));
        }

        let note = ShiftNote {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            text: text.to_string(),
            tag,
        };
        self.notes.insert(0, note);
        Ok(&self.notes[0])
    }

    /// Delete a note by id
    pub fn remove(&mut self, id: &str) -> AppResult<()> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Err(AppError::not_found("Note"));
        }
        Ok(())
    }
}
