//! Shift Note Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Note tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteTag {
    Staffing,
    Quality,
    Ops,
    Supply,
}

impl NoteTag {
    /// All tags, in display order
    pub const ALL: [NoteTag; 4] = [Self::Staffing, Self::Quality, Self::Ops, Self::Supply];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Staffing => "Staffing",
            Self::Quality => "Quality",
            Self::Ops => "Ops",
            Self::Supply => "Supply",
        }
    }
}

/// Free-text operational annotation, local to the device
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftNote {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Non-empty after trimming, enforced at submit time
    pub text: String,
    pub tag: NoteTag,
}
