//! Optional start/end/note overlay attached to an event by id.
//!
//! A slot without a start time does not exist: writing one is the deletion
//! path, and the repository never stores an empty record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TimeSlot {
    pub fn new(start: &str, end: Option<&str>, note: Option<&str>) -> Self {
        TimeSlot {
            start: start.trim().to_string(),
            end: end.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()),
            note: note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        }
    }

    /// A blank start means "no slot".
    pub fn is_blank(&self) -> bool {
        self.start.trim().is_empty()
    }
}
