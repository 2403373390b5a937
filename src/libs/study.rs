//! Study session and subject models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged stretch of studying. `subject_id` may dangle after the
/// subject is deleted; readers substitute a placeholder label instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    #[serde(default)]
    pub subject_id: String,
    #[serde(default)]
    pub date: NaiveDate,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl Subject {
    /// The synthesized default; present whenever the stored collection is
    /// absent or empty, but never written back.
    pub fn general() -> Subject {
        Subject {
            id: "1".to_string(),
            name: "General".to_string(),
            color: "#6366f1".to_string(),
        }
    }
}
