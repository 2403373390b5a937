//! Admission event model.
//!
//! Events are the central entity: one record per admission announcement,
//! keyed by an opaque string id and carrying a calendar date, a category,
//! and free-text details. Stored records use camelCase field names and the
//! display spelling of categories, so the persisted schema stays stable.

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    #[default]
    Admission,
    Exam,
    Result,
    #[serde(rename = "Admit Card")]
    AdmitCard,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Admission => "Admission",
            Category::Exam => "Exam",
            Category::Result => "Result",
            Category::AdmitCard => "Admit Card",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: NaiveDate,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub admit_card_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum EventError {
    #[error("event not found: {0}")]
    EventNotFound(String),
    #[error("title and date are required")]
    TitleAndDateRequired,
}

/// Everything the user supplies when creating or editing an event. Id and
/// creation timestamp are the repository's business, never the caller's.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub category: Category,
    pub eligibility: String,
    pub website_link: String,
    pub admit_card_link: String,
    pub notes: Option<String>,
}

impl EventDraft {
    /// Rejects drafts missing a title or date. Runs before any write so an
    /// invalid submission never touches the store.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() || self.date.is_none() {
            return Err(EventError::TitleAndDateRequired);
        }
        Ok(())
    }

    pub fn into_event(self, id: String, created_at: DateTime<Utc>) -> AdmissionEvent {
        AdmissionEvent {
            id,
            title: self.title.trim().to_string(),
            date: self.date.unwrap_or_default(),
            category: self.category,
            eligibility: self.eligibility.trim().to_string(),
            website_link: self.website_link.trim().to_string(),
            admit_card_link: self.admit_card_link.trim().to_string(),
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            created_at,
        }
    }
}

impl From<&AdmissionEvent> for EventDraft {
    fn from(event: &AdmissionEvent) -> Self {
        EventDraft {
            title: event.title.clone(),
            date: Some(event.date),
            category: event.category,
            eligibility: event.eligibility.clone(),
            website_link: event.website_link.clone(),
            admit_card_link: event.admit_card_link.clone(),
            notes: event.notes.clone(),
        }
    }
}
