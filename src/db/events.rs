//! Admission events repository.
//!
//! The collection lives as one JSON array under `adm_events`. The very
//! first read (storage key entirely absent) seeds the demo record and
//! writes it back; a key holding an empty array is already initialized and
//! is never re-seeded.

use super::db::{decode_or, Db};
use super::time_slots::TimeSlots;
use crate::libs::event::{AdmissionEvent, Category, EventDraft, EventError};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

pub const EVENTS_KEY: &str = "adm_events";

pub struct Events {
    db: Db,
}

impl Events {
    pub fn new() -> Result<Events> {
        Ok(Events { db: Db::new()? })
    }

    /// All events in storage order. Seeds the demo record on the first-ever
    /// read; decodes corrupt data as an empty collection.
    pub fn get_all(&self) -> Result<Vec<AdmissionEvent>> {
        match self.db.get(EVENTS_KEY)? {
            Some(raw) => Ok(decode_or(Some(raw), Vec::new())),
            None => {
                debug!("events key absent, seeding demo data");
                let seed = demo_events();
                self.save_all(&seed)?;
                Ok(seed)
            }
        }
    }

    /// Full overwrite. Callers read-modify-write the whole collection;
    /// concurrent writers resolve as last-write-wins.
    pub fn save_all(&self, events: &[AdmissionEvent]) -> Result<()> {
        self.db.set(EVENTS_KEY, &serde_json::to_string(events)?)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<AdmissionEvent>> {
        Ok(self.get_all()?.into_iter().find(|e| e.id == id))
    }

    /// Insert or update. With an id, the existing record is replaced in
    /// place, keeping its position and creation timestamp; an unknown id is
    /// a hard error. Without one, a fresh id is generated and the event
    /// appended. Returns the record as stored.
    pub fn upsert(&self, draft: EventDraft, id: Option<&str>) -> Result<AdmissionEvent> {
        draft.validate()?;
        let mut events = self.get_all()?;

        let stored = match id {
            Some(id) => {
                let index = events
                    .iter()
                    .position(|e| e.id == id)
                    .ok_or_else(|| EventError::EventNotFound(id.to_string()))?;
                let event = draft.into_event(id.to_string(), events[index].created_at);
                events[index] = event.clone();
                event
            }
            None => {
                let event = draft.into_event(Uuid::new_v4().to_string(), Utc::now());
                events.push(event.clone());
                event
            }
        };

        self.save_all(&events)?;
        Ok(stored)
    }

    /// Removes the event if present (absent id is a no-op) and cascades to
    /// its time slot, so no slot ever points at a nonexistent event.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut events = self.get_all()?;
        events.retain(|e| e.id != id);
        self.save_all(&events)?;
        TimeSlots::new()?.remove(id)?;
        Ok(())
    }
}

fn demo_events() -> Vec<AdmissionEvent> {
    vec![AdmissionEvent {
        id: "1".to_string(),
        title: "Dhaka University Admission 2025".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 5, 15).unwrap_or_default(),
        category: Category::Admission,
        eligibility: "HSC Passed with GPA 8.00 (Combined)".to_string(),
        website_link: "https://admission.eis.du.ac.bd/".to_string(),
        admit_card_link: "https://admission.eis.du.ac.bd/login".to_string(),
        notes: Some("Unit A and Unit B dates are slightly different.".to_string()),
        created_at: Utc::now(),
    }]
}
