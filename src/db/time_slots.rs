//! Time-slot side table, keyed by event id.
//!
//! Kept in its own storage key so the event records stay small and slots
//! remain an optional overlay. The store has no referential-integrity
//! concept; the events repository cascades deletions into this table.

use super::db::{decode_or, Db};
use crate::libs::time_slot::TimeSlot;
use anyhow::Result;
use std::collections::BTreeMap;

pub const TIME_SLOTS_KEY: &str = "adm_event_time_slots_v1";

pub struct TimeSlots {
    db: Db,
}

impl TimeSlots {
    pub fn new() -> Result<TimeSlots> {
        Ok(TimeSlots { db: Db::new()? })
    }

    pub fn get_all(&self) -> Result<BTreeMap<String, TimeSlot>> {
        Ok(decode_or(self.db.get(TIME_SLOTS_KEY)?, BTreeMap::new()))
    }

    pub fn get(&self, event_id: &str) -> Result<Option<TimeSlot>> {
        Ok(self.get_all()?.remove(event_id))
    }

    /// Stores the slot for an event. A blank start time is the deletion
    /// path: the entry is removed rather than stored empty.
    pub fn set(&self, event_id: &str, slot: TimeSlot) -> Result<()> {
        let mut all = self.get_all()?;
        if slot.is_blank() {
            all.remove(event_id);
        } else {
            all.insert(event_id.to_string(), slot);
        }
        self.save_all(&all)
    }

    pub fn remove(&self, event_id: &str) -> Result<()> {
        let mut all = self.get_all()?;
        all.remove(event_id);
        self.save_all(&all)
    }

    fn save_all(&self, all: &BTreeMap<String, TimeSlot>) -> Result<()> {
        self.db.set(TIME_SLOTS_KEY, &serde_json::to_string(all)?)
    }
}
