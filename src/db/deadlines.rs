//! Deadlines repository: one JSON array under `adm_deadlines`.

use super::db::{decode_or, Db};
use crate::libs::deadline::Deadline;
use anyhow::Result;

pub const DEADLINES_KEY: &str = "adm_deadlines";

pub struct Deadlines {
    db: Db,
}

impl Deadlines {
    pub fn new() -> Result<Deadlines> {
        Ok(Deadlines { db: Db::new()? })
    }

    pub fn get_all(&self) -> Result<Vec<Deadline>> {
        Ok(decode_or(self.db.get(DEADLINES_KEY)?, Vec::new()))
    }

    pub fn save_all(&self, deadlines: &[Deadline]) -> Result<()> {
        self.db.set(DEADLINES_KEY, &serde_json::to_string(deadlines)?)
    }
}
