//! Subjects repository: one JSON array under `adm_subjects`.
//!
//! The collection is never empty from a reader's point of view: when
//! storage holds nothing (absent key or empty array), a "General" subject
//! is synthesized. It is not written back, so an intentionally emptied
//! collection stays empty in storage.

use super::db::{decode_or, Db};
use crate::libs::study::Subject;
use anyhow::Result;

pub const SUBJECTS_KEY: &str = "adm_subjects";

pub struct Subjects {
    db: Db,
}

impl Subjects {
    pub fn new() -> Result<Subjects> {
        Ok(Subjects { db: Db::new()? })
    }

    pub fn get_all(&self) -> Result<Vec<Subject>> {
        let subjects: Vec<Subject> = decode_or(self.db.get(SUBJECTS_KEY)?, Vec::new());
        if subjects.is_empty() {
            return Ok(vec![Subject::general()]);
        }
        Ok(subjects)
    }

    pub fn save_all(&self, subjects: &[Subject]) -> Result<()> {
        self.db.set(SUBJECTS_KEY, &serde_json::to_string(subjects)?)
    }
}
