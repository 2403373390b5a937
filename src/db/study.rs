//! Study sessions repository: one JSON array under `adm_study`.

use super::db::{decode_or, Db};
use crate::libs::study::StudySession;
use anyhow::Result;

pub const STUDY_KEY: &str = "adm_study";

pub struct StudySessions {
    db: Db,
}

impl StudySessions {
    pub fn new() -> Result<StudySessions> {
        Ok(StudySessions { db: Db::new()? })
    }

    pub fn get_all(&self) -> Result<Vec<StudySession>> {
        Ok(decode_or(self.db.get(STUDY_KEY)?, Vec::new()))
    }

    pub fn save_all(&self, sessions: &[StudySession]) -> Result<()> {
        self.db.set(STUDY_KEY, &serde_json::to_string(sessions)?)
    }
}
