//! To-dos repository: one JSON array under `adm_todos`.

use super::db::{decode_or, Db};
use crate::libs::todo::Todo;
use anyhow::Result;

pub const TODOS_KEY: &str = "adm_todos";

pub struct Todos {
    db: Db,
}

impl Todos {
    pub fn new() -> Result<Todos> {
        Ok(Todos { db: Db::new()? })
    }

    pub fn get_all(&self) -> Result<Vec<Todo>> {
        Ok(decode_or(self.db.get(TODOS_KEY)?, Vec::new()))
    }

    pub fn save_all(&self, todos: &[Todo]) -> Result<()> {
        self.db.set(TODOS_KEY, &serde_json::to_string(todos)?)
    }
}
