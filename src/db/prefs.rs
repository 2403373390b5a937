//! Theme and language preferences.
//!
//! Each lives under its own key as a bare literal, not JSON. Reads validate
//! against the closed enums and substitute the default for anything else,
//! including an absent key. Writes go through immediately.

use super::db::Db;
use crate::libs::messages::Lang;
use crate::libs::prefs::Theme;
use anyhow::Result;

pub const THEME_KEY: &str = "adm_theme";
pub const LANG_KEY: &str = "adm_lang";

pub struct Prefs {
    db: Db,
}

impl Prefs {
    pub fn new() -> Result<Prefs> {
        Ok(Prefs { db: Db::new()? })
    }

    pub fn load_theme(&self) -> Result<Theme> {
        Ok(self
            .db
            .get(THEME_KEY)?
            .and_then(|raw| Theme::from_key(&raw))
            .unwrap_or_default())
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.db.set(THEME_KEY, theme.as_str())
    }

    pub fn load_lang(&self) -> Result<Lang> {
        Ok(self
            .db
            .get(LANG_KEY)?
            .and_then(|raw| Lang::from_key(&raw))
            .unwrap_or_default())
    }

    pub fn save_lang(&self, lang: Lang) -> Result<()> {
        self.db.set(LANG_KEY, lang.as_str())
    }
}
