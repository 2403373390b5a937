//! User-facing strings, English and Bangla.
//!
//! All text shown to the user resolves through [`t`]: the requested
//! language's table first, then the English table, then the key itself
//! verbatim. The function is total; it never fails and never returns an
//! empty string for a non-empty key.

pub mod bn;
pub mod en;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Bn,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Bn => "bn",
        }
    }

    pub fn from_key(raw: &str) -> Option<Lang> {
        match raw {
            "en" => Some(Lang::En),
            "bn" => Some(Lang::Bn),
            _ => None,
        }
    }
}

/// Localized string for `key`, falling back to English and finally to the
/// key itself.
pub fn t(lang: Lang, key: &str) -> String {
    let primary = match lang {
        Lang::En => en::lookup(key),
        Lang::Bn => bn::lookup(key),
    };
    primary
        .or_else(|| en::lookup(key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

// Convenience wrappers for common message patterns
pub fn success(msg: &str) -> String {
    format!("✅ {}", msg)
}

pub fn error(msg: &str) -> String {
    format!("❌ {}", msg)
}

pub fn info(msg: &str) -> String {
    format!("ℹ️  {}", msg)
}
