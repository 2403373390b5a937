//! Resolution of the platform-specific application data directory.
//!
//! Follows the same conventions as the rest of the OS: `LOCALAPPDATA` on
//! Windows, `Library/Application Support` on macOS, and `~/.local/share`
//! elsewhere. The directory is created on first use.

use crate::{APP_NAME, VENDOR_NAME};
use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the directory all application data lives in, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let base_path = match OS {
        "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
        "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
        _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
    };
    let dir = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Full path of a file inside the application data directory.
pub fn data_file(file_name: &str) -> Result<PathBuf> {
    Ok(data_dir()?.join(file_name))
}
