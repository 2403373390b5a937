//! Persistence layer.
//!
//! A single SQLite-backed key-value store underlies every repository: each
//! collection is one JSON document under a dedicated key, loaded whole on
//! every read and overwritten whole on every save. Corrupt or missing
//! documents decode as empty collections, so the UI keeps working even
//! when stored data does not.

/// Key-value store and the shared fail-soft JSON decode helper.
pub mod db;

/// Admission events, including the first-run demo seed and the time-slot
/// delete cascade.
pub mod events;

/// Per-event time slots, stored separately from the event records.
pub mod time_slots;

/// Study sessions.
pub mod study;

/// Subjects, with the synthesized "General" default.
pub mod subjects;

/// Date-keyed to-dos.
pub mod todos;

/// Deadlines.
pub mod deadlines;

/// Theme and language preferences.
pub mod prefs;
