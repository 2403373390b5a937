//! Time-of-day formatting for display.
//!
//! Slots store 24-hour "HH:MM" strings; everything the user sees is
//! 12-hour with an AM/PM suffix. Formatting never fails: an empty or
//! malformed input yields an empty string.
//!
//! ## Format Specifications
//!
//! - Hour 0 maps to 12 AM, hour 12 to 12 PM
//! - The 12-hour hour is not zero-padded; minutes pass through as stored
//! - A slot with only a start renders as that single time; with both ends,
//!   as "start – end"
//!
//! ## Examples
//!
//! ```rust
//! use admcal::libs::formatter::to_12_hour;
//!
//! assert_eq!(to_12_hour("00:30"), "12:30 AM");
//! assert_eq!(to_12_hour("13:05"), "1:05 PM");
//! assert_eq!(to_12_hour(""), "");
//! ```

use crate::libs::time_slot::TimeSlot;

/// Converts a 24-hour "HH:MM" string to 12-hour form with an AM/PM suffix.
/// Returns an empty string when the input has no colon or a non-numeric
/// hour.
pub fn to_12_hour(hhmm: &str) -> String {
    let Some((hour_part, minute_part)) = hhmm.split_once(':') else {
        return String::new();
    };
    let Ok(hour) = hour_part.trim().parse::<u32>() else {
        return String::new();
    };

    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = (hour + 11) % 12 + 1;
    format!("{}:{} {}", hour12, minute_part, suffix)
}

/// Renders a slot as "start – end", or the start alone when there is no
/// end. A blank slot renders as nothing.
pub fn format_slot(slot: &TimeSlot) -> String {
    if slot.is_blank() {
        return String::new();
    }
    let start = to_12_hour(&slot.start);
    match slot.end.as_deref().filter(|e| !e.trim().is_empty()) {
        Some(end) => format!("{} – {}", start, to_12_hour(end)),
        None => start,
    }
}
