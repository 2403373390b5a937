//! Day-count countdown labels.
//!
//! Both sides of the arithmetic are calendar dates, so the difference is
//! already normalized to midnight; the caller supplies "today" explicitly
//! and re-evaluates on whatever tick it renders at, which is what makes the
//! label flip right after local midnight.

use crate::libs::messages::{t, Lang};
use chrono::NaiveDate;

/// Signed whole days from `today` to `target`. Zero and below mean the
/// date has arrived or passed.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// "{N} Days left", or the localized "Time Up" once the day count drops to
/// zero or below.
pub fn label(target: NaiveDate, today: NaiveDate, lang: Lang) -> String {
    let days = days_until(target, today);
    if days <= 0 {
        t(lang, "timeUp")
    } else {
        format!("{} {}", days, t(lang, "daysLeft"))
    }
}
