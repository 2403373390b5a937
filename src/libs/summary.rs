//! Study aggregates for the tracker page.

use crate::libs::messages::{t, Lang};
use crate::libs::study::{StudySession, Subject};
use chrono::{Duration, NaiveDate};

/// The weekly chart's scale never drops below one hour, so quiet weeks
/// still render with a sane baseline.
pub const CHART_FLOOR: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub minutes: u32,
}

/// Total minutes per day over the 7 days ending `today`, inclusive, oldest
/// first. Days without sessions contribute zero-minute buckets.
pub fn week_study(sessions: &[StudySession], today: NaiveDate) -> Vec<DayTotal> {
    (0..7i64)
        .map(|i| {
            let date = today - Duration::days(6 - i);
            let minutes = sessions
                .iter()
                .filter(|s| s.date == date)
                .map(|s| s.minutes)
                .sum();
            DayTotal { date, minutes }
        })
        .collect()
}

/// Vertical scale for the weekly chart: the largest daily total, floored
/// at [`CHART_FLOOR`].
pub fn chart_ceiling(days: &[DayTotal]) -> u32 {
    days.iter()
        .map(|d| d.minutes)
        .max()
        .unwrap_or(0)
        .max(CHART_FLOOR)
}

pub fn today_total(sessions: &[StudySession], today: NaiveDate) -> u32 {
    sessions
        .iter()
        .filter(|s| s.date == today)
        .map(|s| s.minutes)
        .sum()
}

pub fn total_minutes(sessions: &[StudySession]) -> u32 {
    sessions.iter().map(|s| s.minutes).sum()
}

/// Subject name for display. A dangling subject id renders the localized
/// placeholder instead of failing.
pub fn subject_label(subjects: &[Subject], subject_id: &str, lang: Lang) -> String {
    subjects
        .iter()
        .find(|s| s.id == subject_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| t(lang, "deletedSubject"))
}
