//! Dashboard computations: the filtered event table and the latest-news
//! marquee. Pure functions over event collections; storage access and
//! rendering stay with the callers.

use crate::libs::event::{AdmissionEvent, Category};
use crate::libs::messages::{t, Lang};
use chrono::NaiveDate;

/// How many events the marquee shows before the sequence repeats.
const MARQUEE_ITEMS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

/// Events matching the category filter AND the free-text query (empty query
/// matches everything; otherwise a case-insensitive substring of the title
/// or notes), sorted ascending by date. The sort is stable, so events on
/// the same date keep their stored order.
pub fn filter_events(
    events: &[AdmissionEvent],
    filter: CategoryFilter,
    query: &str,
) -> Vec<AdmissionEvent> {
    let query = query.trim().to_lowercase();
    let mut matched: Vec<AdmissionEvent> = events
        .iter()
        .filter(|e| {
            let category_ok = match filter {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => e.category == category,
            };
            let query_ok = query.is_empty()
                || e.title.to_lowercase().contains(&query)
                || e.notes
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&query);
            category_ok && query_ok
        })
        .cloned()
        .collect();
    matched.sort_by_key(|e| e.date);
    matched
}

/// The three most recently created events, newest first, with the sequence
/// duplicated once so a scrolling renderer can loop seamlessly.
pub fn latest_news(events: &[AdmissionEvent]) -> Vec<AdmissionEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(MARQUEE_ITEMS);

    let mut marquee = sorted.clone();
    marquee.extend(sorted);
    marquee
}

/// Marquee line for one event: its notes when present, the localized
/// "exam has ended" notice for past exams and results, or the bare title.
pub fn marquee_text(event: &AdmissionEvent, today: NaiveDate, lang: Lang) -> String {
    let note = event.notes.as_deref().unwrap_or_default().trim();
    if !note.is_empty() {
        return format!("{}: {}", event.title, note);
    }

    if matches!(event.category, Category::Exam | Category::Result) && event.date < today {
        return format!("{} — {}", event.title, t(lang, "examHasEnded"));
    }

    event.title.clone()
}
