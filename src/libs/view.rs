//! Terminal table rendering for every list the commands print.

use crate::libs::countdown;
use crate::libs::deadline::Deadline;
use crate::libs::event::AdmissionEvent;
use crate::libs::formatter::format_slot;
use crate::libs::messages::{info, t, Lang};
use crate::libs::study::{StudySession, Subject};
use crate::libs::summary::{chart_ceiling, subject_label, DayTotal};
use crate::libs::time_slot::TimeSlot;
use crate::libs::todo::Todo;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};
use std::collections::BTreeMap;

const CHART_WIDTH: usize = 30;
const URGENT_DAYS: i64 = 3;

pub struct View {}

impl View {
    pub fn events(
        events: &[AdmissionEvent],
        slots: &BTreeMap<String, TimeSlot>,
        today: NaiveDate,
        lang: Lang,
    ) -> Result<()> {
        if events.is_empty() {
            println!("{}", info(&t(lang, "noData")));
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row![
            "ID",
            t(lang, "university"),
            t(lang, "category"),
            t(lang, "examDate"),
            t(lang, "time"),
            t(lang, "timeLeft")
        ]);
        for event in events {
            let slot_text = slots
                .get(&event.id)
                .map(format_slot)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| t(lang, "timeNotSet"));
            table.add_row(row![
                event.id,
                event.title,
                event.category,
                event.date,
                slot_text,
                countdown::label(event.date, today, lang)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn event(event: &AdmissionEvent, slot: Option<&TimeSlot>, lang: Lang) -> Result<()> {
        let admit_card = if event.admit_card_link.is_empty() {
            t(lang, "comingSoon")
        } else {
            event.admit_card_link.clone()
        };
        let slot_text = slot
            .map(format_slot)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| t(lang, "timeNotSet"));

        let mut table = Table::new();
        table.add_row(row![t(lang, "title"), event.title]);
        table.add_row(row![t(lang, "date"), event.date]);
        table.add_row(row![t(lang, "category"), event.category]);
        table.add_row(row![t(lang, "eligibility"), event.eligibility]);
        table.add_row(row![t(lang, "website"), event.website_link]);
        table.add_row(row![t(lang, "admitCard"), admit_card]);
        table.add_row(row![t(lang, "time"), slot_text]);
        table.add_row(row![
            t(lang, "notes"),
            event.notes.as_deref().unwrap_or_default()
        ]);
        table.printstd();

        Ok(())
    }

    pub fn sessions(
        sessions: &[StudySession],
        subjects: &[Subject],
        lang: Lang,
    ) -> Result<()> {
        if sessions.is_empty() {
            println!("{}", info(&t(lang, "noData")));
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row![
            t(lang, "date"),
            t(lang, "subject"),
            t(lang, "time"),
            t(lang, "notes")
        ]);
        for session in sessions {
            table.add_row(row![
                session.date,
                subject_label(subjects, &session.subject_id, lang),
                format!("{} {}", session.minutes, t(lang, "mins")),
                session.notes
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn todos(todos: &[Todo], lang: Lang) -> Result<()> {
        if todos.is_empty() {
            println!("{}", info(&t(lang, "noData")));
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row!["", "ID", t(lang, "date"), t(lang, "title")]);
        for todo in todos {
            let mark = if todo.completed { "✔" } else { "○" };
            table.add_row(row![mark, todo.id, todo.date, todo.text]);
        }
        table.printstd();

        Ok(())
    }

    pub fn deadlines(deadlines: &[Deadline], today: NaiveDate, lang: Lang) -> Result<()> {
        if deadlines.is_empty() {
            println!("{}", info(&t(lang, "noData")));
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row![
            "ID",
            t(lang, "priority"),
            t(lang, "title"),
            t(lang, "date"),
            t(lang, "timeLeft")
        ]);
        for deadline in deadlines {
            let days = countdown::days_until(deadline.date, today);
            let marker = if days <= URGENT_DAYS { " ⚠" } else { "" };
            table.add_row(row![
                deadline.id,
                t(lang, deadline.priority.key()),
                deadline.title,
                deadline.date,
                format!("{}{}", countdown::label(deadline.date, today, lang), marker)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Horizontal bar per day, scaled so the widest bar matches the chart
    /// ceiling. Days with any minutes at all get at least one cell.
    pub fn week_chart(days: &[DayTotal], lang: Lang) -> Result<()> {
        let ceiling = chart_ceiling(days) as usize;
        for day in days {
            let minutes = day.minutes as usize;
            let mut filled = minutes * CHART_WIDTH / ceiling;
            if minutes > 0 && filled == 0 {
                filled = 1;
            }
            println!(
                "{} {:<width$} {} {}",
                day.date.format("%d"),
                "█".repeat(filled),
                day.minutes,
                t(lang, "mins"),
                width = CHART_WIDTH
            );
        }

        Ok(())
    }
}
