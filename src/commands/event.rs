use crate::db::events::Events;
use crate::db::prefs::Prefs;
use crate::db::time_slots::TimeSlots;
use crate::libs::dashboard::{filter_events, CategoryFilter};
use crate::libs::event::{Category, EventDraft};
use crate::libs::messages::{error, success, t};
use crate::libs::time_slot::TimeSlot;
use crate::libs::view::View;
use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EventArgs {
    #[command(subcommand)]
    command: EventCommand,
}

#[derive(Debug, Subcommand)]
enum EventCommand {
    #[command(about = "Add a new admission event")]
    Add(AddArgs),
    #[command(about = "Edit an event in place, keeping its id and creation time")]
    Edit(EditArgs),
    #[command(about = "List events filtered by category and search text")]
    List(ListArgs),
    #[command(about = "Show one event in full")]
    Show { id: String },
    #[command(about = "Delete an event and its time slot")]
    Delete {
        id: String,
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long, help = "Calendar date, YYYY-MM-DD")]
    date: Option<NaiveDate>,
    #[arg(long, value_enum, default_value_t = Category::Admission)]
    category: Category,
    #[arg(long, default_value = "")]
    eligibility: String,
    #[arg(long, default_value = "")]
    website: String,
    #[arg(long = "admit-card", default_value = "")]
    admit_card: String,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long, help = "Time slot start, 24-hour HH:MM")]
    start: Option<String>,
    #[arg(long, help = "Time slot end, 24-hour HH:MM")]
    end: Option<String>,
    #[arg(long = "time-note")]
    time_note: Option<String>,
}

#[derive(Debug, Args)]
struct EditArgs {
    id: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long, value_enum)]
    category: Option<Category>,
    #[arg(long)]
    eligibility: Option<String>,
    #[arg(long)]
    website: Option<String>,
    #[arg(long = "admit-card")]
    admit_card: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long, help = "Time slot start; an empty value removes the slot")]
    start: Option<String>,
    #[arg(long)]
    end: Option<String>,
    #[arg(long = "time-note")]
    time_note: Option<String>,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, value_enum)]
    category: Option<Category>,
    #[arg(long, default_value = "")]
    search: String,
}

pub fn cmd(event_args: EventArgs) -> Result<()> {
    match event_args.command {
        EventCommand::Add(args) => add(args),
        EventCommand::Edit(args) => edit(args),
        EventCommand::List(args) => list(args),
        EventCommand::Show { id } => show(&id),
        EventCommand::Delete { id, yes } => delete(&id, yes),
    }
}

fn add(args: AddArgs) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let draft = EventDraft {
        title: args.title.unwrap_or_default(),
        date: args.date,
        category: args.category,
        eligibility: args.eligibility,
        website_link: args.website,
        admit_card_link: args.admit_card,
        notes: args.notes,
    };
    if draft.validate().is_err() {
        bail!("{}", t(lang, "titleAndDateRequired"));
    }

    let event = Events::new()?.upsert(draft, None)?;
    if let Some(start) = &args.start {
        TimeSlots::new()?.set(
            &event.id,
            TimeSlot::new(start, args.end.as_deref(), args.time_note.as_deref()),
        )?;
    }

    println!("{}", success(&format!("{} · {}", t(lang, "saved"), event.title)));
    println!("ID: {}", event.id);
    Ok(())
}

fn edit(args: EditArgs) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let events = Events::new()?;
    let Some(existing) = events.get_by_id(&args.id)? else {
        bail!("{}", t(lang, "eventNotFound"));
    };

    let mut draft = EventDraft::from(&existing);
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(date) = args.date {
        draft.date = Some(date);
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(eligibility) = args.eligibility {
        draft.eligibility = eligibility;
    }
    if let Some(website) = args.website {
        draft.website_link = website;
    }
    if let Some(admit_card) = args.admit_card {
        draft.admit_card_link = admit_card;
    }
    if let Some(notes) = args.notes {
        draft.notes = Some(notes);
    }
    if draft.validate().is_err() {
        bail!("{}", t(lang, "titleAndDateRequired"));
    }

    let event = events.upsert(draft, Some(&args.id))?;

    if args.start.is_some() || args.end.is_some() || args.time_note.is_some() {
        let slots = TimeSlots::new()?;
        let current = slots.get(&event.id)?.unwrap_or_default();
        let start = args.start.unwrap_or(current.start);
        let end = args.end.or(current.end);
        let note = args.time_note.or(current.note);
        slots.set(&event.id, TimeSlot::new(&start, end.as_deref(), note.as_deref()))?;
    }

    println!("{}", success(&format!("{} · {}", t(lang, "saved"), event.title)));
    Ok(())
}

fn list(args: ListArgs) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let events = Events::new()?.get_all()?;
    let filter = match args.category {
        Some(category) => CategoryFilter::Only(category),
        None => CategoryFilter::All,
    };
    let filtered = filter_events(&events, filter, &args.search);
    let slots = TimeSlots::new()?.get_all()?;

    View::events(&filtered, &slots, Local::now().date_naive(), lang)
}

fn show(id: &str) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let Some(event) = Events::new()?.get_by_id(id)? else {
        println!("{}", error(&t(lang, "eventNotFound")));
        return Ok(());
    };
    let slot = TimeSlots::new()?.get(id)?;

    View::event(&event, slot.as_ref(), lang)
}

fn delete(id: &str, yes: bool) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let events = Events::new()?;
    if events.get_by_id(id)?.is_none() {
        println!("{}", error(&t(lang, "eventNotFound")));
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(t(lang, "confirmDeleteEvent"))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    events.delete(id)?;
    println!("{}", success(&t(lang, "deleted")));
    Ok(())
}
