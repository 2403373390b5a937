use crate::db::deadlines::Deadlines;
use crate::db::prefs::Prefs;
use crate::libs::deadline::{Deadline, Priority};
use crate::libs::messages::{error, success, t};
use crate::libs::view::View;
use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct DeadlineArgs {
    #[command(subcommand)]
    command: DeadlineCommand,
}

#[derive(Debug, Subcommand)]
enum DeadlineCommand {
    #[command(about = "Add a deadline")]
    Add {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },
    #[command(about = "List deadlines, soonest first")]
    List,
    #[command(about = "Delete a deadline")]
    Delete {
        id: String,
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub fn cmd(deadline_args: DeadlineArgs) -> Result<()> {
    match deadline_args.command {
        DeadlineCommand::Add {
            title,
            date,
            priority,
        } => add(title, date, priority),
        DeadlineCommand::List => list(),
        DeadlineCommand::Delete { id, yes } => delete(&id, yes),
    }
}

fn add(title: Option<String>, date: Option<NaiveDate>, priority: Priority) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let title = title.unwrap_or_default();
    let Some(date) = date else {
        bail!("{}", t(lang, "titleAndDateRequired"));
    };
    if title.trim().is_empty() {
        bail!("{}", t(lang, "titleAndDateRequired"));
    }

    let deadline = Deadline {
        id: Uuid::new_v4().to_string(),
        title: title.trim().to_string(),
        date,
        priority,
    };

    let repo = Deadlines::new()?;
    let mut deadlines = repo.get_all()?;
    deadlines.insert(0, deadline);
    repo.save_all(&deadlines)?;

    println!("{}", success(&t(lang, "saved")));
    Ok(())
}

fn list() -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let mut deadlines = Deadlines::new()?.get_all()?;
    deadlines.sort_by_key(|d| d.date);

    View::deadlines(&deadlines, Local::now().date_naive(), lang)
}

fn delete(id: &str, yes: bool) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let repo = Deadlines::new()?;
    let mut deadlines = repo.get_all()?;
    if !deadlines.iter().any(|d| d.id == id) {
        println!("{}", error(&t(lang, "noData")));
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(t(lang, "confirmDeleteDeadline"))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    deadlines.retain(|d| d.id != id);
    repo.save_all(&deadlines)?;

    println!("{}", success(&t(lang, "deleted")));
    Ok(())
}
