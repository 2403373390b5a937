use crate::db::prefs::Prefs;
use crate::db::study::StudySessions;
use crate::db::subjects::Subjects;
use crate::libs::messages::{success, t};
use crate::libs::study::StudySession;
use crate::libs::summary::{today_total, total_minutes, week_study};
use crate::libs::view::View;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct StudyArgs {
    #[command(subcommand)]
    command: StudyCommand,
}

#[derive(Debug, Subcommand)]
enum StudyCommand {
    #[command(about = "Log a study session")]
    Add(AddArgs),
    #[command(about = "List logged sessions")]
    List,
    #[command(about = "Show totals and the last-7-days chart")]
    Week,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long)]
    minutes: u32,
    #[arg(long, help = "Subject id or name; defaults to the first subject")]
    subject: Option<String>,
    #[arg(long, help = "Defaults to today")]
    date: Option<NaiveDate>,
    #[arg(long, default_value = "")]
    notes: String,
}

pub fn cmd(study_args: StudyArgs) -> Result<()> {
    match study_args.command {
        StudyCommand::Add(args) => add(args),
        StudyCommand::List => list(),
        StudyCommand::Week => week(),
    }
}

fn add(args: AddArgs) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let subjects = Subjects::new()?.get_all()?;
    // Unknown names are stored as given; a dangling subject id only costs
    // a placeholder label at read time.
    let subject_id = match args.subject {
        Some(query) => subjects
            .iter()
            .find(|s| s.id == query || s.name.to_lowercase() == query.to_lowercase())
            .map(|s| s.id.clone())
            .unwrap_or(query),
        None => subjects[0].id.clone(),
    };

    let session = StudySession {
        id: Uuid::new_v4().to_string(),
        subject_id,
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        minutes: args.minutes,
        notes: args.notes,
    };

    let repo = StudySessions::new()?;
    let mut sessions = repo.get_all()?;
    sessions.insert(0, session);
    repo.save_all(&sessions)?;

    println!("{}", success(&t(lang, "saved")));
    Ok(())
}

fn list() -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let sessions = StudySessions::new()?.get_all()?;
    let subjects = Subjects::new()?.get_all()?;

    View::sessions(&sessions, &subjects, lang)
}

fn week() -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let sessions = StudySessions::new()?.get_all()?;
    let today = Local::now().date_naive();

    println!(
        "{}: {} {}",
        t(lang, "todayStudy"),
        today_total(&sessions, today),
        t(lang, "mins")
    );
    println!(
        "{}: {} {}",
        t(lang, "thisWeek"),
        week_study(&sessions, today)
            .iter()
            .map(|d| d.minutes)
            .sum::<u32>(),
        t(lang, "mins")
    );
    println!(
        "{}: {} {}",
        t(lang, "time"),
        total_minutes(&sessions),
        t(lang, "mins")
    );
    println!();

    View::week_chart(&week_study(&sessions, today), lang)
}
