use crate::db::prefs::Prefs;
use crate::db::todos::Todos;
use crate::libs::messages::{error, success, t};
use crate::libs::todo::Todo;
use crate::libs::view::View;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct TodoArgs {
    #[command(subcommand)]
    command: TodoCommand,
}

#[derive(Debug, Subcommand)]
enum TodoCommand {
    #[command(about = "Add a to-do for a date")]
    Add {
        text: String,
        #[arg(long, help = "Defaults to today")]
        date: Option<NaiveDate>,
    },
    #[command(about = "List to-dos for a date")]
    List {
        #[arg(long, help = "Defaults to today")]
        date: Option<NaiveDate>,
        #[arg(long, help = "List every date")]
        all: bool,
    },
    #[command(about = "Flip a to-do between done and not done")]
    Toggle { id: String },
    #[command(about = "Delete a to-do")]
    Delete {
        id: String,
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub fn cmd(todo_args: TodoArgs) -> Result<()> {
    match todo_args.command {
        TodoCommand::Add { text, date } => add(text, date),
        TodoCommand::List { date, all } => list(date, all),
        TodoCommand::Toggle { id } => toggle(&id),
        TodoCommand::Delete { id, yes } => delete(&id, yes),
    }
}

fn add(text: String, date: Option<NaiveDate>) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    if text.trim().is_empty() {
        return Ok(());
    }

    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        date: date.unwrap_or_else(|| Local::now().date_naive()),
        text: text.trim().to_string(),
        completed: false,
    };

    let repo = Todos::new()?;
    let mut todos = repo.get_all()?;
    todos.insert(0, todo);
    repo.save_all(&todos)?;

    println!("{}", success(&t(lang, "saved")));
    Ok(())
}

fn list(date: Option<NaiveDate>, all: bool) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let todos = Todos::new()?.get_all()?;
    if all {
        return View::todos(&todos, lang);
    }

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let filtered: Vec<_> = todos.into_iter().filter(|t| t.date == date).collect();
    View::todos(&filtered, lang)
}

fn toggle(id: &str) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let repo = Todos::new()?;
    let mut todos = repo.get_all()?;
    for todo in todos.iter_mut().filter(|t| t.id == id) {
        todo.completed = !todo.completed;
    }
    repo.save_all(&todos)?;

    println!("{}", success(&t(lang, "saved")));
    Ok(())
}

fn delete(id: &str, yes: bool) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    let repo = Todos::new()?;
    let mut todos = repo.get_all()?;
    let Some(todo) = todos.iter().find(|t| t.id == id) else {
        println!("{}", error(&t(lang, "noData")));
        return Ok(());
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} \"{}\"?", t(lang, "delete"), todo.text))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    todos.retain(|t| t.id != id);
    repo.save_all(&todos)?;

    println!("{}", success(&t(lang, "deleted")));
    Ok(())
}
