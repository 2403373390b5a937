//! Command-line surface. Each module owns one command family and stays
//! thin: read through the repositories, compute with the pure view
//! functions, render, write back.

pub mod config;
pub mod dashboard;
pub mod deadline;
pub mod event;
pub mod study;
pub mod todo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Track admission events")]
    Event(event::EventArgs),
    #[command(about = "Show the latest-news line and the event table")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Log study sessions and view weekly totals")]
    Study(study::StudyArgs),
    #[command(about = "Plan to-dos for a date")]
    Todo(todo::TodoArgs),
    #[command(about = "Track deadlines")]
    Deadline(deadline::DeadlineArgs),
    #[command(about = "Show or change preferences")]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Event(args) => event::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Study(args) => study::cmd(args),
            Commands::Todo(args) => todo::cmd(args),
            Commands::Deadline(args) => deadline::cmd(args),
            Commands::Config(args) => config::cmd(args),
        }
    }
}
