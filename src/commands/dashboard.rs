use crate::db::events::Events;
use crate::db::prefs::Prefs;
use crate::db::time_slots::TimeSlots;
use crate::libs::dashboard::{filter_events, latest_news, marquee_text, CategoryFilter};
use crate::libs::event::Category;
use crate::libs::messages::{t, Lang};
use crate::libs::view::View;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::thread;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[arg(long, value_enum)]
    category: Option<Category>,
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, help = "Re-render once per second until interrupted")]
    watch: bool,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let lang = Prefs::new()?.load_lang()?;
    if args.watch {
        loop {
            // Clear and re-read every tick so countdowns flip right after
            // local midnight and edits from other processes show up.
            print!("\x1B[2J\x1B[1;1H");
            render(&args, lang)?;
            thread::sleep(Duration::from_secs(1));
        }
    } else {
        render(&args, lang)
    }
}

fn render(args: &DashboardArgs, lang: Lang) -> Result<()> {
    let events = Events::new()?.get_all()?;
    let today = Local::now().date_naive();

    let latest = latest_news(&events);
    if latest.is_empty() {
        println!("📣 {}: {}", t(lang, "latestNews"), t(lang, "noAnnouncements"));
    } else {
        let line = latest
            .iter()
            .map(|e| marquee_text(e, today, lang))
            .collect::<Vec<_>>()
            .join("  •  ");
        println!("📣 {}: {}", t(lang, "latestNews"), line);
    }
    println!();

    let filter = match args.category {
        Some(category) => CategoryFilter::Only(category),
        None => CategoryFilter::All,
    };
    let filtered = filter_events(&events, filter, &args.search);
    let slots = TimeSlots::new()?.get_all()?;

    View::events(&filtered, &slots, today, lang)
}
