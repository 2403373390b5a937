//! # Admcal - Admission Calendar
//!
//! A command-line tracker for university admission events, study sessions,
//! day plans, and deadlines. Everything is stored locally.
//!
//! ## Features
//!
//! - **Admission Events**: Record exam, result, and admit-card dates with
//!   eligibility notes and links, plus an optional time slot per event
//! - **Dashboard**: Filtered, date-sorted event table with countdowns and a
//!   latest-news marquee line
//! - **Study Tracker**: Log study sessions per subject and view 7-day totals
//! - **Day Planner**: Free-form to-dos tied to dates
//! - **Deadline Tracker**: Prioritized deadlines with urgency markers
//! - **Bilingual**: English and Bangla output, switchable at runtime
//!
//! ## Usage
//!
//! ```rust,no_run
//! use admcal::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "admcal";
