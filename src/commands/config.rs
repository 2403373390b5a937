use crate::db::prefs::Prefs;
use crate::libs::messages::{success, t, Lang};
use crate::libs::prefs::Theme;
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    #[command(about = "Pick theme and language interactively")]
    Init,
    #[command(about = "Show or set the theme")]
    Theme {
        #[arg(value_enum)]
        value: Option<Theme>,
    },
    #[command(about = "Show or set the language")]
    Lang {
        #[arg(value_enum)]
        value: Option<Lang>,
    },
}

pub fn cmd(config_args: ConfigArgs) -> Result<()> {
    let prefs = Prefs::new()?;
    let lang = prefs.load_lang()?;

    match config_args.command {
        None => {
            println!("{}: {}", t(lang, "theme"), prefs.load_theme()?.as_str());
            println!("{}: {}", t(lang, "language"), lang.as_str());
            Ok(())
        }
        Some(ConfigCommand::Init) => init(&prefs, lang),
        Some(ConfigCommand::Theme { value }) => match value {
            Some(theme) => {
                prefs.save_theme(theme)?;
                println!("{}", success(&t(lang, "saved")));
                Ok(())
            }
            None => {
                println!("{}", prefs.load_theme()?.as_str());
                Ok(())
            }
        },
        Some(ConfigCommand::Lang { value }) => match value {
            Some(new_lang) => {
                prefs.save_lang(new_lang)?;
                // Confirm in the language just chosen.
                println!("{}", success(&t(new_lang, "saved")));
                Ok(())
            }
            None => {
                println!("{}", lang.as_str());
                Ok(())
            }
        },
    }
}

fn init(prefs: &Prefs, lang: Lang) -> Result<()> {
    let themes = [Theme::Light, Theme::Dark];
    let current_theme = prefs.load_theme()?;
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t(lang, "theme"))
        .items(&themes.map(|theme| theme.as_str()))
        .default(
            themes
                .iter()
                .position(|&theme| theme == current_theme)
                .unwrap_or(0),
        )
        .interact()?;
    prefs.save_theme(themes[picked])?;

    let langs = [Lang::En, Lang::Bn];
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t(lang, "language"))
        .items(&langs.map(|lang| lang.as_str()))
        .default(langs.iter().position(|&code| code == lang).unwrap_or(0))
        .interact()?;
    prefs.save_lang(langs[picked])?;

    println!("{}", success(&t(prefs.load_lang()?, "saved")));
    Ok(())
}
