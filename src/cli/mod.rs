use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use platewise_shared::Language;
use platewise_shopping::ShareChannel;
use rust_decimal::Decimal;
use time::{Date, macros::format_description};

use crate::{AppError, config::Config};

pub mod generate;
pub mod settings;
pub mod shopping;
pub mod streak;

/// platewise - meal plan streaks and shareable shopping lists
#[derive(Parser)]
#[command(name = "platewise", version)]
#[command(about = "Meal plan streaks and shareable shopping lists", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute streak statistics from completed days (JSON array)
    Streak {
        /// JSON file with `[{"date": "YYYY-MM-DD"}, ...]`, `-` for stdin
        #[arg(long)]
        input: PathBuf,

        /// Reference day, defaults to the local date
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
    /// Render a shopping list as shareable text
    ShoppingList {
        /// JSON file with the shopping list, `-` for stdin
        #[arg(long)]
        input: PathBuf,

        /// Output language (overrides config and environment)
        #[arg(long)]
        lang: Option<Language>,

        /// Include items already owned
        #[arg(long)]
        all: bool,

        /// Deliver the text: message, mail or clipboard
        #[arg(long)]
        share: Option<ShareChannel>,

        /// Compare the estimated cost against this budget
        #[arg(long)]
        budget: Option<Decimal>,
    },
    /// Read or change stored user settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Request a new meal plan from the planning service
    Generate {
        /// Bearer token of the user
        #[arg(long, env = "PLATEWISE_TOKEN")]
        token: String,

        /// First day of the plan (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start: Date,

        #[arg(long, default_value_t = 7)]
        days: u8,

        #[arg(long, default_value_t = 2)]
        household_size: u16,

        #[arg(long)]
        budget: Option<Decimal>,

        #[arg(long)]
        lang: Option<Language>,
    },
    /// Run database migrations
    Migrate,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the settings of a user
    Show {
        #[arg(long)]
        user: String,
    },
    /// Update the settings of a user
    Set {
        #[arg(long)]
        user: String,

        #[arg(long)]
        language: Option<Language>,

        /// Mark the first-success message as shown
        #[arg(long)]
        first_success: bool,

        /// Extra preference as key=value (value parsed as JSON when possible)
        #[arg(long = "extra", value_parser = settings::parse_extra)]
        extra: Vec<(String, serde_json::Value)>,
    },
}

pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

/// Language from the flag, then the config, then the environment.
pub fn resolve_language(flag: Option<Language>, config: &Config) -> Language {
    flag.or(config.i18n.default_language)
        .unwrap_or_else(platewise_i18n::detect_system_language)
}

pub(crate) fn read_input(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }

    Ok(std::fs::read_to_string(path)?)
}

pub async fn run(command: Commands, config: Config) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Streak { input, today } => {
            let json = streak::run(&read_input(&input)?, today)?;
            writeln!(stdout, "{json}")?;
        }
        Commands::ShoppingList {
            input,
            lang,
            all,
            share,
            budget,
        } => {
            let language = resolve_language(lang, &config);
            let options = shopping::Options {
                language,
                only_unowned: !all && config.shopping.only_unowned,
                currency_symbol: config.shopping.currency_symbol.clone(),
                budget,
            };
            shopping::run(&read_input(&input)?, &options, share, &mut stdout)?;
        }
        Commands::Settings { command } => settings::run(command, &config, &mut stdout).await?,
        Commands::Generate {
            token,
            start,
            days,
            household_size,
            budget,
            lang,
        } => {
            let request = platewise_mealplan::GenerateMealPlanRequest {
                start_date: start,
                days,
                household_size,
                budget,
                language: resolve_language(lang, &config),
            };
            let json = generate::run(&config, &token, &request).await?;
            writeln!(stdout, "{json}")?;
        }
        Commands::Migrate => migrate(&config).await?,
    }

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn migrate(config: &Config) -> Result<(), AppError> {
    tracing::info!("Running database migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}
