use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// ns_nutrition: calorie budgeting and meal recommendations from body-composition goals.
#[derive(Parser, Debug)]
#[command(name = "ns_nutrition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the JSON store holding profiles and intake.
    #[arg(short, long, global = true, default_value = "ns_nutrition.json")]
    pub store: PathBuf,

    /// User id to act as.
    #[arg(short, long, global = true, default_value = "default")]
    pub user: String,

    /// Catalog JSON replacing the built-in menu.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Planner settings JSON.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Create or update the body-composition profile.
    Profile,

    /// Show the energy budget and macro targets.
    #[default]
    Budget,

    /// Recommend lunch and dinner for a day.
    Meals {
        /// Day of the week (defaults to today).
        #[arg(short, long)]
        day: Option<String>,

        /// Café item eaten for breakfast; prompts when omitted.
        #[arg(short, long)]
        breakfast: Option<String>,
    },

    /// Suggest café items for breakfast.
    Breakfast {
        /// Breakfast calorie target (defaults to a share of the daily budget).
        #[arg(short, long)]
        target: Option<f64>,
    },

    /// Record a meal as eaten.
    Log {
        /// breakfast, lunch or dinner.
        #[arg(short, long)]
        meal: String,

        /// Café item or combination name.
        #[arg(short, long)]
        item: String,

        /// Menu day to look the combination up in (defaults to today).
        #[arg(short, long)]
        day: Option<String>,

        /// Date of the meal (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show recorded intake for a date.
    Intake {
        /// Date to show (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Delete the intake record with this id.
        #[arg(long)]
        delete: Option<u64>,
    },

    /// Record a new weight and show progress toward the goal.
    Progress {
        /// Current weight in kg.
        #[arg(short, long)]
        weight: Option<f64>,
    },

    /// Export the week's recommendations.
    Export {
        /// Output CSV path.
        #[arg(long)]
        csv: PathBuf,

        /// Café item eaten for breakfast each day.
        #[arg(short, long)]
        breakfast: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_budget() {
        let cli = Cli::try_parse_from(["ns_nutrition"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Budget));
    }

    #[test]
    fn test_meals_subcommand_parses() {
        let cli = Cli::try_parse_from(["ns_nutrition", "meals", "--day", "tue"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Meals { day: Some(ref d), breakfast: None }) if d == "tue"
        ));
    }
}
