//! CLI command definitions

use crate::domain::{EnergyLevel, Intervention, Mood};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lumina")]
#[command(about = "Personal health log: mood, energy, sleep and what helped", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new data directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Sign in, sign out, or show the current identity
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },

    /// Record today's log (interactive unless --mood is given)
    Log {
        /// Mood, 1-5 or awful/bad/okay/good/great
        #[arg(short, long)]
        mood: Option<Mood>,

        /// Energy level, 1-5 or exhausted/low/moderate/high/peak
        #[arg(short, long)]
        energy: Option<EnergyLevel>,

        /// Hours slept (0-12, rounded to the nearest half hour)
        #[arg(short, long)]
        sleep: Option<f64>,

        /// Intervention to toggle; repeat for several
        #[arg(short = 'i', long = "intervention", value_name = "NAME")]
        interventions: Vec<Intervention>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Day the log describes (e.g., today, yesterday, last friday, 2026-02-20)
        #[arg(short, long, default_value = "today")]
        date: String,
    },

    /// List past logs, newest first
    History {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Show at most this many logs
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show mood and sleep trends
    Trends {
        /// Window in days (default: config trend_days)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// View or modify profile preferences
    Prefs {
        /// Preference key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all preferences
        #[arg(short, long)]
        list: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Resubmit logs that failed to save
    Sync,
}

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Sign in; without --email starts an anonymous demo session
    Signin {
        /// Email address of the account
        #[arg(long)]
        email: Option<String>,

        /// Display name to store with the account
        #[arg(long, requires = "email")]
        name: Option<String>,
    },

    /// End the current session
    Signout,

    /// Show who is signed in
    Whoami,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_flags_parse_into_domain_types() {
        let cli = Cli::try_parse_from([
            "lumina", "log", "--mood", "good", "-e", "5", "-s", "6.5", "-i", "Exercise", "-i",
            "healthy meal", "--notes", "felt good",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Log {
                mood,
                energy,
                sleep,
                interventions,
                notes,
                date,
            }) => {
                assert_eq!(mood, Some(Mood::Good));
                assert_eq!(energy, Some(EnergyLevel::Peak));
                assert_eq!(sleep, Some(6.5));
                assert_eq!(
                    interventions,
                    vec![Intervention::Exercise, Intervention::HealthyMeal]
                );
                assert_eq!(notes.as_deref(), Some("felt good"));
                assert_eq!(date, "today");
            }
            other => panic!("Expected log command, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_mood_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["lumina", "log", "--mood", "9"]).is_err());
    }

    #[test]
    fn test_name_requires_email() {
        assert!(Cli::try_parse_from(["lumina", "auth", "signin", "--name", "Sam"]).is_err());
        assert!(Cli::try_parse_from([
            "lumina", "auth", "signin", "--email", "s@x.io", "--name", "Sam"
        ])
        .is_ok());
    }
}
