//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands;
use sbgrader::output::OutputMode;

/// sbgrader - Standards-based grades and study advisories
#[derive(Parser, Debug)]
#[command(
    name = "sbgrader",
    version,
    about = "Standards-based grades and study advisories",
    long_about = "Compute course grades and study advisories from per-skill score histories.\n\n\
                  A class period is a flat-text index of learning targets and students.\n\
                  Grades come from the most recent score on each learning target."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Class period index file
    #[arg(short, long, global = true, default_value = "sample_classperiod.txt")]
    pub file: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the class roster with overall grades
    Roster,

    /// Show one student's grade and study advisory
    Grade {
        /// Student id
        sid: u32,
    },

    /// Write grade report files for every student in the class
    Report {
        /// Directory to write reports into
        #[arg(short, long, default_value = "reports")]
        out_dir: PathBuf,

        /// Report date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Record a new score for a student on a learning target
    Score {
        /// Student id
        sid: u32,

        /// Learning target label
        label: String,

        /// The score (-1, 0, 0.5, 1, 1.5, 2, 2.5, 3, 3.5, or 4)
        #[arg(allow_hyphen_values = true)]
        score: String,
    },

    /// Manage the learning-target catalog
    Target {
        /// Catalog action
        #[command(subcommand)]
        action: TargetAction,
    },

    /// Manage per-user preferences
    Prefs {
        /// Preference action
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Show version
    Version,
}

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum TargetAction {
    /// Add a learning target to the catalog
    Add {
        /// Target label, e.g. LT07
        label: String,

        /// Short description used on rosters and reports
        #[arg(short, long)]
        brief: Option<String>,

        /// Full description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List the learning targets in the catalog
    List,
}

/// Preference subcommands
#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// Show a user's saved preferences
    Show {
        /// District username
        user: String,

        /// Preference file
        #[arg(long, default_value = "user_prefs.txt")]
        prefs_file: PathBuf,
    },

    /// Save a user's preferences
    Set {
        /// District username
        user: String,

        /// Overall grade function: simple, piecewise, or sticky
        #[arg(long)]
        function: Option<String>,

        /// Whether D is a valid grade
        #[arg(long)]
        d_is_valid: Option<bool>,

        /// Whether to work against the training environment
        #[arg(long)]
        train_mode: Option<bool>,

        /// Preference file
        #[arg(long, default_value = "user_prefs.txt")]
        prefs_file: PathBuf,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Roster) => commands::roster(&cli.file, output_mode),
        Some(Command::Grade { sid }) => commands::grade(&cli.file, sid, output_mode),
        Some(Command::Report { out_dir, date }) => {
            commands::report(&cli.file, &out_dir, date, output_mode)
        },
        Some(Command::Score { sid, label, score }) => {
            commands::score(&cli.file, sid, &label, &score, output_mode)
        },
        Some(Command::Target { action }) => commands::target_cmd(&cli.file, action, output_mode),
        Some(Command::Prefs { action }) => commands::prefs_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("sbgrader v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("sbgrader v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'sbgrader --help' for usage");
                println!("Run 'sbgrader roster' to see a class at a glance");
            }
            Ok(())
        },
    }
}
