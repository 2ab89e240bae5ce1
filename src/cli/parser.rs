use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for studylog
/// CLI application to record study sessions and inspect time spent
#[derive(Parser)]
#[command(
    name = "studylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record study sessions per subject and inspect time spent, by subject and by day",
    long_about = None
)]
pub struct Cli {
    /// Override session log path (useful for tests or a custom log)
    #[arg(global = true, long = "log")]
    pub log: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the session log
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Start a study session (interactive stopwatch)
    Start {
        /// Subject to study; prompts with the known subjects when omitted
        subject: Option<String>,
    },

    /// List recorded sessions
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (e.g. 2025, 2025-09, 2025-09-01, 2025-01:2025-06)"
        )]
        period: Option<String>,

        #[arg(long, help = "Filter by subject")]
        subject: Option<String>,
    },

    /// Show aggregated statistics (per subject, per day, overall)
    Stats,

    /// Show the trailing 7-day totals and the daily mean
    Week,

    /// List the subjects seen so far
    Subjects,

    /// Export recorded sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
