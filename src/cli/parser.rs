use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rpomodoro
/// CLI application to run Pomodoro sessions from Markdown task lists
#[derive(Parser)]
#[command(
    name = "rpomodoro",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple Pomodoro CLI: pick a task from your Markdown notes, focus, log the session",
    long_about = None
)]
pub struct Cli {
    /// Override tasks directory (useful for tests or custom vaults)
    #[arg(global = true, long = "tasks-dir")]
    pub tasks_dir: Option<String>,

    /// Override sessions directory (useful for tests or custom vaults)
    #[arg(global = true, long = "sessions-dir")]
    pub sessions_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the task/session directories
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the open tasks found in the tasks directory
    Tasks {
        #[arg(long, help = "Only scan the given Markdown file (name or stem)")]
        file: Option<String>,
    },

    /// Run a Pomodoro session for a task
    Start {
        /// Task to work on: a number from `rpomodoro tasks` or a text
        /// filter. Without it the countdown runs task-less (not saveable)
        task: Option<String>,

        /// Session length in minutes (overrides the configured default)
        #[arg(long, short = 'd', value_name = "MINUTES")]
        duration: Option<u32>,

        /// Save the session without asking
        #[arg(long, conflicts_with = "no_save")]
        save: bool,

        /// Discard the session without asking
        #[arg(long = "no-save")]
        no_save: bool,

        /// Milliseconds per countdown tick (testing only)
        #[arg(long = "tick-ms", hide = true)]
        tick_ms: Option<u64>,
    },

    /// Show logged sessions
    Log {
        /// Day to show (YYYY-MM-DD); defaults to today
        date: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Create a backup copy of the sessions directory
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export logged sessions
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
