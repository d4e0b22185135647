use clap::{Parser, Subcommand};

/// Command-line interface definition for rCalTrack
/// CLI application to track a personal calendar stored as a JSON document
#[derive(Parser)]
#[command(
    name = "rcaltrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple calendar CLI: track events, roll them up by week and month, and get local-AI coaching",
    long_about = None
)]
pub struct Cli {
    /// Override calendar file path (useful for tests or custom files)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the calendar document
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Add an event to a date
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Event title (also the key used by update/del)
        title: String,

        #[arg(long = "time", help = "Time of the event, free form (e.g. 18:00)")]
        time: Option<String>,

        #[arg(long = "memo", help = "Free-form note")]
        memo: Option<String>,

        #[arg(long = "priority", help = "Importance, 1 = highest (default 1)")]
        priority: Option<i32>,

        #[arg(long = "category", help = "Label such as work/study/exercise")]
        category: Option<String>,
    },

    /// Update the first event matching a title on a date
    Update {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Title of the event to patch
        title: String,

        #[arg(long = "title", help = "New title")]
        new_title: Option<String>,

        #[arg(long = "time", help = "New time")]
        time: Option<String>,

        #[arg(long = "memo", help = "New memo")]
        memo: Option<String>,

        #[arg(long = "priority", help = "New priority, 1 = highest")]
        priority: Option<i32>,

        #[arg(long = "category", help = "New category")]
        category: Option<String>,
    },

    /// Delete all events matching a title on a date
    Del {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Title of the event(s) to delete
        title: String,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Show the schedule for a day, week or month
    View {
        /// day | week | month
        mode: String,

        /// Reference date (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "ai", help = "Append an AI coaching comment")]
        ai: bool,
    },

    /// Print calendar grids and ISO week info
    Cal {
        #[arg(long = "month", help = "Month grid for YYYY-MM")]
        month: Option<String>,

        #[arg(long = "year", help = "Full year grid for YYYY")]
        year: Option<i32>,

        #[arg(long = "week", help = "ISO week info for a date (YYYY-MM-DD)")]
        week: Option<String>,

        #[arg(long = "day", help = "Weekday info for a date (YYYY-MM-DD)")]
        day: Option<String>,
    },

    /// Ask the local model to summarize a day, week or month
    Summary {
        /// day | week | month
        mode: String,

        /// Reference date (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "save", help = "Store the comment on the week/month aggregate")]
        save: bool,
    },
}
