//! CLI frontend for the Unkenruf misfortune oracle.

mod assets;
mod commands;
mod history;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "unke",
    about = "Unkenruf — a deterministic misfortune oracle",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the misfortune for the current local time
    Now {
        /// Chat/user id the salt is derived from
        #[arg(short, long, default_value = "0")]
        chat: i64,

        /// Explicit salt (overrides the chat-derived one)
        #[arg(short, long)]
        salt: Option<u32>,

        /// Custom reference table file (JSON)
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// Directory with icon art ({code}.png)
        #[arg(short, long)]
        icons: Option<PathBuf>,

        /// History file to record readings in
        #[arg(long, default_value = "unke-history.json")]
        history: PathBuf,
    },

    /// Read the misfortune for a given moment
    Date {
        /// Date, YYYY-MM-DD
        date: String,

        /// Time of day, HH:MM (default: 00:00)
        time: Option<String>,

        /// Chat/user id the salt is derived from
        #[arg(short, long, default_value = "0")]
        chat: i64,

        /// Explicit salt (overrides the chat-derived one)
        #[arg(short, long)]
        salt: Option<u32>,

        /// Custom reference table file (JSON)
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// Directory with icon art ({code}.png)
        #[arg(short, long)]
        icons: Option<PathBuf>,

        /// History file to record readings in
        #[arg(long, default_value = "unke-history.json")]
        history: PathBuf,
    },

    /// One summary line per day of a month
    Month {
        /// Month, YYYY-MM
        month: String,

        /// Chat/user id the salt is derived from
        #[arg(short, long, default_value = "0")]
        chat: i64,

        /// Explicit salt (overrides the chat-derived one)
        #[arg(short, long)]
        salt: Option<u32>,

        /// Custom reference table file (JSON)
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// One summary line per day of an inclusive date range
    Range {
        /// Start date, YYYY-MM-DD
        from: String,

        /// End date, YYYY-MM-DD
        to: String,

        /// Chat/user id the salt is derived from
        #[arg(short, long, default_value = "0")]
        chat: i64,

        /// Explicit salt (overrides the chat-derived one)
        #[arg(short, long)]
        salt: Option<u32>,

        /// Custom reference table file (JSON)
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// Export a year of daily readings as an iCalendar file
    Ics {
        /// Year to export (default: current year)
        year: Option<i32>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Custom reference table file (JSON)
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// List the reference tables (branches, animals, misfortunes)
    Tables {
        /// Custom reference table file (JSON)
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// Show the most recent recorded readings for a chat
    Last {
        /// Chat/user id
        #[arg(short, long, default_value = "0")]
        chat: i64,

        /// Number of entries to show
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// History file to read
        #[arg(long, default_value = "unke-history.json")]
        history: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Now {
            chat,
            salt,
            tables,
            icons,
            history,
        } => commands::now::run(chat, salt, tables.as_deref(), icons.as_deref(), &history),
        Commands::Date {
            date,
            time,
            chat,
            salt,
            tables,
            icons,
            history,
        } => commands::date::run(
            &date,
            time.as_deref(),
            chat,
            salt,
            tables.as_deref(),
            icons.as_deref(),
            &history,
        ),
        Commands::Month {
            month,
            chat,
            salt,
            tables,
        } => commands::month::run(&month, chat, salt, tables.as_deref()),
        Commands::Range {
            from,
            to,
            chat,
            salt,
            tables,
        } => commands::range::run(&from, &to, chat, salt, tables.as_deref()),
        Commands::Ics {
            year,
            output,
            tables,
        } => commands::ics::run(year, output.as_deref(), tables.as_deref()),
        Commands::Tables { tables } => commands::tables::run(tables.as_deref()),
        Commands::Last {
            chat,
            limit,
            history,
        } => commands::last::run(chat, limit, &history),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
