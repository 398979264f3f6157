pub mod date;
pub mod ics;
pub mod last;
pub mod month;
pub mod now;
pub mod range;
pub mod tables;

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use colored::Colorize;

use unke_core::{Tables, chat_salt, compose_reading, render, resolve_reading_art};

use crate::assets::DirAssets;
use crate::history::{History, HistoryEntry};

/// Load the reference tables: builtin, or a custom JSON file.
/// A broken custom file is fatal; no silent fallback to builtin.
pub fn load_tables(path: Option<&Path>) -> Result<Tables, String> {
    match path {
        Some(p) => Tables::from_path(p).map_err(|e| format!("{}: {e}", p.display())),
        None => Ok(Tables::builtin()),
    }
}

/// The effective salt: explicit `--salt`, or derived from the chat id.
pub fn resolve_salt(chat: i64, salt: Option<u32>) -> u32 {
    salt.unwrap_or_else(|| chat_salt(chat))
}

/// Parse a `YYYY-MM-DD` date typed by the user.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date \"{s}\", format: YYYY-MM-DD"))
}

/// Parse a date plus optional `HH:MM` time of day.
pub fn parse_moment(date: &str, time: Option<&str>) -> Result<NaiveDateTime, String> {
    let date = parse_date(date)?;
    let time = match time {
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M")
            .map_err(|_| format!("invalid time \"{t}\", format: HH:MM"))?,
        None => NaiveTime::default(),
    };
    Ok(date.and_time(time))
}

/// Compose, print, and record one reading. Shared by `now` and `date`.
pub fn emit_reading(
    tables: &Tables,
    at: NaiveDateTime,
    chat: i64,
    salt: Option<u32>,
    icons: Option<&Path>,
    history_path: &Path,
) -> Result<(), String> {
    let reading = compose_reading(tables, at, resolve_salt(chat, salt));
    println!("{}", render(tables, &reading));

    if let Some(dir) = icons {
        let resolver = DirAssets::new(dir);
        if let Some(art) = resolve_reading_art(&resolver, &reading) {
            println!("{}", format!("icon: {}", art.display()).dimmed());
        }
    }

    let mut history = History::load(history_path);
    history.record(chat, HistoryEntry::for_reading(&reading));
    history.save()
}
