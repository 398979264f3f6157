//! iCalendar (RFC 5545) yearly export.
//!
//! One all-day event per calendar date, composed with salt 0 so any two
//! exports of the same year are byte-identical. Event UIDs are derived from
//! the date and the misfortune code, so they are stable across exports and
//! unique within a year.

use chrono::{Datelike, NaiveDate};

use unke_core::{Reading, Tables, compose_reading};

const PRODID: &str = "-//Unkenruf//EN";
const UID_DOMAIN: &str = "unkenruf";

/// Escape a text value per RFC 5545: backslash, comma, semicolon, newline.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// The VEVENT block for one date's reading.
fn event_block(lines: &mut Vec<String>, date: NaiveDate, reading: &Reading) {
    let stamp = date.format("%Y%m%d");
    let description = format!(
        "{} {} — {} / Taboo: {}",
        reading.misfortune.emoji,
        reading.misfortune.name,
        reading.misfortune.description,
        reading.taboo
    );
    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{stamp}-{}@{UID_DOMAIN}", reading.misfortune.code));
    lines.push(format!("DTSTAMP:{stamp}T000000Z"));
    lines.push(format!("DTSTART;VALUE=DATE:{stamp}"));
    lines.push(format!("SUMMARY:{}", escape_text(&reading.misfortune.name)));
    lines.push(format!("DESCRIPTION:{}", escape_text(&description)));
    lines.push("END:VEVENT".to_string());
}

/// Export every day of `year` as an iCalendar text, one all-day event per
/// date. Leap years are covered by iterating real calendar dates.
///
/// Returns `None` only for years outside chrono's representable range.
pub fn export_year(tables: &Tables, year: i32) -> Option<String> {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
    ];

    let mut date = NaiveDate::from_ymd_opt(year, 1, 1)?;
    while date.year() == year {
        let reading = compose_reading(tables, date.and_time(chrono::NaiveTime::default()), 0);
        event_block(&mut lines, date, &reading);
        date = date.succ_opt()?;
    }

    lines.push("END:VCALENDAR".to_string());
    Some(lines.join("\n"))
}
