//! Markdown rendering of a composed reading.
//!
//! Output is a lightweight markdown dialect (bold, italic, inline code)
//! aimed at chat-style sinks. Table content is trusted, but every
//! table-sourced substring still passes through [`escape_markdown`] so a
//! customized table cannot break the markup.

use crate::reading::Reading;
use crate::tables::Tables;

/// Severity mark repeated once per level.
const SEVERITY_MARK: &str = "☠️";

/// Escape markup-significant characters for the markdown dialect.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Index of the advice tip shown for a reading.
pub fn tip_index(reading: &Reading, tables: &Tables) -> usize {
    (reading.cycle.stem + reading.cycle.day_branch + reading.cycle.hour_branch) as usize
        % tables.tips.len()
}

/// Render a reading as display text.
///
/// Fixed field order: emoji + severity marks, timestamp, day and hour
/// branches with animal glyphs, misfortune, element and polarity, food
/// taboo, advice tip.
pub fn render(tables: &Tables, reading: &Reading) -> String {
    let marks = SEVERITY_MARK.repeat(reading.severity as usize);
    let tip = &tables.tips[tip_index(reading, tables)];
    let day_animal = tables.animal(&reading.day_branch.code).unwrap_or("");
    let hour_animal = tables.animal(&reading.hour_branch.code).unwrap_or("");

    format!(
        "{emoji} {marks}\n\
         `{ts}`  [{dglyph} {dcode} / {dname} {danimal}; hour {hglyph} {hcode} {hanimal}]\n\
         *{name}* — {desc}\n\
         Element of the day: _{element}_ ({polarity}); food taboo: {taboo}.\n\
         Spirit advice: _{tip}_",
        emoji = reading.misfortune.emoji,
        ts = reading.at.format("%Y-%m-%d %H:%M"),
        dglyph = escape_markdown(&reading.day_branch.glyph),
        dcode = escape_markdown(&reading.day_branch.code),
        dname = escape_markdown(&reading.day_branch.name),
        danimal = day_animal,
        hglyph = escape_markdown(&reading.hour_branch.glyph),
        hcode = escape_markdown(&reading.hour_branch.code),
        hanimal = hour_animal,
        name = escape_markdown(&reading.misfortune.name),
        desc = escape_markdown(&reading.misfortune.description),
        element = escape_markdown(reading.element),
        polarity = escape_markdown(reading.polarity),
        taboo = escape_markdown(reading.taboo),
        tip = escape_markdown(tip),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::compose_reading;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn epoch_reading_snapshot() {
        let tables = Tables::builtin();
        let r = compose_reading(&tables, at(1970, 1, 1, 0, 0), 0);
        insta::assert_snapshot!(render(&tables, &r), @r"
        🔥 ☠️
        `1970-01-01 00:00`  [子 zi / Rat 🐀; hour 子 zi 🐀]
        *Everything Is Fine* — Something will catch fire today. Probably a deadline, possibly the kitchen.
        Element of the day: _Wood_ (yang); food taboo: crab + persimmon (螃蟹+柿子).
        Spirit advice: _Belly breathing into the lower dantian for 5 minutes, exhale longer than inhale._
        ");
    }

    #[test]
    fn severity_marks_match_level() {
        let tables = Tables::builtin();
        let r = compose_reading(&tables, at(2025, 10, 1, 14, 30), 7);
        let rendered = render(&tables, &r);
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(
            first_line.matches(SEVERITY_MARK).count(),
            r.severity as usize
        );
    }

    #[test]
    fn round_trip_timestamp_and_name() {
        // The rendered text carries the literal fields it was built from.
        let tables = Tables::builtin();
        let moment = at(2024, 2, 29, 11, 5);
        let r = compose_reading(&tables, moment, 13);
        let rendered = render(&tables, &r);

        let ts_start = rendered.find('`').unwrap() + 1;
        let ts_end = rendered[ts_start..].find('`').unwrap() + ts_start;
        let parsed =
            NaiveDateTime::parse_from_str(&rendered[ts_start..ts_end], "%Y-%m-%d %H:%M").unwrap();
        assert_eq!(parsed, moment);

        let name_start = rendered.find('*').unwrap() + 1;
        let name_end = rendered[name_start..].find('*').unwrap() + name_start;
        assert_eq!(&rendered[name_start..name_end], r.misfortune.name);
    }

    #[test]
    fn tip_selection_pinned() {
        let tables = Tables::builtin();
        let r = compose_reading(&tables, at(2025, 10, 1, 14, 30), 7);
        // stem 2, day branch 10, hour branch 7 -> tip 19.
        assert_eq!(tip_index(&r, &tables), 19);
        assert!(render(&tables, &r).contains(&tables.tips[19]));
    }

    #[test]
    fn escape_markdown_covers_markup_chars() {
        assert_eq!(escape_markdown("a*b_c`d[e]f\\g"), "a\\*b\\_c\\`d\\[e\\]f\\\\g");
        assert_eq!(escape_markdown("plain + text (ok)"), "plain + text (ok)");
    }

    #[test]
    fn custom_table_content_is_escaped() {
        let mut tables = Tables::builtin();
        tables.misfortunes[0].name = "Bold *Move*".to_string();
        tables.taboos[0] = "tea_with_underscores".to_string();
        let r = compose_reading(&tables, at(1970, 1, 1, 0, 0), 0);
        let rendered = render(&tables, &r);
        assert!(rendered.contains("Bold \\*Move\\*"));
        assert!(rendered.contains("tea\\_with\\_underscores"));
    }
}
