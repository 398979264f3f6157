use std::path::Path;

use chrono::{Datelike, NaiveDate, NaiveTime};

use unke_core::compose_reading;

pub fn run(month: &str, chat: i64, salt: Option<u32>, tables: Option<&Path>) -> Result<(), String> {
    let tables = super::load_tables(tables)?;
    let salt = super::resolve_salt(chat, salt);

    let start = NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map_err(|_| format!("invalid month \"{month}\", format: YYYY-MM"))?;

    let mut date = start;
    while date.month() == start.month() {
        let reading = compose_reading(&tables, date.and_time(NaiveTime::default()), salt);
        println!(
            "{} {} — {}",
            reading.misfortune.emoji, date, reading.misfortune.name
        );
        date = date
            .succ_opt()
            .ok_or_else(|| "date out of range".to_string())?;
    }

    Ok(())
}
