use std::path::Path;

use chrono::NaiveTime;

use unke_core::compose_reading;

pub fn run(
    from: &str,
    to: &str,
    chat: i64,
    salt: Option<u32>,
    tables: Option<&Path>,
) -> Result<(), String> {
    let tables = super::load_tables(tables)?;
    let salt = super::resolve_salt(chat, salt);

    let mut start = super::parse_date(from)?;
    let mut end = super::parse_date(to)?;
    if end < start {
        std::mem::swap(&mut start, &mut end);
    }

    let mut date = start;
    while date <= end {
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
