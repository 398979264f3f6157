use std::path::Path;

pub fn run(
    date: &str,
    time: Option<&str>,
    chat: i64,
    salt: Option<u32>,
    tables: Option<&Path>,
    icons: Option<&Path>,
    history: &Path,
) -> Result<(), String> {
    let tables = super::load_tables(tables)?;
    let at = super::parse_moment(date, time)?;
    super::emit_reading(&tables, at, chat, salt, icons, history)
}
