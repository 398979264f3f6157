use std::path::Path;

use chrono::Local;

pub fn run(
    chat: i64,
    salt: Option<u32>,
    tables: Option<&Path>,
    icons: Option<&Path>,
    history: &Path,
) -> Result<(), String> {
    let tables = super::load_tables(tables)?;
    let at = Local::now().naive_local();
    super::emit_reading(&tables, at, chat, salt, icons, history)
}
