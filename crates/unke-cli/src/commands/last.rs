use std::path::Path;

use colored::Colorize;

use crate::history::History;

pub fn run(chat: i64, limit: usize, history: &Path) -> Result<(), String> {
    let history = History::load(history);
    let entries = history.last(chat, limit);

    if entries.is_empty() {
        println!("  No readings yet.");
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  #{} {} — {} (level {})",
            i + 1,
            entry.ts,
            entry.code.bold(),
            entry.severity
        );
    }

    Ok(())
}
