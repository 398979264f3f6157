use std::path::Path;

use chrono::{Datelike, Local};

pub fn run(year: Option<i32>, output: Option<&Path>, tables: Option<&Path>) -> Result<(), String> {
    let tables = super::load_tables(tables)?;
    let year = year.unwrap_or_else(|| Local::now().year());

    let content = unke_calendar::export_year(&tables, year)
        .ok_or_else(|| format!("year {year} is out of range"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported calendar {year} to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
