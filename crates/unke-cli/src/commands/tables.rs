use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(tables: Option<&Path>) -> Result<(), String> {
    let tables = super::load_tables(tables)?;

    let mut branches = Table::new();
    branches.set_content_arrangement(ContentArrangement::Dynamic);
    branches.set_header(vec!["Branch", "Code", "Name", "Animal"]);
    for branch in &tables.branches {
        branches.add_row(vec![
            branch.glyph.as_str(),
            branch.code.as_str(),
            branch.name.as_str(),
            tables.animal(&branch.code).unwrap_or("—"),
        ]);
    }
    println!("{branches}");
    println!();

    let mut misfortunes = Table::new();
    misfortunes.set_content_arrangement(ContentArrangement::Dynamic);
    misfortunes.set_header(vec!["", "Code", "Name", "Description"]);
    for m in &tables.misfortunes {
        misfortunes.add_row(vec![
            m.emoji.as_str(),
            m.code.as_str(),
            m.name.as_str(),
            m.description.as_str(),
        ]);
    }
    println!("{misfortunes}");
    println!();
    println!(
        "  {} branches, {} misfortunes, {} taboos, {} tips",
        tables.branches.len(),
        tables.misfortunes.len(),
        tables.taboos.len(),
        tables.tips.len()
    );

    Ok(())
}
