use anyhow::Result;
use colored::*;
use std::path::Path;

use notebook_mcp::{Note, NoteStore, SqliteNoteStore};

pub fn run(db_path: &Path, json: bool) -> Result<()> {
    let store = SqliteNoteStore::open(db_path)?;
    let mut notes = store.list()?;
    notes.sort_by(|a, b| a.name.cmp(&b.name));

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    print_notes(db_path, &notes);
    Ok(())
}

fn print_notes(db_path: &Path, notes: &[Note]) {
    println!("{}", "Notebook".bold());
    println!("{}", "=".repeat(50));
    println!("{} {}", "Database:".dimmed(), db_path.display());
    println!();

    if notes.is_empty() {
        println!("{}", "No notes yet.".yellow());
        return;
    }

    let width = notes.iter().map(|n| n.name.len()).max().unwrap_or(0);
    for note in notes {
        println!(
            "  {:<width$}  {}",
            note.name.green(),
            note.description,
            width = width
        );
    }

    println!();
    println!("Total: {} notes", notes.len().to_string().cyan());
}
