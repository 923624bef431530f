//! `paradise note` - the ramblings pad

use anyhow::Result;
use chrono::DateTime;
use paradise::session::Session;

pub fn add_command(session: &mut Session, text: &str) -> Result<()> {
    let note = session.add_note(text)?;
    println!("Written down. No backing out now.  id: {}", note.id);
    Ok(())
}

pub fn list_command(session: &Session) -> Result<()> {
    let notes = session.notes()?;
    if notes.is_empty() {
        println!("Head's empty. That's almost a good thing.");
        return Ok(());
    }
    for note in notes {
        let stamp = DateTime::from_timestamp_millis(note.created_at)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!("[{stamp}] {}", note.content);
        println!("      id: {}", note.id);
    }
    Ok(())
}

pub fn rm_command(session: &mut Session, id: &str) -> Result<()> {
    session.delete_note(id)?;
    println!("Destroying the evidence...");
    Ok(())
}
