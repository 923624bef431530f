//! `paradise task` - the errand clipboard

use anyhow::Result;
use paradise::session::Session;

use super::announce_events;

/// Add a task; the oracle turns it into a quest objective
pub fn add_command(session: &mut Session, text: &str) -> Result<()> {
    let (task, events) = session.add_task(text)?;
    println!("Added to the list of things you probably won't do:");
    println!("  {}", task.absurd_description);
    println!("  ({})  id: {}", task.original_text, task.id);
    if let Some(clip) = session.speak("Added to the list of things you probably won't do.") {
        tracing::debug!(seconds = clip.duration_secs(), "voice line synthesized");
    }
    announce_events(session, &events);
    Ok(())
}

/// List all tasks, newest first
pub fn list_command(session: &Session) -> Result<()> {
    let tasks = session.tasks()?;
    if tasks.is_empty() {
        println!("Your clipboard is empty. Go do something useful. Or don't. Whatever.");
        return Ok(());
    }
    for task in tasks {
        let marker = if task.completed { "[x]" } else { "[ ]" };
        println!("{marker} {}", task.absurd_description);
        println!("      ({})  id: {}", task.original_text, task.id);
    }
    Ok(())
}

/// Toggle a task's completion state
pub fn done_command(session: &mut Session, id: &str) -> Result<()> {
    let (task, events) = session.toggle_task(id)?;
    if task.completed {
        println!("Whoa, you actually did it? \"{}\"", task.original_text);
    } else {
        println!("Back on the pile: \"{}\"", task.original_text);
    }
    announce_events(session, &events);
    Ok(())
}

/// Delete a task without doing it
pub fn rm_command(session: &mut Session, id: &str) -> Result<()> {
    let events = session.delete_task(id)?;
    println!("Giving up? Typical.");
    announce_events(session, &events);
    Ok(())
}

/// Ditch a task with a generated excuse
pub fn excuse_command(session: &mut Session, id: &str) -> Result<()> {
    let (excuse, events) = session.excuse_task(id)?;
    println!("Official reason on file:");
    println!("  \"{excuse}\"");
    println!("Great. One less problem.");
    announce_events(session, &events);
    Ok(())
}
