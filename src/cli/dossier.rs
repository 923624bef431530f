//! `paradise dossier` - the personal file

use anyhow::Result;
use paradise::session::Session;

pub fn dossier_command(
    session: &mut Session,
    name: Option<&str>,
    refresh_bio: bool,
) -> Result<()> {
    if let Some(name) = name {
        session.set_name(name)?;
    }
    if refresh_bio {
        println!("Requesting records from the feds...");
        session.rewrite_bio()?;
    }

    let profile = session.profile()?;
    let counters = session.counters();

    println!("=== PERSONAL FILE (CLASSIFIED) ===");
    println!("Suspect:   {}", profile.name);
    println!("Write-up:  {}", profile.bio);
    println!();
    println!("Tasks created:    {}", counters.tasks_created);
    println!("Tasks completed:  {}", counters.tasks_completed);
    println!("Tasks deleted:    {}", counters.tasks_deleted);
    println!("Vent clicks:      {}", counters.vent_clicks);
    println!("Excuses used:     {}", counters.excuses_used);
    Ok(())
}
