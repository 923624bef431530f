//! `paradise achievements` - the trophy shelf

use anyhow::Result;
use paradise::progress::Milestone;
use paradise::session::Session;

pub fn achievements_command(session: &Session) -> Result<()> {
    let milestones = session.milestones();
    let unlocked = milestones.iter().filter(|(_, u)| *u).count();

    println!(
        "=== ACHIEVEMENTS ({unlocked}/{}) ===",
        Milestone::total_count()
    );
    for (milestone, is_unlocked) in milestones {
        let marker = if is_unlocked { "[*]" } else { "[ ]" };
        println!("{marker} {} - {}", milestone.title, milestone.description);
    }
    Ok(())
}
