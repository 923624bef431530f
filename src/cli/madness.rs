//! `paradise madness` - the daily chaos forecast

use anyhow::Result;
use paradise::session::Session;

pub fn madness_command(session: &mut Session, reroll: bool) -> Result<()> {
    let event = session.madness(reroll)?;
    println!("=== DAILY CHAOS ===");
    println!("{}", event.title);
    println!();
    println!("{}", event.description);
    println!();
    println!("EFFECT: {}", event.buff);
    if reroll {
        println!();
        println!("Rerolled. Fate remains cruel.");
    }
    Ok(())
}
