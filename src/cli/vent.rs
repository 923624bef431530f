//! `paradise vent` - the stress-relief button

use anyhow::Result;
use paradise::session::Session;

use super::announce_events;

pub fn vent_command(session: &mut Session, clicks: u64) -> Result<()> {
    let (roast, events) = session.vent(clicks)?;
    let total = session.counters().vent_clicks;
    println!("> {roast}");
    println!();
    println!("Clicks wasted: {total}");
    announce_events(session, &events);
    Ok(())
}
