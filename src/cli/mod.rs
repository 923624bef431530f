//! CLI command implementations

pub mod achievements;
pub mod dossier;
pub mod madness;
pub mod note;
pub mod snap;
pub mod task;
pub mod vent;

use paradise::session::{ProgressEvent, Session};
use tracing::debug;

/// Print (and optionally voice) milestone unlocks after a mutation
pub fn announce_events(session: &Session, events: &[ProgressEvent]) {
    for event in events {
        match event {
            ProgressEvent::MilestoneUnlocked { milestone, .. } => {
                println!();
                println!("  *** ACHIEVEMENT UNLOCKED: {} ***", milestone.title);
                println!("      {}", milestone.description);
                if let Some(clip) =
                    session.speak(&format!("Achievement unlocked: {}", milestone.title))
                {
                    debug!(
                        seconds = clip.duration_secs(),
                        "voice line synthesized for unlock"
                    );
                }
            }
        }
    }
}
