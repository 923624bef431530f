use serde::{Deserialize, Serialize};

/// The "madness of the day" event shown on the chaos screen
///
/// Produced by the oracle as a structured response; `buff` is a fake RPG stat
/// change like "+5 Stench".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MadnessEvent {
    pub title: String,
    pub description: String,
    pub buff: String,
}
