use serde::{Deserialize, Serialize};

/// The dossier screen's suspect data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Name of the suspect
    pub name: String,
    /// Pseudo-bureaucratic psych write-up, oracle-generated
    pub bio: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Dude".to_string(),
            bio: "No write-up on file.".to_string(),
        }
    }
}
