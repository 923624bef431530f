use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How much the user is going to hate doing this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Meh,
    Annoying,
    Nightmare,
}

impl Difficulty {
    /// Get the string form for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meh => "meh",
            Self::Annoying => "annoying",
            Self::Nightmare => "nightmare",
        }
    }

    /// Parse from database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "meh" => Some(Self::Meh),
            "annoying" => Some(Self::Annoying),
            "nightmare" => Some(Self::Nightmare),
            _ => None,
        }
    }
}

/// A chore on the clipboard, plus the quest-flavored rewrite of it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// What the user actually typed
    pub original_text: String,
    /// The oracle's rewrite of the chore as a stupid quest objective
    pub absurd_description: String,
    pub completed: bool,
    /// Unix millis
    pub created_at: i64,
    pub difficulty: Difficulty,
}

impl Task {
    /// Create a fresh, not-yet-completed task
    pub fn new(original_text: impl Into<String>, absurd_description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            original_text: original_text.into(),
            absurd_description: absurd_description.into(),
            completed: false,
            created_at: Utc::now().timestamp_millis(),
            difficulty: Difficulty::Meh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_starts_pending() {
        let task = Task::new("buy milk", "Acquire the white liquid before the town runs dry");
        assert!(!task.completed);
        assert_eq!(task.difficulty, Difficulty::Meh);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_difficulty_roundtrip() {
        for d in [Difficulty::Meh, Difficulty::Annoying, Difficulty::Nightmare] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("epic"), None);
    }
}
