use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scrap from the notes pad
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    /// Unix millis
    pub created_at: i64,
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
