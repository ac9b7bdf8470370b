use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub session_id: String,
    pub title: String,
    pub description: String,
    pub style: String,
    pub sections: String,
    pub colors: serde_json::Value,
    pub html_content: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row for a session lookup. `html_content` is deliberately absent.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i32,
    pub session_id: String,
    pub title: String,
    pub description: String,
    pub style: String,
    pub sections: String,
    pub colors: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
