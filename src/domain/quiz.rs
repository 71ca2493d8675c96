use chrono::{DateTime, Utc};
use serde::Serialize;

/// A quiz container to be created, owned by the authenticated caller.
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub owner: String,
    pub subject: String,
    pub chapter: String,
    pub title: String,
    pub description: Option<String>,
}

/// A stored quiz container.
#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub id: i64,
    pub owner: String,
    pub subject: String,
    pub chapter: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
