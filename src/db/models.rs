//! Domain models for the content database.
//!
//! These models are storage-agnostic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored content record.
///
/// Serializes with camelCase keys (`id`, `title`, `body`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new content record; the id and timestamp are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContent {
    pub title: String,
    pub body: String,
}

impl NewContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
