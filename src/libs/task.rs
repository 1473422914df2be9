//! Task data model and client-side validation.
//!
//! Tasks are owned by the server: `id`, `user_id`, `created_at` and
//! `updated_at` are always server-assigned and the client never invents or
//! rewrites them. The client only ever submits a [`TaskDraft`] (create) or a
//! [`TaskPatch`] (partial update) and replaces its local copy with whatever
//! task the server returns.
//!
//! Validation mirrors the server bounds so obviously invalid input is
//! rejected before any network call: a title is required and limited to
//! [`TITLE_MAX_LEN`] characters, a description to [`DESCRIPTION_MAX_LEN`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted title length in characters, matching the server schema.
pub const TITLE_MAX_LEN: usize = 255;

/// Maximum accepted description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// A task as stored by the server.
///
/// The `id` is stable for the lifetime of the task; editing or toggling
/// never changes `id` or `user_id`. Timestamps are monotonic per entity:
/// `updated_at >= created_at` and never moves backwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a task. The server assigns everything else.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update payload; absent fields are omitted from the request body
/// and left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Field-level validation failure, reported before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at most 255 characters (got {0})")]
    TitleTooLong(usize),
    #[error("Description must be at most 1000 characters (got {0})")]
    DescriptionTooLong(usize),
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if len > TITLE_MAX_LEN {
        return Err(ValidationError::TitleTooLong(len));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    let len = description.chars().count();
    if len > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::DescriptionTooLong(len));
    }
    Ok(())
}

impl TaskDraft {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    /// Checks the draft against the server bounds without touching the
    /// network.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// True when no field is supplied; the engine treats such a patch as a
    /// no-op instead of sending an empty body.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Validates the supplied fields by the same bounds as a draft.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_within_bounds_is_valid() {
        let draft = TaskDraft::new(&"a".repeat(TITLE_MAX_LEN), Some("details"));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::completed(true).is_empty());
    }
}
