//! Typed task repository client for the `/api/v1/tasks` endpoints.
//!
//! Builds the four CRUD operations on top of [`AuthTransport`] and
//! translates every [`RequestOutcome`] into either a parsed [`Task`] value
//! or a typed [`ApiError`]. The status mapping is fixed by the server
//! contract:
//!
//! | HTTP status | Error |
//! |-------------|-------|
//! | 401         | `Unauthenticated` |
//! | 404         | `NotFound` |
//! | 403         | `Forbidden` |
//! | 422 / 400   | `Invalid(detail)` |
//! | no response | `Network(detail)` |
//! | anything else | `Unknown(detail)` |
//!
//! The operations are exposed behind the [`TaskRepository`] trait so the
//! sync engine can be driven by mock repositories in tests.

use super::{AuthTransport, RequestOutcome, TokenProvider, NETWORK_FAILURE_STATUS};
use crate::libs::task::{Task, TaskDraft, TaskPatch};
use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

const TASKS_ENDPOINT: &str = "/api/v1/tasks";

/// Classified failure of a repository operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No token available, or the server answered 401. Always handled as a
    /// redirect to sign-in, never as a banner.
    #[error("authentication required")]
    Unauthenticated,
    /// The task does not exist server-side (anymore).
    #[error("task not found")]
    NotFound,
    /// The task belongs to a different owner.
    #[error("permission denied")]
    Forbidden,
    /// Server-side validation rejected the payload; carries the server's
    /// detail text when one was provided.
    #[error("validation failed: {0}")]
    Invalid(String),
    /// The server could not be reached at all.
    #[error("network error: {0}")]
    Network(String),
    /// Any other failure mode.
    #[error("request failed: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Maps a non-2xx, non-401 HTTP outcome to the error taxonomy.
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            NETWORK_FAILURE_STATUS => ApiError::Network(detail),
            404 => ApiError::NotFound,
            403 => ApiError::Forbidden,
            400 | 422 => ApiError::Invalid(detail),
            _ => ApiError::Unknown(detail),
        }
    }

    /// Server-provided detail text, when this error kind carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Invalid(detail) | ApiError::Unknown(detail) => {
                if detail.is_empty() {
                    None
                } else {
                    Some(detail)
                }
            }
            _ => None,
        }
    }
}

/// The four task operations the sync engine depends on.
///
/// Implemented by [`TaskClient`] for the real service and by mock
/// repositories in tests.
#[allow(async_fn_in_trait)]
pub trait TaskRepository {
    /// Fetches all tasks owned by the authenticated principal.
    async fn list(&self) -> Result<Vec<Task>, ApiError>;

    /// Creates a task; the returned task carries the server-assigned id,
    /// owner and timestamps.
    async fn create(&self, draft: &TaskDraft) -> Result<Task, ApiError>;

    /// Applies a partial update and returns the full merged task.
    async fn update(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError>;

    /// Deletes a task after the server has verified ownership.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// Task repository client bound to one transport.
pub struct TaskClient<P> {
    transport: AuthTransport<P>,
}

impl<P: TokenProvider> TaskClient<P> {
    pub fn new(transport: AuthTransport<P>) -> Self {
        Self { transport }
    }

    /// Folds a transport outcome into the typed error taxonomy, handing the
    /// parsed body to `parse` on success.
    fn interpret<T>(outcome: RequestOutcome, parse: impl FnOnce(Option<Value>) -> Result<T, ApiError>) -> Result<T, ApiError> {
        match outcome {
            RequestOutcome::Success(body) => parse(body),
            RequestOutcome::Unauthenticated => Err(ApiError::Unauthenticated),
            RequestOutcome::Failed { status, detail } => Err(ApiError::from_status(status, detail)),
        }
    }

    fn parse_task(body: Option<Value>) -> Result<Task, ApiError> {
        let body = body.ok_or_else(|| ApiError::Unknown("empty response body".to_string()))?;
        serde_json::from_value(body).map_err(|err| ApiError::Unknown(format!("malformed task payload: {err}")))
    }
}

impl<P: TokenProvider> TaskRepository for TaskClient<P> {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let outcome = self.transport.send(Method::GET, TASKS_ENDPOINT, None).await;
        Self::interpret(outcome, |body| {
            let body = body.ok_or_else(|| ApiError::Unknown("empty response body".to_string()))?;
            serde_json::from_value(body).map_err(|err| ApiError::Unknown(format!("malformed task list: {err}")))
        })
    }

    async fn create(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let payload = serde_json::to_value(draft).map_err(|err| ApiError::Unknown(err.to_string()))?;
        let outcome = self.transport.send(Method::POST, TASKS_ENDPOINT, Some(payload)).await;
        Self::interpret(outcome, Self::parse_task)
    }

    async fn update(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
        let payload = serde_json::to_value(patch).map_err(|err| ApiError::Unknown(err.to_string()))?;
        let endpoint = format!("{TASKS_ENDPOINT}/{id}");
        let outcome = self.transport.send(Method::PUT, &endpoint, Some(payload)).await;
        Self::interpret(outcome, Self::parse_task)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = format!("{TASKS_ENDPOINT}/{id}");
        let outcome = self.transport.send(Method::DELETE, &endpoint, None).await;
        Self::interpret(outcome, |_| Ok(()))
    }
}
