//! Optimistic task-synchronization engine.
//!
//! The engine is the single owner of the in-memory task collection. The
//! presentation layer only ever reads a snapshot; every mutation goes
//! through an engine method that issues the matching repository call and
//! commits or rolls back based on the outcome.
//!
//! ## Operation Policy
//!
//! - **Load**: replaces the collection wholesale with the server's list
//! - **Create**: server-confirmed only; the id is server-assigned and cannot
//!   be synthesized safely, so the new task is prepended after the server
//!   answers. An in-flight flag blocks duplicate submissions from the same
//!   form instance
//! - **Toggle-complete**: optimistic; the `completed` flag is inverted
//!   locally before the network call, with a full snapshot captured first.
//!   On success the affected entry is replaced with the server's task
//!   (server is authoritative for `updated_at`); on failure the exact
//!   pre-mutation snapshot is restored
//! - **Edit**: server-confirmed; on failure edit mode stays active so the
//!   user can retry without re-entering data
//! - **Delete**: server-confirmed; not-found ("already deleted") and
//!   forbidden ("no permission") get distinct user-facing messages
//!
//! ## Error Classification
//!
//! Classified failures never escape as raw errors. `Unauthenticated`
//! resolves to [`EngineSignal::RedirectToSignIn`] and never produces a
//! banner; everything else becomes a dismissible banner string, using the
//! server's `detail` text for validation errors and a fixed per-operation
//! fallback otherwise. An unclassified runtime failure puts the engine into
//! a critical state that refuses further mutations.
//!
//! ## Concurrency
//!
//! The engine is single-owner: all methods take `&mut self` and suspend
//! only at network boundaries. Operations on one task id are deliberately
//! not serialized against each other; when a toggle and a delete race on
//! the same id, the last response to arrive wins. Collection updates are
//! always atomic snapshot-replaces (a new vector is built and swapped in),
//! never partial in-place field mutation visible mid-update.

use crate::api::{ApiError, TaskRepository};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskDraft, TaskPatch, ValidationError};
use crate::msg_debug;

/// Completion signal of an engine operation.
///
/// Every action resolves to a signal the caller can await, both to know
/// when to clear a transient "submitting" indicator and to learn whether
/// the whole view must be abandoned for sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSignal {
    /// The operation finished; consult the engine state for the result.
    Done,
    /// The session is gone. The view is about to be discarded, so no
    /// banner is raised and no rollback noise is produced.
    RedirectToSignIn,
}

/// Single-owner sync engine over a task repository.
pub struct SyncEngine<R> {
    repo: R,
    tasks: Vec<Task>,
    loading: bool,
    submitting: bool,
    editing: Option<i64>,
    error: Option<String>,
    field_error: Option<ValidationError>,
    critical: bool,
}

impl<R: TaskRepository> SyncEngine<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            tasks: Vec::new(),
            loading: true,
            submitting: false,
            editing: None,
            error: None,
            field_error: None,
            critical: false,
        }
    }

    // === READ-ONLY VIEW SURFACE ===

    /// Read-only snapshot of the collection, newest-created-first.
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while a create request is in flight; blocks duplicate
    /// submissions from the same form but not unrelated operations.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Id of the task currently in edit mode, if any.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Current dismissible banner text, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current field-level validation error, if any.
    pub fn field_error(&self) -> Option<&ValidationError> {
        self.field_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        if !self.critical {
            self.error = None;
        }
        self.field_error = None;
    }

    /// True once an unclassified runtime failure has poisoned the view.
    pub fn has_critical_error(&self) -> bool {
        self.critical
    }

    /// Records an unclassified runtime failure. The collection may no
    /// longer match server truth, so all further mutations are refused
    /// until the process is restarted.
    pub fn mark_critical(&mut self) {
        self.critical = true;
        self.error = Some(Message::CriticalError.to_string());
    }

    // === EDIT MODE ===

    pub fn begin_edit(&mut self, id: i64) {
        self.editing = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // === OPERATIONS ===

    /// Fetches the full list and replaces the collection wholesale.
    ///
    /// On failure the collection is left empty with a recoverable banner;
    /// a lost session resolves to a redirect instead.
    pub async fn load(&mut self) -> EngineSignal {
        self.loading = true;
        self.error = None;

        let result = self.repo.list().await;
        self.loading = false;

        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                EngineSignal::Done
            }
            Err(ApiError::Unauthenticated) => EngineSignal::RedirectToSignIn,
            Err(err) => {
                self.tasks = Vec::new();
                self.raise_banner(&err, Message::TasksLoadFailed)
            }
        }
    }

    /// Creates a task server-side and prepends the confirmed result.
    ///
    /// The draft is validated against the server bounds first; an invalid
    /// draft raises a field-level error and no request is sent. On failure
    /// the collection is left untouched.
    pub async fn create(&mut self, draft: TaskDraft) -> EngineSignal {
        if self.critical || self.submitting {
            return EngineSignal::Done;
        }
        self.error = None;
        self.field_error = None;

        if let Err(err) = draft.validate() {
            self.field_error = Some(err);
            return EngineSignal::Done;
        }

        self.submitting = true;
        let result = self.repo.create(&draft).await;
        self.submitting = false;

        match result {
            Ok(task) => {
                // Prepend via snapshot-replace; the id is exactly the one
                // the server returned.
                let mut next = Vec::with_capacity(self.tasks.len() + 1);
                next.push(task);
                next.extend(self.tasks.iter().cloned());
                self.tasks = next;
                EngineSignal::Done
            }
            Err(ApiError::Unauthenticated) => EngineSignal::RedirectToSignIn,
            Err(err) => self.raise_banner(&err, Message::TaskCreateFailed),
        }
    }

    /// Inverts a task's `completed` flag optimistically, then reconciles
    /// with the server.
    ///
    /// A snapshot of the pre-mutation collection is captured first; any
    /// failure other than a lost session restores it exactly. On success
    /// the affected entry is replaced with the server's returned task.
    pub async fn toggle(&mut self, id: i64) -> EngineSignal {
        if self.critical {
            return EngineSignal::Done;
        }
        self.error = None;

        let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
            return EngineSignal::Done;
        };
        let completed = !task.completed;

        let snapshot: Vec<Task> = self.tasks.clone();
        self.replace_entry_with(id, |task| Task { completed, ..task.clone() });

        match self.repo.update(id, &TaskPatch::completed(completed)).await {
            Ok(server_task) => {
                // Server is authoritative for updated_at and any
                // server-side side effects.
                self.replace_entry(server_task);
                EngineSignal::Done
            }
            Err(ApiError::Unauthenticated) => EngineSignal::RedirectToSignIn,
            Err(err) => {
                msg_debug!("toggle of task {} failed, rolling back: {}", id, err);
                self.tasks = snapshot;
                self.raise_banner(&err, Message::TaskUpdateFailed)
            }
        }
    }

    /// Applies a title/description edit, server-confirmed.
    ///
    /// The local entry changes only after the server answers; on failure
    /// edit mode stays active so the user can retry without re-entering
    /// data.
    pub async fn edit(&mut self, id: i64, patch: TaskPatch) -> EngineSignal {
        if self.critical {
            return EngineSignal::Done;
        }
        self.error = None;
        self.field_error = None;

        if patch.is_empty() {
            self.editing = None;
            return EngineSignal::Done;
        }
        if let Err(err) = patch.validate() {
            self.field_error = Some(err);
            return EngineSignal::Done;
        }

        match self.repo.update(id, &patch).await {
            Ok(server_task) => {
                self.replace_entry(server_task);
                self.editing = None;
                EngineSignal::Done
            }
            Err(ApiError::Unauthenticated) => EngineSignal::RedirectToSignIn,
            Err(err) => self.raise_banner(&err, Message::TaskUpdateFailed),
        }
    }

    /// Deletes a task; the entry leaves the collection only after the
    /// server confirms.
    pub async fn delete(&mut self, id: i64) -> EngineSignal {
        if self.critical {
            return EngineSignal::Done;
        }
        self.error = None;

        match self.repo.delete(id).await {
            Ok(()) => {
                self.tasks = self.tasks.iter().filter(|task| task.id != id).cloned().collect();
                EngineSignal::Done
            }
            Err(ApiError::Unauthenticated) => EngineSignal::RedirectToSignIn,
            Err(ApiError::NotFound) => {
                self.error = Some(Message::TaskAlreadyDeleted.to_string());
                EngineSignal::Done
            }
            Err(ApiError::Forbidden) => {
                self.error = Some(Message::TaskDeleteForbidden.to_string());
                EngineSignal::Done
            }
            Err(err) => self.raise_banner(&err, Message::TaskDeleteFailed),
        }
    }

    // === CLASSIFIER BRIDGE ===

    /// Turns a classified failure into a dismissible banner.
    ///
    /// Validation errors surface the server's detail text verbatim when
    /// one was provided; every other kind falls back to the fixed
    /// per-operation message.
    fn raise_banner(&mut self, err: &ApiError, fallback: Message) -> EngineSignal {
        self.error = Some(match err.detail() {
            Some(detail) if matches!(err, ApiError::Invalid(_)) => detail.to_string(),
            _ => fallback.to_string(),
        });
        EngineSignal::Done
    }

    /// Replaces the entry matching `server_task.id` via snapshot-replace.
    fn replace_entry(&mut self, server_task: Task) {
        let id = server_task.id;
        self.replace_entry_with(id, |_| server_task.clone());
    }

    fn replace_entry_with(&mut self, id: i64, replacement: impl Fn(&Task) -> Task) {
        self.tasks = self
            .tasks
            .iter()
            .map(|task| if task.id == id { replacement(task) } else { task.clone() })
            .collect();
    }
}
