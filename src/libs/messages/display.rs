//! Display implementation for taskdeck application messages.
//!
//! Single source of truth for all user-facing text. The banner strings in
//! the sync-failure section are the exact fallbacks the sync engine shows
//! when the server does not supply its own `detail` text.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::LoginSucceeded => "Signed in successfully".to_string(),
            Message::LoginTokenRejected => "The server rejected this token. Check it and try again".to_string(),
            Message::LoggedOut => "Signed out. The cached session token was removed".to_string(),
            Message::NotLoggedIn => "You are not signed in. Run 'taskdeck login' first".to_string(),
            Message::SessionExpired => "Your session has expired. Sign in again with 'taskdeck login'".to_string(),
            Message::PromptAccessToken => "Paste your access token".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksEmpty => "No tasks yet. Create one with 'taskdeck task new'".to_string(),
            Message::TasksHeader => "📋 My Tasks".to_string(),
            Message::TaskNotInList(id) => format!("Task {} is not in the current list", id),
            Message::NoChangesDetected => "No changes detected".to_string(),

            // === SYNC FAILURE BANNERS ===
            Message::TasksLoadFailed => "Failed to load tasks. Please try again.".to_string(),
            Message::TaskCreateFailed => "Failed to create task. Please try again.".to_string(),
            Message::TaskUpdateFailed => "Failed to update task. Please try again.".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task. Please try again.".to_string(),
            Message::TaskAlreadyDeleted => "Task not found. It may have been already deleted.".to_string(),
            Message::TaskDeleteForbidden => "You don't have permission to delete this task".to_string(),
            Message::CriticalError => "An unexpected error occurred. Please restart and try again.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigNotInitialized => "Server is not configured. Run 'taskdeck init' first".to_string(),
            Message::ConfigModuleServer => "Task server configuration".to_string(),
            Message::PromptApiUrl => "Enter the task server URL".to_string(),
        };
        write!(f, "{}", text)
    }
}
