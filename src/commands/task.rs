//! Task management command surface.
//!
//! Every subcommand mounts the sync engine the same way: read the server
//! configuration, gate on an existing session (no task fetch happens for a
//! signed-out user), load the authoritative list, then run the requested
//! operation and render the resulting collection snapshot.
//!
//! A lost session at any point resolves to a sign-in hint, the CLI
//! equivalent of the redirect a browser client would perform. All other
//! failures surface as dismissible banner text from the engine.

use crate::api::{AuthTransport, TaskClient};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::libs::sync::{EngineSignal, SyncEngine};
use crate::libs::task::{TaskDraft, TaskPatch};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

type Engine = SyncEngine<TaskClient<SessionStore>>;

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommands>,
}

#[derive(Debug, Subcommand)]
enum TaskCommands {
    #[command(about = "Show all tasks")]
    List,
    #[command(about = "Create a new task")]
    New {
        #[arg(required = true)]
        title: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    #[command(about = "Edit a task's title and description")]
    Edit { id: i64 },
    #[command(about = "Toggle a task's completion state")]
    Done { id: i64 },
    #[command(about = "Delete a task")]
    Delete { id: i64 },
}

pub async fn cmd(task_args: TaskArgs) -> Result<()> {
    let config = Config::read()?;
    let server = config.server()?;

    // Session gate: checked once before any task fetch
    let store = SessionStore::new()?;
    if store.session().is_none() {
        msg_warning!(Message::NotLoggedIn);
        return Ok(());
    }

    let mut engine = SyncEngine::new(TaskClient::new(AuthTransport::new(&server.api_url, store)));
    if engine.load().await == EngineSignal::RedirectToSignIn {
        msg_warning!(Message::SessionExpired);
        return Ok(());
    }

    let signal = match task_args.command.unwrap_or(TaskCommands::List) {
        TaskCommands::List => EngineSignal::Done,
        TaskCommands::New { title, description } => {
            let signal = engine.create(TaskDraft::new(&title, description.as_deref())).await;
            if signal == EngineSignal::Done && engine.error().is_none() && engine.field_error().is_none() {
                msg_success!(Message::TaskCreated(title));
            }
            signal
        }
        TaskCommands::Edit { id } => edit(&mut engine, id).await,
        TaskCommands::Done { id } => {
            let signal = engine.toggle(id).await;
            if signal == EngineSignal::Done && engine.error().is_none() {
                if let Some(task) = engine.snapshot().iter().find(|task| task.id == id) {
                    if task.completed {
                        msg_success!(Message::TaskCompleted(task.title.clone()));
                    } else {
                        msg_success!(Message::TaskReopened(task.title.clone()));
                    }
                } else {
                    msg_error!(Message::TaskNotInList(id));
                }
            }
            signal
        }
        TaskCommands::Delete { id } => {
            let signal = engine.delete(id).await;
            if signal == EngineSignal::Done && engine.error().is_none() {
                msg_success!(Message::TaskDeleted(id));
            }
            signal
        }
    };

    if signal == EngineSignal::RedirectToSignIn {
        msg_warning!(Message::SessionExpired);
        return Ok(());
    }

    report_errors(&engine);
    if engine.snapshot().is_empty() {
        if engine.error().is_none() {
            msg_warning!(Message::TasksEmpty);
        }
        return Ok(());
    }
    msg_print!(Message::TasksHeader, true);
    View::tasks(engine.snapshot())?;
    Ok(())
}

/// Interactive edit flow: prompts with the current values as defaults and
/// submits only the fields that changed.
async fn edit(engine: &mut Engine, id: i64) -> EngineSignal {
    let Some(task) = engine.snapshot().iter().find(|task| task.id == id).cloned() else {
        msg_error!(Message::TaskNotInList(id));
        return EngineSignal::Done;
    };

    engine.begin_edit(id);

    let prompts = (|| -> Result<(String, String)> {
        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Title")
            .default(task.title.clone())
            .interact_text()?;
        let description: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Description")
            .default(task.description.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        Ok((title, description))
    })();

    let (title, description) = match prompts {
        Ok(values) => values,
        Err(_) => {
            // Terminal I/O failure is outside the classified error paths
            engine.mark_critical();
            return EngineSignal::Done;
        }
    };

    let patch = TaskPatch {
        title: (title != task.title).then_some(title),
        description: (description != task.description.clone().unwrap_or_default()).then_some(description),
        completed: None,
    };
    if patch.is_empty() {
        engine.cancel_edit();
        msg_warning!(Message::NoChangesDetected);
        return EngineSignal::Done;
    }

    let signal = engine.edit(id, patch).await;
    if signal == EngineSignal::Done && engine.editing().is_none() && engine.error().is_none() && engine.field_error().is_none() {
        if let Some(task) = engine.snapshot().iter().find(|task| task.id == id) {
            msg_success!(Message::TaskUpdated(task.title.clone()));
        }
    }
    signal
}

fn report_errors(engine: &Engine) {
    if let Some(field_error) = engine.field_error() {
        msg_error!(field_error);
    }
    if let Some(banner) = engine.error() {
        msg_error!(banner);
    }
}
