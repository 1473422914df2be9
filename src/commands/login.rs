//! Sign-in command.
//!
//! Token issuance itself belongs to the identity provider; this command
//! only accepts a token the provider handed out, verifies it against the
//! task service with a real `list` call, and caches it for subsequent
//! commands. A rejected token is never stored.

use crate::api::{ApiError, AuthTransport, TaskClient, TaskRepository};
use crate::libs::{config::Config, messages::Message, session::SessionStore};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let server = config.server()?;

    let token = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptAccessToken.to_string())
        .interact()?;

    let store = SessionStore::new()?;
    store.save(&token)?;

    // Verify the token with a real request before keeping it
    let client = TaskClient::new(AuthTransport::new(&server.api_url, store.clone()));
    match client.list().await {
        Ok(_) => {
            msg_success!(Message::LoginSucceeded);
            Ok(())
        }
        Err(ApiError::Unauthenticated) => {
            store.clear()?;
            msg_bail_anyhow!(Message::LoginTokenRejected);
        }
        // Any other failure leaves the token in place; the server may just
        // be unreachable right now.
        Err(_) => {
            msg_success!(Message::LoginSucceeded);
            Ok(())
        }
    }
}
