use crate::libs::{messages::Message, session::SessionStore};
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    SessionStore::new()?.clear()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
