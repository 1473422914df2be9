//! Cached session token storage.
//!
//! The identity provider itself is out of scope: `taskdeck login` stores a
//! bearer token it was handed, and this module is the [`TokenProvider`] the
//! request layer consults before every call. The token file is re-read on
//! each request rather than cached in memory, so an external refresh (or a
//! `taskdeck logout` in another terminal) takes effect immediately.

use crate::api::TokenProvider;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const SESSION_TOKEN_FILE: &str = ".session_token";

/// Disk-backed bearer-token store in the application data directory.
///
/// Construction fails when the data directory cannot be created, so an
/// unusable storage location surfaces as an error instead of masquerading
/// as "not logged in".
#[derive(Debug, Clone)]
pub struct SessionStore {
    token_path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            token_path: DataStorage::new().get_path(SESSION_TOKEN_FILE)?,
        })
    }

    /// Persists a bearer token for subsequent requests.
    pub fn save(&self, token: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(&self.token_path)?;
        file.write_all(token.trim().as_bytes())?;
        Ok(())
    }

    /// Removes the cached token. Missing files are not an error.
    pub fn clear(&self) -> Result<()> {
        if self.token_path.exists() {
            fs::remove_file(&self.token_path)?;
        }
        Ok(())
    }

    /// Reports whether a session exists at all. Checked once before the
    /// task view is constructed, so an unauthenticated user is redirected
    /// to sign-in without any task fetch.
    pub fn session(&self) -> Option<String> {
        self.token()
    }
}

impl TokenProvider for SessionStore {
    fn token(&self) -> Option<String> {
        let token = fs::read_to_string(&self.token_path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }
}
