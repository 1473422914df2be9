//! Configuration management for the taskdeck application.
//!
//! Settings are stored as JSON in the platform data directory (see
//! [`DataStorage`]). Each integration is an optional module; today there is
//! one, the task server connection. Sensitive data never lands here: the
//! bearer token lives in separate session storage managed by
//! `libs::session`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::libs::config::Config;
//!
//! // Load existing configuration or create default
//! let config = Config::read()?;
//!
//! // Run interactive configuration setup
//! Config::init()?.save()?;
//! # anyhow::Ok(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Task server connection settings.
///
/// The base URL is injected into the request layer's constructor rather
/// than read from ambient global state, which keeps the transport testable
/// in isolation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task service API.
    ///
    /// Example: `https://tasks.example.com`. Endpoint paths such as
    /// `/api/v1/tasks` are appended by the request layer.
    pub api_url: String,
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Task server".to_string(),
        }
    }

    /// Runs the interactive setup prompt, using existing values as
    /// defaults when re-configuring.
    pub fn init(config: &Option<ServerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self { api_url: String::new() });

        msg_print!(Message::ConfigModuleServer);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}

/// Main configuration container for the entire application.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&config_path)?;
        serde_json::from_str(&raw).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&config_path).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard over the existing file.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        config.server = Some(ServerConfig::init(&config.server)?);
        Ok(config)
    }

    /// Returns the server module or fails with a hint to run `init`.
    pub fn server(&self) -> Result<&ServerConfig> {
        self.server.as_ref().ok_or_else(|| msg_error_anyhow!(Message::ConfigNotInitialized))
    }
}
