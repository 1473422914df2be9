//! # Taskdeck - optimistic task-synchronization client
//!
//! A command-line client for a remote task service. Tasks live in an
//! authoritative server store reachable only over an authenticated HTTP
//! API; taskdeck keeps its local view consistent with that store while
//! staying responsive through optimistic updates.
//!
//! ## Features
//!
//! - **Bearer Authentication**: Every request carries a token obtained
//!   fresh from the session store
//! - **Optimistic Toggling**: Completion toggles apply locally before the
//!   server confirms, with full snapshot rollback on failure
//! - **Server-Confirmed Writes**: Create, edit and delete wait for the
//!   server, which owns ids, timestamps and ownership checks
//! - **Error Classification**: Auth-expired, not-found, forbidden,
//!   validation and network failures are surfaced as distinct user-facing
//!   outcomes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
