//! Core library modules for the taskdeck application.
//!
//! Serves as the main entry point for all taskdeck library components.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Task Synchronization**: Optimistic sync engine with snapshot rollback
//! - **Session Handling**: Cached bearer-token storage and lookup
//! - **User Interface**: Console table rendering

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod session;
pub mod sync;
pub mod task;
pub mod view;
