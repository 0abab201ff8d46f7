//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by the
//! request handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use connection::BotConnector;
use std::sync::Arc;

use crate::server::service::session::SessionRegistry;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the session registry shares its map behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Registry of logged-in bot sessions.
    ///
    /// Every endpoint except login resolves its session id through this registry first.
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Creates a new application state with an empty session registry.
    ///
    /// # Arguments
    /// - `connector` - Connector used to log bots in
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(connector: Arc<dyn BotConnector>) -> Self {
        Self {
            sessions: SessionRegistry::new(connector),
        }
    }
}
