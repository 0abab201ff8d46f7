//! Session registry mapping session ids to live bot connections.
//!
//! The registry is the only owner of bot connections. A session is either `Active` (its id is
//! in the map) or `Absent`; there is no reconnecting state, and a connection that silently
//! drops keeps its session until an operation against it fails or the session is logged out.
//!
//! Sessions do not expire. They live until logout or process shutdown, when `destroy_all`
//! closes every remaining connection.

use connection::{BotConnection, BotConnector};
use rand::Rng;
use std::{collections::HashMap, sync::Arc};
use tokio::{runtime::Handle, sync::RwLock};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::session::LoginResult,
    service::guild::GuildService,
};

/// Length of generated session ids.
const SESSION_ID_LENGTH: usize = 32;

/// Registry of logged-in bot sessions.
///
/// Clones share the same map. The lock is only held for map access, never across a remote
/// call.
#[derive(Clone)]
pub struct SessionRegistry {
    /// Connector used to log bots in.
    connector: Arc<dyn BotConnector>,
    /// Live connections keyed by session id.
    sessions: Arc<RwLock<HashMap<String, Arc<dyn BotConnection>>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    ///
    /// # Arguments
    /// - `connector` - Connector used by `create` to log bots in
    pub fn new(connector: Arc<dyn BotConnector>) -> Self {
        Self {
            connector,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Logs a bot in and registers a new session for it.
    ///
    /// After login the bot's profile is fetched and every cached guild is listed, with a
    /// best-effort invite minted per guild. Logging in the same token twice creates two
    /// independent sessions.
    ///
    /// # Arguments
    /// - `token` - Discord bot token
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - New session id, bot profile and guilds
    /// - `Err(AppError::AuthErr(LoginFailed))` - Token rejected, gateway unreachable, or
    ///   profile fetch failed
    pub async fn create(&self, token: &str) -> Result<LoginResult, AppError> {
        let connection = self.connector.connect(token).await.map_err(|e| {
            tracing::info!("Bot login failed: {}", e);
            AuthError::LoginFailed
        })?;

        let pending = PendingConnection::new(connection);

        let user = match pending.connection().current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to fetch bot profile after login: {}", e);
                pending.close().await;
                return Err(AuthError::LoginFailed.into());
            }
        };

        let guilds = GuildService::new(pending.connection().as_ref())
            .cached_with_invites()
            .await;

        let session_id = self.insert(pending.connection().clone()).await;
        pending.settle();

        tracing::info!(
            "Bot {} ({}) logged in with {} guilds",
            user.username,
            user.id,
            guilds.len()
        );

        Ok(LoginResult {
            session_id,
            user,
            guilds,
        })
    }

    /// Resolves a session id to its connection.
    ///
    /// # Returns
    /// - `Ok(Arc<dyn BotConnection>)` - Connection of the active session
    /// - `Err(AppError::AuthErr(SessionExpired))` - Unknown or logged-out session id
    pub async fn lookup(&self, session_id: &str) -> Result<Arc<dyn BotConnection>, AppError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| AuthError::SessionExpired.into())
    }

    /// Removes a session and closes its connection.
    ///
    /// Destroying an unknown session id is a no-op.
    ///
    /// # Returns
    /// - `true` - A session was removed
    /// - `false` - No session existed under `session_id`
    pub async fn destroy(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().await.remove(session_id);

        match removed {
            Some(connection) => {
                connection.shutdown().await;
                tracing::info!("Session for bot {} logged out", connection.user_id());
                true
            }
            None => false,
        }
    }

    /// Removes every session and closes all connections.
    ///
    /// # Returns
    /// - `usize` - Number of sessions closed
    pub async fn destroy_all(&self) -> usize {
        let drained: Vec<_> = self.sessions.write().await.drain().collect();

        for (_, connection) in &drained {
            connection.shutdown().await;
        }

        drained.len()
    }

    /// Number of active sessions.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Stores a connection under a freshly generated session id.
    async fn insert(&self, connection: Arc<dyn BotConnection>) -> String {
        let mut sessions = self.sessions.write().await;

        let session_id = loop {
            let candidate = Self::generate_session_id();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        sessions.insert(session_id.clone(), connection);

        session_id
    }

    /// Generates a random alphanumeric session id.
    fn generate_session_id() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..SESSION_ID_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

/// Freshly opened connection that is shut down unless it ends up in the registry.
///
/// Covers a login future dropped mid-way, e.g. when the client disconnects while invites are
/// minted.
struct PendingConnection {
    connection: Arc<dyn BotConnection>,
    settled: bool,
}

impl PendingConnection {
    fn new(connection: Arc<dyn BotConnection>) -> Self {
        Self {
            connection,
            settled: false,
        }
    }

    fn connection(&self) -> &Arc<dyn BotConnection> {
        &self.connection
    }

    /// Marks the connection as owned by the registry.
    fn settle(mut self) {
        self.settled = true;
    }

    /// Shuts the connection down in place.
    async fn close(mut self) {
        self.settled = true;
        self.connection.shutdown().await;
    }
}

impl Drop for PendingConnection {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        tracing::info!(
            "Login for bot {} abandoned, closing its connection",
            self.connection.user_id()
        );

        if let Ok(handle) = Handle::try_current() {
            let connection = self.connection.clone();
            handle.spawn(async move {
                connection.shutdown().await;
            });
        }
    }
}
