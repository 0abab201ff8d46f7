use serenity::all::{Client, GatewayIntents};
use serenity::async_trait;
use std::{sync::Arc, time::Duration};
use tokio::time::timeout;

use crate::{
    client::{BotConnection, BotConnector},
    discord::{connection::SerenityConnection, handler::ReadyHandler},
    error::ConnectionError,
};

/// Gateway intents requested for every login.
///
/// `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents.
pub const DEFAULT_INTENTS: GatewayIntents = GatewayIntents::GUILDS
    .union(GatewayIntents::GUILD_MEMBERS)
    .union(GatewayIntents::GUILD_MESSAGES)
    .union(GatewayIntents::MESSAGE_CONTENT);

/// Creates Serenity clients for user-supplied bot tokens.
pub struct SerenityConnector {
    intents: GatewayIntents,
    ready_timeout: Duration,
}

impl SerenityConnector {
    /// Creates a new connector.
    ///
    /// # Arguments
    /// - `intents` - Gateway intents requested for every login
    /// - `ready_timeout` - Upper bound for each of the ready and cache-ready waits
    pub fn new(intents: GatewayIntents, ready_timeout: Duration) -> Self {
        Self {
            intents,
            ready_timeout,
        }
    }
}

#[async_trait]
impl BotConnector for SerenityConnector {
    /// Logs in with the provided token.
    ///
    /// The token is first checked against the HTTP API so a rejected credential fails fast,
    /// then the gateway client is started on its own task. The connection is returned once the
    /// gateway reports ready and the guild cache is filled. A cache that does not fill within
    /// the timeout is logged and tolerated, since guilds may be unavailable during outages.
    async fn connect(&self, token: &str) -> Result<Arc<dyn BotConnection>, ConnectionError> {
        let (handler, ready_rx, cache_rx) = ReadyHandler::with_signals();

        let mut client = Client::builder(token, self.intents)
            .event_handler(handler)
            .await?;

        let user = client
            .http
            .get_current_user()
            .await
            .map_err(|e| ConnectionError::LoginFailed(e.to_string()))?;

        let http = client.http.clone();
        let cache = client.cache.clone();
        let shard_manager = client.shard_manager.clone();

        let task = tokio::spawn(async move {
            if let Err(e) = client.start().await {
                tracing::warn!("Discord client stopped: {}", e);
            }
        });

        let ctx = match timeout(self.ready_timeout, ready_rx).await {
            Ok(Ok(ctx)) => ctx,
            Ok(Err(_)) => {
                task.abort();
                return Err(ConnectionError::LoginFailed(
                    "Gateway closed before becoming ready".to_string(),
                ));
            }
            Err(_) => {
                shard_manager.shutdown_all().await;
                task.abort();
                return Err(ConnectionError::ReadyTimeout(self.ready_timeout.as_secs()));
            }
        };

        if timeout(self.ready_timeout, cache_rx).await.is_err() {
            tracing::warn!(
                "Guild cache for {} not ready after {} seconds, continuing with partial cache",
                user.name,
                self.ready_timeout.as_secs()
            );
        }

        tracing::info!("Logged in as {} ({})", user.name, user.id);

        Ok(Arc::new(SerenityConnection::new(
            user.id.get(),
            ctx,
            http,
            cache,
            shard_manager,
            task,
        )))
    }
}
