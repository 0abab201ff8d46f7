//! Gateway event handler for login readiness.
//!
//! The handler turns two gateway events into one-shot signals the connector waits on:
//! - `ready` - Fired once the gateway handshake succeeds; carries the shard `Context` needed
//!   for presence updates
//! - `cache_ready` - Fired once every guild announced in `ready` has been received
//!
//! A bot in no guilds never receives `cache_ready`, so `ready` signals both in that case.

use serenity::all::{Context, EventHandler, GuildId, Ready};
use serenity::async_trait;
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Discord event handler signalling login progress.
pub struct ReadyHandler {
    ready_tx: Mutex<Option<oneshot::Sender<Context>>>,
    cache_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl ReadyHandler {
    /// Creates a handler and the receivers for its ready and cache-ready signals.
    ///
    /// # Returns
    /// - `(ReadyHandler, ready receiver, cache-ready receiver)`
    pub fn with_signals() -> (Self, oneshot::Receiver<Context>, oneshot::Receiver<()>) {
        let (ready_tx, ready_rx) = oneshot::channel();
        let (cache_tx, cache_rx) = oneshot::channel();

        let handler = Self {
            ready_tx: Mutex::new(Some(ready_tx)),
            cache_tx: Mutex::new(Some(cache_tx)),
        };

        (handler, ready_rx, cache_rx)
    }

    fn signal_ready(&self, ctx: Context) {
        if let Some(tx) = self.ready_tx.lock().ok().and_then(|mut tx| tx.take()) {
            let _ = tx.send(ctx);
        }
    }

    fn signal_cache_ready(&self) {
        if let Some(tx) = self.cache_tx.lock().ok().and_then(|mut tx| tx.take()) {
            let _ = tx.send(());
        }
    }
}

#[async_trait]
impl EventHandler for ReadyHandler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(
            "{} is connected to Discord ({} guilds)",
            ready.user.name,
            ready.guilds.len()
        );

        let no_guilds = ready.guilds.is_empty();
        self.signal_ready(ctx);

        if no_guilds {
            self.signal_cache_ready();
        }
    }

    /// Called once all guilds announced in the ready event are cached
    async fn cache_ready(&self, _ctx: Context, guilds: Vec<GuildId>) {
        tracing::debug!("Guild cache ready with {} guilds", guilds.len());

        self.signal_cache_ready();
    }
}
