use connection::{BotConnection, BotConnector, ConnectionError};
use serenity::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use crate::fake::{bot::FakeBot, connection::FakeConnection};

/// Connector accepting only the tokens of registered fake bots.
pub struct FakeConnector {
    bots: HashMap<String, FakeBot>,
    logins: AtomicUsize,
}

impl FakeConnector {
    pub fn new(bots: HashMap<String, FakeBot>) -> Self {
        Self {
            bots,
            logins: AtomicUsize::new(0),
        }
    }

    /// Number of successful logins so far.
    pub fn login_count(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BotConnector for FakeConnector {
    async fn connect(&self, token: &str) -> Result<Arc<dyn BotConnection>, ConnectionError> {
        let Some(bot) = self.bots.get(token) else {
            return Err(ConnectionError::LoginFailed(
                "An invalid token was provided.".to_string(),
            ));
        };

        self.logins.fetch_add(1, Ordering::SeqCst);

        Ok(Arc::new(FakeConnection::new(bot.clone())))
    }
}
