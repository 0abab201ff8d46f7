use connection::BotConnector;
use std::collections::HashMap;
use std::sync::Arc;

use crate::fake::{FakeBot, FakeConnector};

/// Test context containing the fake connector and the bots it can log in.
pub struct TestContext {
    connector: Arc<FakeConnector>,
    bots: HashMap<String, FakeBot>,
}

impl TestContext {
    pub(crate) fn new(connector: Arc<FakeConnector>, bots: HashMap<String, FakeBot>) -> Self {
        Self { connector, bots }
    }

    /// Returns the connector as the trait object the application expects.
    pub fn connector(&self) -> Arc<dyn BotConnector> {
        self.connector.clone()
    }

    /// Returns the concrete fake connector for login assertions.
    pub fn fake_connector(&self) -> &FakeConnector {
        &self.connector
    }

    /// Returns the remote state handle of the bot registered under `token`.
    ///
    /// # Panics
    /// - If no bot was registered under `token` (indicates a broken test setup)
    pub fn bot(&self, token: &str) -> &FakeBot {
        self.bots
            .get(token)
            .unwrap_or_else(|| panic!("No fake bot registered for token {}", token))
    }
}
