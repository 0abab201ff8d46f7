use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    context::TestContext,
    fake::{FakeBot, FakeConnector},
};

/// Builder for creating test contexts with a set of fake bot accounts.
///
/// Provides a fluent interface for registering fake bots under the tokens that log them in,
/// then call `build()` to create the configured test context. Tokens that were never
/// registered are rejected by the connector like an invalid Discord token.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fake::FakeBot};
///
/// let test = TestBuilder::new()
///     .with_bot("TOKEN_A", FakeBot::builder(1000, "Alpha").build())
///     .with_bot("TOKEN_B", FakeBot::builder(2000, "Beta").build())
///     .build();
/// ```
pub struct TestBuilder {
    /// Fake bots keyed by the token that logs them in.
    bots: HashMap<String, FakeBot>,
}

impl TestBuilder {
    /// Creates a new test builder with no bots registered.
    pub fn new() -> Self {
        Self {
            bots: HashMap::new(),
        }
    }

    /// Registers a fake bot under a bot token.
    ///
    /// # Arguments
    /// - `token` - Token accepted by the connector for this bot
    /// - `bot` - Remote state of the bot account
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_bot(mut self, token: &str, bot: FakeBot) -> Self {
        self.bots.insert(token.to_string(), bot);
        self
    }

    /// Builds the test context.
    pub fn build(self) -> TestContext {
        let connector = Arc::new(FakeConnector::new(self.bots.clone()));

        TestContext::new(connector, self.bots)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
