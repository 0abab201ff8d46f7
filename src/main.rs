mod model;
mod server;

use connection::discord::{SerenityConnector, DEFAULT_INTENTS};
use std::sync::Arc;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let connector = SerenityConnector::new(DEFAULT_INTENTS, config.login_timeout);
    let state = AppState::new(Arc::new(connector));

    tracing::info!("Starting server");

    startup::serve(&config, state).await
}
