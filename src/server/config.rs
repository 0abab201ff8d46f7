use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_LOGIN_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub port: u16,
    pub bind_address: String,

    /// Directory served for every path outside the API.
    pub static_dir: String,

    /// Upper bound for the gateway handshake during login.
    pub login_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            port: parse_env_var("PORT", DEFAULT_PORT)?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            login_timeout: Duration::from_secs(parse_env_var(
                "LOGIN_TIMEOUT_SECS",
                DEFAULT_LOGIN_TIMEOUT_SECS,
            )?),
        })
    }

    /// Socket address the HTTP server listens on.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
///
/// # Returns
/// - `Ok(T)` - Parsed value, or `default` if the variable is not set
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - Variable set but not parsable as `T`
fn parse_env_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(default);
    };

    value.parse::<T>().map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }
        .into()
    })
}
