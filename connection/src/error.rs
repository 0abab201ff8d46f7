use thiserror::Error;

/// Failure of a bot connection operation.
///
/// The display text of every variant is what ends up in API error bodies for failed remote
/// operations, so remote messages are kept verbatim.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// Discord rejected the credential or the gateway closed before becoming ready.
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// The gateway did not report ready within the configured login timeout.
    #[error("Timed out after {0} seconds waiting for the gateway to become ready")]
    ReadyTimeout(u64),

    /// The connection was shut down and can no longer be used.
    #[error("Connection is closed")]
    Closed,

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Remote rejection reported without a Serenity error, carrying the remote message.
    #[error("{0}")]
    Rejected(String),
}

/// Boxes the error to keep `ConnectionError` small, as `serenity::Error` is very large.
impl From<serenity::Error> for ConnectionError {
    fn from(err: serenity::Error) -> Self {
        ConnectionError::Discord(Box::new(err))
    }
}

impl ConnectionError {
    /// Returns true when the error is Discord reporting that the requested resource does not
    /// exist (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Discord(err) => match err.as_ref() {
                serenity::Error::Http(http_err) => http_err
                    .status_code()
                    .is_some_and(|status| status.as_u16() == 404),
                _ => false,
            },
            _ => false,
        }
    }
}
