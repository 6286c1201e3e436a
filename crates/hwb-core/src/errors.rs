/// Core error type for the bot.
///
/// Adapter crates should map their specific errors into this type so the
/// poll loop can handle failures consistently (fatal vs retried next cycle).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response shape: {0}")]
    UnexpectedType(String),

    #[error("response is missing key: {0}")]
    MissingKey(&'static str),

    #[error("invalid homework status: {0}")]
    UnknownStatus(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Only missing configuration is allowed to stop the poll loop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
