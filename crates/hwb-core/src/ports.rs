use async_trait::async_trait;
use serde_json::Value;

use crate::{
    domain::{ChatId, Timestamp},
    Result,
};

/// Port for the homework-review API.
///
/// The HTTP adapter is the production implementation; the poll loop only
/// sees this trait, so tests run it against in-memory fakes.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// One GET against the status endpoint, bounded below by `since`.
    ///
    /// Succeeds only on HTTP 200 and returns the decoded body opaque; no
    /// retry here, that is the caller's job.
    async fn fetch_updates(&self, since: Timestamp) -> Result<Value>;
}

/// Cross-messenger port.
///
/// Telegram is the first implementation; the shape leaves room for other
/// transports behind the same interface.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
