/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Unix timestamp used as the `from_date` lower bound of a fetch.
pub type Timestamp = i64;
