//! The poll loop: fetch -> validate -> format -> notify -> sleep, forever.
//!
//! Single actor, fully sequential. Each cycle catches its own failures so
//! the process survives transient API or Telegram trouble; only missing
//! configuration is allowed to escape `run`.

use std::sync::Arc;

use tokio::time::sleep;
use tracing::{error, info};

use crate::{
    config::Config,
    domain::Timestamp,
    ports::{HomeworkApi, MessagingPort},
    response::{extract_homeworks, server_date},
    status::parse_status,
    Result,
};

/// Outcome of a single poll cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// A status change was formatted and sent.
    Notified,
    /// The homework list was empty; nothing to report.
    Idle,
}

pub struct Poller {
    cfg: Arc<Config>,
    api: Arc<dyn HomeworkApi>,
    messenger: Arc<dyn MessagingPort>,
    current_timestamp: Timestamp,
}

impl Poller {
    pub fn new(
        cfg: Arc<Config>,
        api: Arc<dyn HomeworkApi>,
        messenger: Arc<dyn MessagingPort>,
    ) -> Self {
        Self {
            cfg,
            api,
            messenger,
            current_timestamp: chrono::Utc::now().timestamp(),
        }
    }

    /// Watermark timestamp bounding the next fetch's query window.
    pub fn current_timestamp(&self) -> Timestamp {
        self.current_timestamp
    }

    /// One cycle: fetch, validate, notify on the first record.
    ///
    /// Only `homeworks[0]` is ever sent per cycle; the rest of the list is
    /// ignored. The watermark moves to the server-reported `current_date`
    /// only after a notification went out; a failed or empty cycle leaves
    /// it unchanged.
    pub async fn poll_once(&mut self) -> Result<PollOutcome> {
        let response = self.api.fetch_updates(self.current_timestamp).await?;
        let homeworks = extract_homeworks(&response)?;

        let Some(first) = homeworks.first() else {
            return Ok(PollOutcome::Idle);
        };

        let message = parse_status(first)?;
        self.messenger.send_text(self.cfg.chat_id, &message).await?;
        info!("notification sent: {message}");

        // The server clock only ever moves the watermark forward; a stale
        // `current_date` must not re-open an already-covered query window.
        if let Some(date) = server_date(&response) {
            self.current_timestamp = self.current_timestamp.max(date);
        }

        Ok(PollOutcome::Notified)
    }

    /// Runs until the process is killed.
    ///
    /// Per-cycle failures are logged and retried after the fixed delay; no
    /// backoff, no retry budget.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.poll_once().await {
                Ok(PollOutcome::Notified) => {}
                Ok(PollOutcome::Idle) => info!("no status changes"),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => error!("program failure: {e}"),
            }
            sleep(self.cfg.poll_interval).await;
        }
    }
}
