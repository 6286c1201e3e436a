//! HTTP adapter for the homework-review API.
//!
//! Implements the `hwb-core` HomeworkApi port over the Practicum status
//! endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

use hwb_core::{
    config::Config,
    domain::Timestamp,
    errors::Error,
    ports::HomeworkApi,
    Result,
};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: reqwest::Client,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("reqwest client build");
        Self {
            endpoint: cfg.endpoint.clone(),
            token: cfg.practicum_token.clone(),
            http,
        }
    }
}

/// A zero watermark means "from now on".
fn effective_timestamp(since: Timestamp) -> Timestamp {
    if since > 0 {
        since
    } else {
        chrono::Utc::now().timestamp()
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch_updates(&self, since: Timestamp) -> Result<Value> {
        let timestamp = effective_timestamp(since);

        info!("requesting homework statuses from_date={timestamp}");
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("from_date", timestamp)])
            .header("Authorization", format!("OAuth {}", self.token))
            .send()
            .await
            .map_err(|e| Error::Transport(format!("api request error: {e}")))?;

        if resp.status() != StatusCode::OK {
            return Err(Error::Transport(format!(
                "API unavailable: {}",
                resp.status()
            )));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| Error::Transport(format!("api json error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_watermark_passes_through() {
        assert_eq!(effective_timestamp(1_700_000_000), 1_700_000_000);
    }

    #[test]
    fn zero_watermark_falls_back_to_now() {
        let now = chrono::Utc::now().timestamp();
        assert!(effective_timestamp(0) >= now);
    }
}
