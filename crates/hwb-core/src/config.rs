use std::{env, fs, path::Path, time::Duration};

use crate::{domain::ChatId, errors::Error, Result};

/// Fixed destination chat for status notifications.
pub const TELEGRAM_CHAT_ID: ChatId = ChatId(358030006);

/// Homework-review API endpoint.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Typed configuration, loaded once at startup and passed to each component.
///
/// Secrets stay here instead of being read from process-wide globals at the
/// point of use.
#[derive(Clone, Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_bot_token: String,
    pub chat_id: ChatId,
    pub endpoint: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        // Required env vars
        let practicum_token = env_str("PRACTICUM_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("PRACTICUM_TOKEN environment variable is required".to_string())
            })?;
        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;

        // Optional overrides
        let endpoint = env_str("HOMEWORK_API_ENDPOINT")
            .and_then(non_empty)
            .unwrap_or_else(|| ENDPOINT.to_string());
        let poll_interval = env_u64("POLL_INTERVAL_SECS")
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Ok(Self {
            practicum_token,
            telegram_bot_token,
            chat_id: TELEGRAM_CHAT_ID,
            endpoint,
            poll_interval,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
