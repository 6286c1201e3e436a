use std::sync::Arc;

use hwb_core::{config::Config, poller::Poller};
use hwb_practicum::PracticumClient;
use hwb_telegram::TelegramMessenger;

#[tokio::main]
async fn main() -> Result<(), hwb_core::Error> {
    hwb_core::logging::init("hwb")?;

    let cfg = Arc::new(Config::load().inspect_err(|e| {
        tracing::error!("cannot start: {e}");
    })?);

    tracing::info!(
        "homework status bot started: chat {:?}, polling every {:?}",
        cfg.chat_id,
        cfg.poll_interval
    );

    let api = Arc::new(PracticumClient::new(&cfg));
    let messenger = Arc::new(TelegramMessenger::from_token(&cfg.telegram_bot_token));

    let mut poller = Poller::new(cfg, api, messenger);
    poller.run().await
}
