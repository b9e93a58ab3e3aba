//! News Radar — Binary Entrypoint
//! One invocation = one stateless pipeline run: fetch the feed, rank
//! recent items, summarize them, deliver the bounded digest.

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use news_radar::deliver::TelegramNotifier;
use news_radar::ingest::RssFeedSource;
use news_radar::summarize::OpenAiSummarizer;
use news_radar::{Radar, RadarConfig, Secrets};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("news_radar=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op in CI/prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = RadarConfig::from_env()?;
    let secrets = Secrets::from_env()?;

    info!(feed = %config.feed_url, lookback_days = config.lookback_days, "starting radar run");

    let radar = Radar {
        source: Box::new(RssFeedSource::from_url(&config.feed_url)),
        summarizer: Box::new(OpenAiSummarizer::new(&secrets.openai_api_key, None)),
        notifier: Box::new(TelegramNotifier::new(
            secrets.telegram_bot_token,
            secrets.telegram_chat_id,
        )),
        config,
    };

    radar.run_once(Utc::now()).await?;
    Ok(())
}
