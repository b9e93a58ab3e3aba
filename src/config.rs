// src/config.rs
// Runtime configuration. Everything is read once at startup and passed
// into the pipeline as a value, so tests can vary it per case.

use anyhow::{anyhow, Context, Result};

use crate::select::UnknownDatePolicy;

pub const DEFAULT_FEED_URL: &str = "https://openai.com/blog/rss.xml";
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;
pub const DEFAULT_MAX_ITEMS: usize = 5;
pub const DEFAULT_TOPIC: &str = "OpenAI";
pub const DEFAULT_OUTPUT_BUDGET: usize = 3800;

#[derive(Debug, Clone)]
pub struct RadarConfig {
    pub feed_url: String,
    pub lookback_days: u32,
    pub max_items: usize,
    pub topic: String,
    pub output_budget: usize,
    pub unknown_dates: UnknownDatePolicy,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            max_items: DEFAULT_MAX_ITEMS,
            topic: DEFAULT_TOPIC.to_string(),
            output_budget: DEFAULT_OUTPUT_BUDGET,
            unknown_dates: UnknownDatePolicy::default(),
        }
    }
}

impl RadarConfig {
    /// Read configuration from the environment, falling back to
    /// defaults. Malformed values are an error, not a silent default.
    pub fn from_env() -> Result<Self> {
        let unknown_dates = match std::env::var("RADAR_UNKNOWN_DATES") {
            Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
                "" | "exclude" => UnknownDatePolicy::Exclude,
                "keep" => UnknownDatePolicy::KeepSortedLast,
                other => {
                    return Err(anyhow!(
                        "RADAR_UNKNOWN_DATES must be 'exclude' or 'keep', got '{other}'"
                    ))
                }
            },
            Err(_) => UnknownDatePolicy::default(),
        };

        Ok(Self {
            feed_url: env_or("RADAR_FEED_URL", DEFAULT_FEED_URL),
            lookback_days: env_parse("RADAR_LOOKBACK_DAYS", DEFAULT_LOOKBACK_DAYS)?,
            max_items: env_parse("RADAR_MAX_ITEMS", DEFAULT_MAX_ITEMS)?.max(1),
            topic: env_or("RADAR_TOPIC", DEFAULT_TOPIC),
            output_budget: env_parse("RADAR_OUTPUT_BUDGET", DEFAULT_OUTPUT_BUDGET)?,
            unknown_dates,
        })
    }
}

/// Secrets for the external collaborators. All required; a missing one
/// is a fatal configuration error.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub openai_api_key: String,
}

impl Secrets {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            telegram_bot_token: must_env("TELEGRAM_BOT_TOKEN")?,
            telegram_chat_id: must_env("TELEGRAM_CHAT_ID")?,
            openai_api_key: must_env("OPENAI_API_KEY")?,
        })
    }
}

fn must_env(name: &str) -> Result<String> {
    let v = std::env::var(name).unwrap_or_default();
    let v = v.trim();
    if v.is_empty() {
        return Err(anyhow!("missing required env var: {name}"));
    }
    Ok(v.to_string())
}

fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("parsing env var {name}")),
        _ => Ok(default),
    }
}
