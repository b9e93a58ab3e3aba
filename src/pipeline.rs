// src/pipeline.rs
// One stateless run: fetch -> build -> filter -> rank -> assemble ->
// generate -> bound -> deliver. Feed and generation failures degrade to
// fallback digests; only delivery errors abort the run.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::bound::enforce_budget;
use crate::candidate::{build_candidates, Candidate};
use crate::config::RadarConfig;
use crate::deliver::Notifier;
use crate::error::RadarError;
use crate::fallback;
use crate::ingest::{FeedSource, RawItem};
use crate::prompt;
use crate::select::{filter_recent, rank};
use crate::summarize::Summarizer;

pub struct Radar {
    pub config: RadarConfig,
    pub source: Box<dyn FeedSource>,
    pub summarizer: Box<dyn Summarizer>,
    pub notifier: Box<dyn Notifier>,
}

/// Pure selection stage: raw items to the ranked candidate sequence.
/// Deterministic for a given feed snapshot and `now`.
pub fn select_candidates(
    items: Vec<RawItem>,
    config: &RadarConfig,
    now: DateTime<Utc>,
) -> Vec<Candidate> {
    let candidates = build_candidates(items);
    let recent = filter_recent(candidates, config.lookback_days, now, config.unknown_dates);
    rank(recent, config.max_items)
}

impl Radar {
    /// Run the whole pipeline once and deliver the bounded digest.
    /// Returns the text that was delivered.
    pub async fn run_once(&self, now: DateTime<Utc>) -> Result<String> {
        let body = self.compose_digest(now).await;

        let header = render_header(&self.config.topic, now);
        let digest = format!("{header}\n{body}");
        let bounded = enforce_budget(&digest, self.config.output_budget);

        self.notifier
            .deliver(&bounded)
            .await
            .with_context(|| format!("delivering digest via {}", self.notifier.name()))?;

        info!(chars = bounded.chars().count(), "digest delivered");
        Ok(bounded)
    }

    /// Everything up to (and including) the fallback branches; never
    /// fails, always yields some digest body.
    async fn compose_digest(&self, now: DateTime<Utc>) -> String {
        let items = match self.source.fetch_items().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, source = self.source.name(), "feed unavailable, degrading");
                return fallback::feed_unavailable_notice();
            }
        };
        info!(items = items.len(), "feed items received");

        let ranked = select_candidates(items, &self.config, now);
        if ranked.is_empty() {
            warn!(
                lookback_days = self.config.lookback_days,
                "no candidates survived filtering: {}",
                RadarError::NoCandidates
            );
            return fallback::no_candidates_notice(self.config.lookback_days);
        }
        info!(candidates = ranked.len(), "candidates selected");

        let prompt = prompt::assemble(&ranked, &self.config.topic);
        match self.summarizer.summarize(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                let reason = RadarError::EmptyGeneration;
                warn!(summarizer = self.summarizer.name(), error = %reason, "degrading to listing");
                fallback::listing_digest(&ranked, &reason)
            }
            Err(reason) => {
                warn!(summarizer = self.summarizer.name(), error = %reason, "degrading to listing");
                fallback::listing_digest(&ranked, &reason)
            }
        }
    }
}

fn render_header(topic: &str, now: DateTime<Utc>) -> String {
    format!(
        "📡 <b>Radar IA — {topic}</b>\n🗓️ {}\n",
        now.format("%d/%m/%Y")
    )
}
