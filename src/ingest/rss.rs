// src/ingest/rss.rs
// Canonical feed source: a direct structural parse of the RSS
// channel/item tree. One incomplete item never fails the whole fetch;
// missing fields are carried through empty.

use anyhow::Context;
use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::RadarError;
use crate::ingest::{FeedSource, RawItem};

const FETCH_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "news-radar/0.1 (+https://github.com/news-radar)";

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    // Secondary date fields some publishers use instead of pubDate.
    // quick-xml strips namespace prefixes, so atom:updated and dc:date
    // arrive as "updated" and "date".
    updated: Option<String>,
    #[serde(rename = "date")]
    dc_date: Option<String>,
    description: Option<String>,
}

pub struct RssFeedSource {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { url: String, client: reqwest::Client },
}

impl RssFeedSource {
    pub fn from_url(url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("reqwest client");
        Self {
            mode: Mode::Http {
                url: url.to_string(),
                client,
            },
        }
    }

    /// Parse a feed document supplied as a string. Used by tests so
    /// they never touch the network.
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    fn parse_items_from_str(s: &str) -> Result<Vec<RawItem>, RadarError> {
        let xml_clean = scrub_html_entities_for_xml(s);
        let rss: Rss = from_str(&xml_clean)
            .context("parsing rss xml")
            .map_err(|e| RadarError::ParseFailure(format!("{e:#}")))?;

        let mut out = Vec::with_capacity(rss.channel.item.len());
        for it in rss.channel.item {
            let published_raw = it
                .pub_date
                .or(it.updated)
                .or(it.dc_date)
                .unwrap_or_default();
            out.push(RawItem {
                title: it.title.unwrap_or_default(),
                link: it.link.unwrap_or_default(),
                description: it.description.unwrap_or_default(),
                published_raw,
            });
        }

        debug!(items = out.len(), "parsed feed document");
        Ok(out)
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    async fn fetch_items(&self) -> Result<Vec<RawItem>, RadarError> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_items_from_str(s),

            Mode::Http { url, client } => {
                let resp = client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| RadarError::FetchFailure(format!("http get {url}: {e}")))?;

                let status = resp.status();
                if !status.is_success() {
                    return Err(RadarError::FetchFailure(format!(
                        "http {status} from {url}"
                    )));
                }

                let body = resp
                    .text()
                    .await
                    .map_err(|e| RadarError::FetchFailure(format!("reading body: {e}")))?;

                info!(url = %url, bytes = body.len(), "fetched feed");
                Self::parse_items_from_str(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "rss"
    }
}

// Feeds in the wild carry HTML entities that are not valid XML.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
