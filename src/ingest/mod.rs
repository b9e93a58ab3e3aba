// src/ingest/mod.rs
pub mod rss;

use crate::error::RadarError;

pub use rss::RssFeedSource;

/// One feed entry as the document carries it, before any validation.
/// Optional fields the feed omits arrive as empty strings; the
/// candidate builder decides what survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub published_raw: String,
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed once, yielding items in document order.
    async fn fetch_items(&self) -> Result<Vec<RawItem>, RadarError>;
    fn name(&self) -> &'static str;
}
