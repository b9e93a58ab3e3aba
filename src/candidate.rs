// src/candidate.rs
// Date normalization and RawItem -> Candidate conversion. An item
// becomes a candidate only with a non-empty title and link; everything
// else degrades instead of failing the run.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::OnceCell;
use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;
use tracing::debug;

use crate::ingest::RawItem;

/// Excerpt cap in characters, to bound downstream prompt cost.
pub const EXCERPT_CAP: usize = 1200;

/// A validated, normalized feed item eligible for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub link: String,
    /// `None` means the publish date is unknown.
    pub published_at: Option<DateTime<Utc>>,
    pub excerpt: String,
}

/// Parse a heterogeneous date string into a canonical UTC timestamp.
/// Accepts RFC 822 mail style (the usual RSS pubDate), ISO 8601 /
/// RFC 3339, and naive timestamps (taken as UTC). Anything else is
/// "unknown", never an error.
pub fn normalize_date(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc2822) {
        return DateTime::<Utc>::from_timestamp(dt.unix_timestamp(), 0);
    }
    // Obsolete zone names (EST, PDT, ...) that Rfc2822 above rejects.
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Clean a feed description for use as an excerpt: decode HTML
/// entities, strip tags, collapse whitespace, cap the length.
pub fn clean_excerpt(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").trim().to_string();

    if out.chars().count() > EXCERPT_CAP {
        out = out.chars().take(EXCERPT_CAP).collect();
    }
    out
}

/// Convert raw items to candidates, preserving source order. Items with
/// an empty title or link after trimming are discarded, not defaulted.
pub fn build_candidates(items: Vec<RawItem>) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(items.len());
    for it in items {
        let title = it.title.trim().to_string();
        let link = it.link.trim().to_string();
        if title.is_empty() || link.is_empty() {
            debug!(title = %title, link = %link, "discarding structurally invalid item");
            continue;
        }
        out.push(Candidate {
            title,
            link,
            published_at: normalize_date(&it.published_raw),
            excerpt: clean_excerpt(&it.description),
        });
    }
    out
}
