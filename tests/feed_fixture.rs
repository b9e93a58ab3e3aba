// tests/feed_fixture.rs
// Feed source + selection stages over a static RSS fixture.

use chrono::{TimeZone, Utc};
use news_radar::candidate::build_candidates;
use news_radar::ingest::{FeedSource, RssFeedSource};
use news_radar::pipeline::select_candidates;
use news_radar::{RadarConfig, UnknownDatePolicy};

const BLOG_XML: &str = include_str!("fixtures/openai_blog.xml");

fn fixture_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn fixture_parses_in_document_order() {
    let source = RssFeedSource::from_fixture_str(BLOG_XML);
    let items = source.fetch_items().await.expect("fixture parse ok");
    assert_eq!(items.len(), 11);
    assert_eq!(items[0].title, "Model update ships broadly");
    assert_eq!(items[10].title, "Undated community note");
}

#[tokio::test]
async fn builder_drops_the_linkless_entry_only() {
    let source = RssFeedSource::from_fixture_str(BLOG_XML);
    let items = source.fetch_items().await.unwrap();
    let candidates = build_candidates(items);
    assert_eq!(candidates.len(), 10);
    assert!(candidates.iter().all(|c| !c.link.is_empty()));
    // HTML in descriptions is decoded and stripped.
    assert_eq!(
        candidates[0].excerpt,
        "The latest model update is now rolling out to all users."
    );
}

#[tokio::test]
async fn five_most_recent_in_window_items_are_selected_most_recent_first() {
    let source = RssFeedSource::from_fixture_str(BLOG_XML);
    let items = source.fetch_items().await.unwrap();

    let config = RadarConfig::default(); // lookback 7, max 5, exclude undated
    let ranked = select_candidates(items, &config, fixture_now());

    let titles: Vec<_> = ranked.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Model update ships broadly",
            "Research milestone on reasoning",
            "API pricing revision",
            "Safety evaluations report",
            "Developer day recap",
        ]
    );
}

#[tokio::test]
async fn best_effort_policy_keeps_the_undated_entry_last() {
    let source = RssFeedSource::from_fixture_str(BLOG_XML);
    let items = source.fetch_items().await.unwrap();

    let config = RadarConfig {
        unknown_dates: UnknownDatePolicy::KeepSortedLast,
        max_items: 20,
        ..RadarConfig::default()
    };
    let ranked = select_candidates(items, &config, fixture_now());

    assert_eq!(ranked.last().unwrap().title, "Undated community note");
    // Everything before it is dated, most recent first.
    let dated = &ranked[..ranked.len() - 1];
    assert!(dated.iter().all(|c| c.published_at.is_some()));
    assert!(dated.windows(2).all(|w| w[0].published_at >= w[1].published_at));
}

#[tokio::test]
async fn identical_snapshot_and_now_yield_identical_selection() {
    let source = RssFeedSource::from_fixture_str(BLOG_XML);
    let items = source.fetch_items().await.unwrap();
    let config = RadarConfig::default();

    let first = select_candidates(items.clone(), &config, fixture_now());
    let second = select_candidates(items, &config, fixture_now());
    assert_eq!(first, second);
}
