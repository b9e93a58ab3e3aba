// src/select.rs
// Recency window filtering and ranking. `now` is injected so runs are
// deterministic for a given feed snapshot.

use chrono::{DateTime, Duration, Utc};

use crate::candidate::Candidate;

/// What to do with candidates whose publish date could not be parsed.
/// The two policies are distinct on purpose: excluding an item and
/// keeping it at the bottom of the ranking are not the same digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownDatePolicy {
    /// Undated candidates never enter the recency set (default).
    #[default]
    Exclude,
    /// Best-effort: keep undated candidates, ranked strictly after all
    /// dated ones.
    KeepSortedLast,
}

/// Keep candidates whose publish date falls inside the trailing
/// `lookback_days` window ending at `now`.
pub fn filter_recent(
    candidates: Vec<Candidate>,
    lookback_days: u32,
    now: DateTime<Utc>,
    policy: UnknownDatePolicy,
) -> Vec<Candidate> {
    let cutoff = now - Duration::days(i64::from(lookback_days));
    candidates
        .into_iter()
        .filter(|c| match c.published_at {
            Some(at) => at >= cutoff,
            None => policy == UnknownDatePolicy::KeepSortedLast,
        })
        .collect()
}

/// Order candidates by publish date descending — undated ones last, in
/// source order — and keep at most `max_items`. Fewer candidates than
/// `max_items` is not an error.
pub fn rank(mut candidates: Vec<Candidate>, max_items: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| match (a.published_at, b.published_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    candidates.truncate(max_items);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cand(title: &str, published_at: Option<DateTime<Utc>>) -> Candidate {
        Candidate {
            title: title.to_string(),
            link: format!("https://example.test/{title}"),
            published_at,
            excerpt: String::new(),
        }
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn window_filter_drops_old_items() {
        let now = at(20);
        let out = filter_recent(
            vec![cand("new", Some(at(18))), cand("old", Some(at(1)))],
            7,
            now,
            UnknownDatePolicy::Exclude,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "new");
    }

    #[test]
    fn exclude_policy_drops_undated_items() {
        let out = filter_recent(
            vec![cand("dated", Some(at(19))), cand("undated", None)],
            7,
            at(20),
            UnknownDatePolicy::Exclude,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "dated");
    }

    #[test]
    fn keep_policy_retains_undated_items() {
        let out = filter_recent(
            vec![cand("undated", None)],
            7,
            at(20),
            UnknownDatePolicy::KeepSortedLast,
        );
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn rank_orders_most_recent_first_and_truncates() {
        let out = rank(
            vec![
                cand("a", Some(at(15))),
                cand("b", Some(at(19))),
                cand("c", Some(at(17))),
                cand("d", Some(at(18))),
            ],
            3,
        );
        let titles: Vec<_> = out.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["b", "d", "c"]);
    }

    #[test]
    fn undated_candidates_sort_after_all_dated_ones_in_source_order() {
        let out = rank(
            vec![
                cand("u1", None),
                cand("dated", Some(at(10))),
                cand("u2", None),
            ],
            10,
        );
        let titles: Vec<_> = out.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["dated", "u1", "u2"]);
    }

    #[test]
    fn fewer_candidates_than_max_is_fine() {
        let out = rank(vec![cand("only", Some(at(19)))], 5);
        assert_eq!(out.len(), 1);
    }
}
