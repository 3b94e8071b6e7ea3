//! # Item Pipeline
//! Turns the collected per-topic feed entries into a bounded, deduplicated,
//! temporally-scoped collection of enriched digest items. Window membership,
//! cross-topic URL dedup, per-topic caps and the breaking flag are all decided
//! here, once, at item creation.

use std::collections::HashSet;

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use tracing::debug;

use crate::enrich::Enricher;
use crate::feeds::FeedEntry;

/// One emitted digest item. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct DigestItem {
    pub topic: String,
    pub title: String,
    pub url: String,
    pub summary: String,
    pub published_at: Option<DateTime<Tz>>,
    /// Zero-padded `HH:MM` in local time, empty when the feed gave no date.
    pub published_local_str: String,
    pub is_breaking: bool,
}

/// Immutable per-run parameters, computed once at run start.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    pub now: DateTime<Tz>,
    pub window_start: DateTime<Tz>,
    pub window_end: DateTime<Tz>,
    pub max_per_topic: usize,
    pub breaking_window: Duration,
}

/// Pipeline output: per-topic groups in configured order (empty topics stay
/// present; the renderer decides what to show) plus the flattened list in
/// topic-major, feed order.
#[derive(Debug, Default)]
pub struct Digest {
    pub sections: Vec<(String, Vec<DigestItem>)>,
    pub flat: Vec<DigestItem>,
}

/// Assemble the digest from collected entries.
///
/// Per entry, in feed order: drop on missing URL; drop on a URL already seen
/// anywhere in this run (first topic wins); drop on a dated entry outside the
/// inclusive window (undated entries pass); otherwise enrich and emit. A topic
/// stops being consumed once it has emitted `max_per_topic` items, so entries
/// past the cap are never fetched or summarized. There is no bound on entries
/// scanned before the cap is reached.
pub async fn build_digest(
    topics: &[(String, Vec<FeedEntry>)],
    enricher: &Enricher<'_>,
    ctx: &RunContext,
) -> Digest {
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut digest = Digest::default();

    for (topic, entries) in topics {
        let mut items: Vec<DigestItem> = Vec::new();

        for entry in entries {
            if items.len() >= ctx.max_per_topic {
                break;
            }

            let Some(url) = entry.link.as_deref().filter(|l| !l.is_empty()) else {
                continue;
            };
            if seen_urls.contains(url) {
                continue;
            }

            if let Some(published) = entry.published_at {
                if published < ctx.window_start || published > ctx.window_end {
                    continue;
                }
            }

            let title = entry
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| url.to_string());

            let summary = enricher.summarize(&title, url).await.into_text();

            let published_local_str = entry
                .published_at
                .map(|dt| dt.format("%H:%M").to_string())
                .unwrap_or_default();
            let is_breaking = entry
                .published_at
                .map(|dt| ctx.now - dt <= ctx.breaking_window)
                .unwrap_or(false);

            let item = DigestItem {
                topic: topic.clone(),
                title,
                url: url.to_string(),
                summary,
                published_at: entry.published_at,
                published_local_str,
                is_breaking,
            };

            seen_urls.insert(item.url.clone());
            digest.flat.push(item.clone());
            items.push(item);
        }

        debug!(topic = %topic, kept = items.len(), "topic assembled");
        digest.sections.push((topic.clone(), items));
    }

    digest
}
