// src/feeds/mod.rs
pub mod rss;

use anyhow::Result;
use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;

/// One raw feed entry. Title, link and timestamp are all optional at this
/// layer; the pipeline applies the fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published_at: Option<DateTime<Tz>>,
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Entries in source order. Errors propagate; the caller decides whether a
    /// failing topic aborts anything.
    async fn fetch_entries(&self) -> Result<Vec<FeedEntry>>;
    fn topic(&self) -> &str;
}

/// Fetch every topic sequentially. A failing topic is logged and contributes
/// an empty entry list; it never aborts the run.
pub async fn collect_topics(sources: &[Box<dyn FeedSource>]) -> Vec<(String, Vec<FeedEntry>)> {
    let mut collected = Vec::with_capacity(sources.len());
    for source in sources {
        let entries = match source.fetch_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = ?e, topic = source.topic(), "feed fetch failed");
                Vec::new()
            }
        };
        tracing::debug!(topic = source.topic(), entries = entries.len(), "feed collected");
        collected.push((source.topic().to_string(), entries));
    }
    collected
}
