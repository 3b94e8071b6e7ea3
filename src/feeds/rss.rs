// src/feeds/rss.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::DateTime;
use chrono_tz::Tz;
use quick_xml::de::from_str;
use serde::Deserialize;

use super::{FeedEntry, FeedSource};
use crate::config::LOCAL_TZ;

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
    updated: Option<String>,
}

/// One topic's RSS feed over HTTP.
pub struct RssFeedSource {
    topic: String,
    url: String,
    client: reqwest::Client,
}

impl RssFeedSource {
    pub fn new(topic: impl Into<String>, url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            topic: topic.into(),
            url: url.into(),
            client,
        }
    }

    /// Parse a feed document into entries, tolerating missing per-entry
    /// fields. Whitespace-only titles/links count as missing.
    pub fn parse_entries(xml: &str) -> Result<Vec<FeedEntry>> {
        let xml_clean = scrub_html_entities_for_xml(xml);
        let rss: Rss = from_str(&xml_clean).context("parsing rss xml")?;

        let mut out = Vec::with_capacity(rss.channel.item.len());
        for it in rss.channel.item {
            let published_at = it
                .pub_date
                .as_deref()
                .or(it.updated.as_deref())
                .and_then(parse_entry_datetime);
            out.push(FeedEntry {
                title: clean_field(it.title),
                link: clean_field(it.link),
                published_at,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    async fn fetch_entries(&self) -> Result<Vec<FeedEntry>> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()
            .with_context(|| format!("feed status for {}", self.url))?
            .text()
            .await
            .context("reading rss body")?;
        Self::parse_entries(&body)
    }

    fn topic(&self) -> &str {
        &self.topic
    }
}

fn clean_field(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Feed timestamps are RFC 2822 in RSS (`pubDate`) and RFC 3339 in Atom-ish
/// feeds (`updated`); either way the result lands in the local zone.
fn parse_entry_datetime(raw: &str) -> Option<DateTime<Tz>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&LOCAL_TZ))
}

/// Feeds sometimes embed HTML entities that are not valid XML. Replace the
/// common ones before handing the document to the XML parser.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc2822_into_local_zone() {
        // 06:30 UTC is 09:30 in Vilnius during summer time (EEST, UTC+3).
        let dt = parse_entry_datetime("Mon, 04 Aug 2025 06:30:00 +0000").unwrap();
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn unparsable_date_becomes_none() {
        assert!(parse_entry_datetime("yesterday-ish").is_none());
    }
}
