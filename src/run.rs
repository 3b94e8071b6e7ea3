// src/run.rs
// One digest run, end to end: resolve mode, collect feeds, assemble the
// digest, pick highlights, render and deliver. Strictly sequential.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use tracing::info;

use crate::ai::OpenAiGenerator;
use crate::config::{DigestConfig, TOPICS};
use crate::enrich::{Enricher, HttpArticleFetcher};
use crate::feeds::{collect_topics, rss::RssFeedSource, FeedSource};
use crate::highlights;
use crate::notify::email::{self, EmailConfig};
use crate::pipeline::{build_digest, RunContext};
use crate::render::build_html;
use crate::schedule::DigestMode;
use crate::weather;

#[derive(Debug)]
pub enum RunOutcome {
    /// The current hour maps to no digest mode. Nothing was fetched or sent.
    NotScheduled,
    Sent {
        mode: DigestMode,
        items: usize,
        sent: usize,
        failed: usize,
    },
}

pub async fn run_digest(now: DateTime<Tz>) -> Result<RunOutcome> {
    let Some(mode) = DigestMode::resolve(now) else {
        info!(hour = %now.format("%H:%M"), "not a scheduled digest hour, exiting");
        return Ok(RunOutcome::NotScheduled);
    };

    let cfg = DigestConfig::from_env();
    let (window_start, window_end) = mode.time_window(now);
    let date_str = now.format("%Y-%m-%d").to_string();
    let (subject, header, subtitle) = mode.titles(&date_str);
    let max_per_topic = cfg.cap_for(mode);

    info!(
        mode = mode.label(),
        window_start = %window_start.format("%Y-%m-%d %H:%M"),
        window_end = %window_end.format("%Y-%m-%d %H:%M"),
        max_per_topic,
        "starting digest run"
    );

    let feed_client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (lrt-digest)")
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .context("building feed http client")?;
    let sources: Vec<Box<dyn FeedSource>> = TOPICS
        .iter()
        .map(|(name, url)| {
            Box::new(RssFeedSource::new(*name, *url, feed_client.clone())) as Box<dyn FeedSource>
        })
        .collect();
    let collected = collect_topics(&sources).await;

    let generator = OpenAiGenerator::new(cfg.model.as_str());
    let fetcher = HttpArticleFetcher::new();
    let enricher = Enricher {
        fetcher: &fetcher,
        generator: &generator,
    };
    let ctx = RunContext {
        now,
        window_start,
        window_end,
        max_per_topic,
        breaking_window: Duration::minutes(cfg.breaking_minutes),
    };

    let digest = build_digest(&collected, &enricher, &ctx).await;
    info!(items = digest.flat.len(), "digest assembled");

    let top3 = highlights::pick_top3(&digest.flat, mode, &generator).await;
    let weather_line = weather::vilnius_weather_summary(cfg.include_weather).await;

    let generated_at = now.format("%Y-%m-%d %H:%M").to_string();
    let html_doc = build_html(
        &date_str,
        &header,
        &subtitle,
        &digest.sections,
        &top3,
        weather_line.as_deref(),
        &generated_at,
    );

    // Delivery configuration is validated before the first send attempt.
    let email_cfg = EmailConfig::from_env()?;
    let report = email::send_individual(&email_cfg, &subject, &html_doc).await?;

    Ok(RunOutcome::Sent {
        mode,
        items: digest.flat.len(),
        sent: report.sent,
        failed: report.failed,
    })
}
