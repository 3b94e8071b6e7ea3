//! Per-item enrichment: fetch the article page, extract its body text, and
//! summarize it. Every failure is converted into a reader-facing sentinel at
//! this boundary; nothing here ever aborts a topic or the run.

use std::io::Cursor;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::ai::{summarize_prompt, TextGenerator};

/// Extracted bodies shorter than this are considered unreliable and never
/// reach the summarizer.
pub const MIN_EXTRACTED_CHARS: usize = 200;

const EXTRACTION_UNRELIABLE: &str = "Nepavyko patikimai ištraukti teksto.";

/// Outcome of one enrichment attempt, decided exactly once per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summarized(String),
    ExtractionUnreliable,
    Failed(String),
}

impl SummaryOutcome {
    /// Reader-facing card text. Degraded outcomes render as Lithuanian
    /// placeholder sentences, inline in the report.
    pub fn into_text(self) -> String {
        match self {
            Self::Summarized(text) => text,
            Self::ExtractionUnreliable => EXTRACTION_UNRELIABLE.to_string(),
            Self::Failed(reason) => format!("Klaida: {reason}"),
        }
    }
}

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

pub struct HttpArticleFetcher {
    client: reqwest::Client,
}

impl HttpArticleFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (lrt-digest)")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client");
        Self { client }
    }
}

impl Default for HttpArticleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("article status for {url}"))?
            .text()
            .await
            .context("reading article body")
    }
}

/// Readability extraction over the fetched markup.
pub fn extract_text(html: &str, url: &str) -> Result<String> {
    let base = url::Url::parse(url).with_context(|| format!("parsing url {url}"))?;
    let mut reader = Cursor::new(html.as_bytes());
    let product = readability::extractor::extract(&mut reader, &base)
        .map_err(|e| anyhow::anyhow!("readability extract: {e:?}"))?;
    Ok(product.text.trim().to_string())
}

/// Fetcher + generator behind one `summarize` call.
pub struct Enricher<'a> {
    pub fetcher: &'a dyn ArticleFetcher,
    pub generator: &'a dyn TextGenerator,
}

impl Enricher<'_> {
    pub async fn summarize(&self, title: &str, url: &str) -> SummaryOutcome {
        match self.try_summarize(title, url).await {
            Ok(outcome) => outcome,
            Err(e) => SummaryOutcome::Failed(format!("{e:#}")),
        }
    }

    async fn try_summarize(&self, title: &str, url: &str) -> Result<SummaryOutcome> {
        let html = self.fetcher.fetch_html(url).await?;
        let text = extract_text(&html, url)?;
        if text.chars().count() < MIN_EXTRACTED_CHARS {
            return Ok(SummaryOutcome::ExtractionUnreliable);
        }
        let summary = self.generator.generate(&summarize_prompt(title, &text)).await?;
        Ok(SummaryOutcome::Summarized(summary.trim().to_string()))
    }
}
