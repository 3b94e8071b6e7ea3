use std::time::Duration;

use anyhow::{bail, Context, Result};
use lettre::message::{Mailbox, Message, MultiPart};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};
use tracing::{error, info};

use super::SendReport;

const PLAIN_FALLBACK: &str = "Peržiūrėkite šį laišką HTML režimu.";

#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Order-preserving, deduplicated.
    pub recipients: Vec<String>,
    pub from: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl EmailConfig {
    /// Read and validate delivery configuration. Validation failures are
    /// fatal and happen before any send attempt.
    pub fn from_env() -> Result<Self> {
        let recipients = parse_recipients(&std::env::var("NEWS_TO_EMAIL").unwrap_or_default());
        let from = env_trimmed("NEWS_FROM_EMAIL");
        let host = {
            let h = env_trimmed("NEWS_SMTP_HOST");
            if h.is_empty() {
                "smtp.gmail.com".to_string()
            } else {
                h
            }
        };
        let port_raw = env_trimmed("NEWS_SMTP_PORT");
        let port: u16 = if port_raw.is_empty() {
            587
        } else {
            port_raw
                .parse()
                .with_context(|| format!("invalid NEWS_SMTP_PORT: {port_raw}"))?
        };
        let user = env_trimmed("NEWS_SMTP_USER");
        // App passwords get pasted with spaces and non-breaking spaces.
        let password = std::env::var("NEWS_SMTP_PASS")
            .unwrap_or_default()
            .trim()
            .replace([' ', '\u{a0}'], "");

        if recipients.is_empty() {
            bail!("NEWS_TO_EMAIL is empty. Provide comma-separated recipients.");
        }
        if from.is_empty() || user.is_empty() || password.is_empty() {
            bail!("Missing NEWS_FROM_EMAIL / NEWS_SMTP_USER / NEWS_SMTP_PASS env vars.");
        }
        if from != user {
            bail!("For Gmail SMTP, set NEWS_FROM_EMAIL equal to NEWS_SMTP_USER.");
        }

        Ok(Self {
            recipients,
            from,
            host,
            port,
            user,
            password,
        })
    }
}

/// Send one message per recipient (never one message with the full list). A
/// failed recipient is logged and counted; remaining sends proceed. An error
/// is returned only when no recipient received the digest.
pub async fn send_individual(
    cfg: &EmailConfig,
    subject: &str,
    html_doc: &str,
) -> Result<SendReport> {
    let creds = Credentials::new(cfg.user.clone(), cfg.password.clone());
    let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)
        .with_context(|| format!("invalid SMTP host {}", cfg.host))?
        .port(cfg.port)
        .credentials(creds)
        .timeout(Some(Duration::from_secs(30)))
        .build();

    let from: Mailbox = cfg
        .from
        .parse()
        .with_context(|| format!("invalid sender address {}", cfg.from))?;

    let mut report = SendReport::default();
    for recipient in &cfg.recipients {
        match send_one(&mailer, &from, recipient, subject, html_doc).await {
            Ok(()) => {
                info!(recipient = %recipient, "digest sent");
                report.sent += 1;
            }
            Err(e) => {
                error!(recipient = %recipient, error = ?e, "send failed");
                report.failed += 1;
            }
        }
    }

    if report.sent == 0 {
        bail!("delivery failed for all {} recipients", report.failed);
    }
    Ok(report)
}

async fn send_one(
    mailer: &AsyncSmtpTransport<Tokio1Executor>,
    from: &Mailbox,
    recipient: &str,
    subject: &str,
    html_doc: &str,
) -> Result<()> {
    let to: Mailbox = recipient
        .parse()
        .with_context(|| format!("invalid recipient {recipient}"))?;
    let msg = Message::builder()
        .from(from.clone())
        .to(to)
        .subject(subject)
        .multipart(MultiPart::alternative_plain_html(
            PLAIN_FALLBACK.to_string(),
            html_doc.to_string(),
        ))
        .context("build email")?;
    mailer.send(msg).await.context("send email")?;
    Ok(())
}

fn env_trimmed(key: &str) -> String {
    std::env::var(key).unwrap_or_default().trim().to_string()
}

/// Comma-separated list, trimmed, empties dropped, order-preserving dedup.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_string()))
        .map(str::to_string)
        .collect()
}
