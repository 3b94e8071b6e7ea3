// src/config.rs
use chrono_tz::Tz;

use crate::schedule::DigestMode;

/// All digest times and windows are interpreted in this zone, regardless of
/// where the job runs.
pub const LOCAL_TZ: Tz = chrono_tz::Europe::Vilnius;

/// Topic registry: fixed order, one RSS feed per topic. Section order in the
/// report and dedup priority both follow this order.
pub const TOPICS: &[(&str, &str)] = &[
    ("Lietuvoje", "https://www.lrt.lt/naujienos/lietuvoje?rss"),
    ("Pasaulyje", "https://www.lrt.lt/naujienos/pasaulyje?rss"),
    ("Mokslas ir IT", "https://www.lrt.lt/naujienos/mokslas-ir-it?rss"),
    ("Verslas", "https://www.lrt.lt/naujienos/verslas?rss"),
    ("Sportas", "https://www.lrt.lt/naujienos/sportas?rss"),
];

/// Run configuration read from the environment (after `dotenvy::dotenv()`).
/// Every knob has a default; a missing or unparsable value falls back.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    pub max_per_topic_morning: usize,
    pub max_per_topic_midday: usize,
    pub max_per_topic_evening: usize,
    /// Items published within this many minutes of "now" get the NAUJA badge.
    pub breaking_minutes: i64,
    pub include_weather: bool,
    pub model: String,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            max_per_topic_morning: 5,
            max_per_topic_midday: 5,
            max_per_topic_evening: 5,
            breaking_minutes: 90,
            include_weather: true,
            model: "gpt-5-mini".to_string(),
        }
    }
}

impl DigestConfig {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            max_per_topic_morning: env_parse(
                "MAX_ARTICLES_PER_TOPIC_MORNING",
                d.max_per_topic_morning,
            ),
            max_per_topic_midday: env_parse("MAX_ARTICLES_PER_TOPIC_MIDDAY", d.max_per_topic_midday),
            max_per_topic_evening: env_parse(
                "MAX_ARTICLES_PER_TOPIC_EVENING",
                d.max_per_topic_evening,
            ),
            breaking_minutes: env_parse("BREAKING_MINUTES", d.breaking_minutes),
            include_weather: env_flag("INCLUDE_WEATHER", d.include_weather),
            model: std::env::var("OPENAI_MODEL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(d.model),
        }
    }

    pub fn cap_for(&self, mode: DigestMode) -> usize {
        match mode {
            DigestMode::Morning => self.max_per_topic_morning,
            DigestMode::Midday => self.max_per_topic_midday,
            DigestMode::Evening => self.max_per_topic_evening,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Flag semantics: set to "0", "false" or "False" to disable; anything else
/// (including empty) counts as enabled.
fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => !matches!(v.trim(), "0" | "false" | "False"),
        Err(_) => default,
    }
}
