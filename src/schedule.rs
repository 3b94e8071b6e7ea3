//! # Digest-Mode Resolver
//! Pure mapping from the current Vilnius wall clock to a digest mode, its
//! look-back window, and its Lithuanian subject/header texts. No I/O, suitable
//! for unit tests.

use chrono::{DateTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::config::LOCAL_TZ;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestMode {
    Morning,
    Midday,
    Evening,
}

impl DigestMode {
    /// Returns the mode scheduled for this hour, or `None` for any other hour.
    /// A `None` run must perform no network calls, no AI calls and no email.
    pub fn resolve(now: DateTime<Tz>) -> Option<Self> {
        match now.hour() {
            7 => Some(Self::Morning),
            12 => Some(Self::Midday),
            18 => Some(Self::Evening),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Midday => "midday",
            Self::Evening => "evening",
        }
    }

    /// Look-back window, both bounds in local time, end always "now".
    /// Morning covers the whole day so far; midday covers "new since the
    /// morning digest"; evening covers "new since 17:00".
    pub fn time_window(self, now: DateTime<Tz>) -> (DateTime<Tz>, DateTime<Tz>) {
        let start_hour = match self {
            Self::Morning => 0,
            Self::Midday => 7,
            Self::Evening => 17,
        };
        let start = now
            .date_naive()
            .and_hms_opt(start_hour, 0, 0)
            .and_then(|naive| LOCAL_TZ.from_local_datetime(&naive).earliest())
            .unwrap_or(now);
        (start, now)
    }

    /// (email subject, report header, report subtitle) for the given date.
    pub fn titles(self, date_str: &str) -> (String, String, String) {
        match self {
            Self::Morning => (
                format!("[Ryto santrauka] LRT naujienos — {date_str}"),
                format!("LRT ryto naujienų santrauka — {date_str}"),
                "Svarbiausios šios dienos naujienos (nuo 00:00).".to_string(),
            ),
            Self::Midday => (
                format!("[Vidurdienio atnaujinimas] LRT naujienos — {date_str}"),
                format!("LRT vidurdienio naujienų atnaujinimas — {date_str}"),
                "Naujos naujienos nuo 07:00 (ryto santraukos).".to_string(),
            ),
            Self::Evening => (
                format!("[Vakaro apžvalga] LRT naujienos — {date_str}"),
                format!("LRT vakaro naujienų apžvalga — {date_str}"),
                "Naujos naujienos nuo 17:00 (vidurdienio atnaujinimo).".to_string(),
            ),
        }
    }

    /// Short mode descriptor embedded in the highlight-selection prompt.
    pub fn highlight_hint(self) -> &'static str {
        match self {
            Self::Morning => "Ryto santrauka",
            Self::Midday => "Vidurdienio atnaujinimas",
            Self::Evening => "Vakaro apžvalga",
        }
    }
}
