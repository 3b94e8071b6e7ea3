// tests/feeds_rss.rs
use chrono::Timelike;

use lrt_digest::feeds::rss::RssFeedSource;

const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>LRT naujienos</title>
    <link>https://www.lrt.lt/naujienos/lietuvoje</link>
    <item>
      <title>Pirmas straipsnis</title>
      <link>https://www.lrt.lt/naujienos/lietuvoje/1</link>
      <pubDate>Mon, 04 Aug 2025 06:30:00 +0000</pubDate>
    </item>
    <item>
      <title>Be nuorodos</title>
      <pubDate>Mon, 04 Aug 2025 06:40:00 +0000</pubDate>
    </item>
    <item>
      <link>https://www.lrt.lt/naujienos/lietuvoje/3</link>
    </item>
    <item>
      <title>Bloga data&nbsp;&mdash; vis tiek parsinama</title>
      <link>https://www.lrt.lt/naujienos/lietuvoje/4</link>
      <pubDate>kada nors</pubDate>
    </item>
  </channel>
</rss>
"#;

#[test]
fn entries_parse_with_missing_fields_tolerated() {
    let entries = RssFeedSource::parse_entries(FIXTURE).unwrap();
    assert_eq!(entries.len(), 4);

    assert_eq!(entries[0].title.as_deref(), Some("Pirmas straipsnis"));
    assert_eq!(
        entries[0].link.as_deref(),
        Some("https://www.lrt.lt/naujienos/lietuvoje/1")
    );
    // 06:30 UTC is 09:30 Vilnius summer time (EEST, UTC+3).
    let published = entries[0].published_at.unwrap();
    assert_eq!((published.hour(), published.minute()), (9, 30));

    // Missing link and missing title survive as None.
    assert_eq!(entries[1].link, None);
    assert_eq!(entries[2].title, None);

    // An unparsable date degrades to None, the entry itself stays.
    assert_eq!(entries[3].published_at, None);
    assert_eq!(
        entries[3].title.as_deref(),
        Some("Bloga data - vis tiek parsinama")
    );
}

#[test]
fn empty_channel_yields_no_entries() {
    let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>t</title></channel></rss>"#;
    let entries = RssFeedSource::parse_entries(xml).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn garbage_is_a_parse_error() {
    assert!(RssFeedSource::parse_entries("not xml at all").is_err());
}
