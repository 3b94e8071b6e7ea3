// src/render.rs
// Pure report rendering: (date, header, subtitle, sections, highlights,
// weather) -> one self-contained HTML document. Inlined styling, no external
// assets. All interpolated text is escaped.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::pipeline::DigestItem;

fn esc(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).to_string()
}

/// Multi-line summaries become a bullet list; anything else is emitted as
/// escaped text.
fn summary_to_html_list(summary: &str) -> String {
    let lines: Vec<&str> = summary
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.trim_matches(|c: char| c == '-' || c == '•' || c.is_whitespace()))
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return esc(summary);
    }
    let items: String = lines
        .iter()
        .map(|line| format!("<li>{}</li>", esc(line)))
        .collect();
    format!("<ul class='summary-list'>{items}</ul>")
}

fn link_domain(url: &str) -> &str {
    static RE: OnceCell<Regex> = OnceCell::new();
    let re = RE.get_or_init(|| Regex::new(r"^https?://([^/]+)/").unwrap());
    re.captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or("")
}

fn card_html(topic: &str, it: &DigestItem) -> String {
    let badge = if it.is_breaking {
        r#"<span class="badge breaking">NAUJA</span>"#
    } else {
        ""
    };
    format!(
        r#"
      <article class="card">
        <div class="card-top">
          <h3 class="card-title">{badge}{title}</h3>
          <div class="meta">
            <span class="meta-item">{published}</span>
            <span class="dot">•</span>
            <span class="meta-item">{topic}</span>
            <span class="dot">•</span>
            <a class="meta-link" href="{url}" target="_blank" rel="noopener noreferrer">Skaityti {domain}</a>
          </div>
        </div>
        <div class="card-body">{summary}</div>
      </article>
"#,
        badge = badge,
        title = esc(&it.title),
        published = esc(&it.published_local_str),
        topic = esc(topic),
        url = esc(&it.url),
        domain = esc(link_domain(&it.url)),
        summary = summary_to_html_list(&it.summary),
    )
}

fn section_html(topic: &str, items: &[DigestItem]) -> String {
    let cards: String = items.iter().map(|it| card_html(topic, it)).collect();
    format!(
        r#"
  <section class="topic">
    <div class="topic-head">
      <h2 class="topic-title">{topic}</h2>
      <div class="topic-count">{count} vnt.</div>
    </div>
    <div class="cards">
      {cards}
    </div>
  </section>
"#,
        topic = esc(topic),
        count = items.len(),
        cards = cards,
    )
}

fn top3_html(top3: &[String]) -> String {
    if top3.is_empty() {
        return String::new();
    }
    let lines: String = top3
        .iter()
        .map(|line| format!("<li>{}</li>", esc(line.trim_start_matches('•').trim())))
        .collect();
    format!(
        r#"
  <section class="top3">
    <div class="top3-head">
      <div class="top3-kicker">Svarbiausia</div>
      <h2 class="top3-title">Top 3 šiandien</h2>
    </div>
    <ol class="top3-list">{lines}</ol>
  </section>
"#
    )
}

/// Render the digest document. Topics with zero items are present in
/// `sections` but not rendered; an entirely empty digest gets the placeholder
/// panel instead.
pub fn build_html(
    date_str: &str,
    header: &str,
    subtitle: &str,
    sections: &[(String, Vec<DigestItem>)],
    top3: &[String],
    weather_line: Option<&str>,
    generated_at: &str,
) -> String {
    let sections_html: String = sections
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(topic, items)| section_html(topic, items))
        .collect();

    let body_content = if sections_html.is_empty() {
        r#"
  <div class="empty">
    Šiuo metu naujienų šiame lange nerasta. Bandyk vėliau.
  </div>
"#
        .to_string()
    } else {
        sections_html
    };

    let weather_html = weather_line
        .map(|line| {
            format!(
                r#"<div class="weather"><span class="weather-dot"></span><span>{}</span></div>"#,
                esc(line)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="lt">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>{style}</style>
</head>
<body>
  <div class="topbar">
    <div class="topbar-inner">
      <div class="brand">
        <div class="logo">LRT</div>
        <div>
          Naujienų santrauka <small>RSS + AI</small>
        </div>
      </div>
    </div>
  </div>

  <div class="wrap">
    <section class="hero">
      <h1>{header}</h1>
      <p class="sub">{subtitle}</p>
      <div class="meta2">
        <span class="pill"><b>Šaltinis:</b> LRT RSS</span>
        <span class="pill"><b>Data:</b> {date}</span>
        <span class="pill"><b>Sugeneruota:</b> {generated}</span>
        {weather}
      </div>
    </section>

    {top3}

    {body}

    <div class="footer">
      Pastaba: santraukos generuojamos automatiškai; detales tikrink pilnuose straipsniuose.
    </div>
  </div>
</body>
</html>
"#,
        title = esc(header),
        style = STYLE,
        header = esc(header),
        subtitle = esc(subtitle),
        date = esc(date_str),
        generated = esc(generated_at),
        weather = weather_html,
        top3 = top3_html(top3),
        body = body_content,
    )
}

const STYLE: &str = r#"
    :root {
      --bg: #f3f4f6;
      --panel: #ffffff;
      --text: #111827;
      --muted: #6b7280;
      --border: #e5e7eb;
      --shadow: 0 8px 24px rgba(17, 24, 39, 0.08);
      --accent: #0b3d91;
      --accent-soft: rgba(11, 61, 145, 0.10);
      --radius: 14px;
    }
    * { box-sizing: border-box; }
    body {
      margin: 0;
      background: var(--bg);
      color: var(--text);
      font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial;
      line-height: 1.55;
    }
    .topbar {
      background: var(--panel);
      border-bottom: 1px solid var(--border);
    }
    .topbar-inner {
      max-width: 980px;
      margin: 0 auto;
      padding: 12px 16px;
      display: flex;
      align-items: center;
      gap: 12px;
    }
    .brand {
      display: flex;
      align-items: center;
      gap: 10px;
      font-weight: 800;
      letter-spacing: 0.2px;
    }
    .logo {
      width: 34px;
      height: 34px;
      border-radius: 10px;
      background: var(--accent);
      color: #fff;
      display: grid;
      place-items: center;
      font-weight: 900;
    }
    .brand small {
      color: var(--muted);
      font-weight: 600;
    }
    .wrap {
      max-width: 980px;
      margin: 18px auto 48px;
      padding: 0 16px;
    }
    .hero {
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: var(--radius);
      box-shadow: var(--shadow);
      padding: 18px 18px 14px;
    }
    .hero h1 {
      margin: 0 0 6px;
      font-size: 22px;
    }
    .hero .sub {
      margin: 0;
      color: var(--muted);
      font-size: 14px;
    }
    .hero .meta2 {
      margin-top: 10px;
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
      color: var(--muted);
      font-size: 13px;
    }
    .pill {
      border: 1px solid var(--border);
      background: #fff;
      padding: 6px 10px;
      border-radius: 999px;
      display: inline-flex;
      gap: 8px;
      align-items: center;
    }
    .pill b { color: var(--text); }
    .weather {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      padding: 6px 10px;
      border-radius: 999px;
      border: 1px solid var(--border);
      background: #fff;
    }
    .weather-dot {
      width: 8px; height: 8px;
      border-radius: 999px;
      background: var(--accent);
      display: inline-block;
    }
    .top3 {
      margin-top: 14px;
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: var(--radius);
      box-shadow: var(--shadow);
      padding: 16px 18px;
    }
    .top3-kicker {
      display: inline-block;
      background: var(--accent-soft);
      color: var(--accent);
      padding: 4px 10px;
      border-radius: 999px;
      font-weight: 700;
      font-size: 12px;
    }
    .top3-title {
      margin: 10px 0 8px;
      font-size: 18px;
    }
    .top3-list {
      margin: 0;
      padding-left: 18px;
      color: var(--text);
    }
    .top3-list li {
      margin: 6px 0;
    }

    .topic {
      margin-top: 16px;
    }
    .topic-head {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      padding: 0 2px;
      margin-bottom: 10px;
    }
    .topic-title {
      margin: 0;
      font-size: 16px;
    }
    .topic-count {
      color: var(--muted);
      font-size: 13px;
    }
    .cards {
      display: grid;
      grid-template-columns: 1fr;
      gap: 12px;
    }
    @media (min-width: 860px) {
      .cards { grid-template-columns: 1fr 1fr; }
    }
    .card {
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: var(--radius);
      box-shadow: var(--shadow);
      padding: 14px 14px 12px;
    }
    .card-title {
      margin: 0;
      font-size: 15px;
    }
    .meta {
      margin-top: 6px;
      color: var(--muted);
      font-size: 12.5px;
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      align-items: center;
    }
    .dot { opacity: 0.6; }
    .meta-link {
      color: var(--muted);
      text-decoration: none;
      border-bottom: 1px dotted rgba(107,114,128,0.6);
    }
    .meta-link:hover { color: var(--text); }
    .card-body {
      margin-top: 10px;
      font-size: 13.5px;
      color: var(--text);
    }

    .badge {
      display: inline-block;
      margin-right: 8px;
      padding: 3px 8px;
      border-radius: 999px;
      font-size: 11px;
      font-weight: 900;
      vertical-align: middle;
      letter-spacing: 0.3px;
    }
    .badge.breaking {
      background: var(--accent);
      color: #fff;
    }
    .summary-list {
      margin: 8px 0 0 18px;
      padding: 0;
    }

    .summary-list li {
      margin-bottom: 6px;
    }

    .empty {
      margin-top: 16px;
      background: var(--panel);
      border: 1px dashed var(--border);
      border-radius: var(--radius);
      padding: 16px;
      color: var(--muted);
      text-align: center;
    }
    .footer {
      margin-top: 18px;
      text-align: center;
      color: var(--muted);
      font-size: 12px;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_extraction() {
        assert_eq!(link_domain("https://www.lrt.lt/naujienos/x"), "www.lrt.lt");
        assert_eq!(link_domain("http://example.test/a/b"), "example.test");
        assert_eq!(link_domain("not-a-url"), "");
        // No trailing slash after the host: no match, like the reference.
        assert_eq!(link_domain("https://example.test"), "");
    }

    #[test]
    fn bulleted_summary_becomes_a_list() {
        let html = summary_to_html_list("- Pirmas punktas\n• Antras punktas\n\n- Trečias");
        assert!(html.starts_with("<ul class='summary-list'>"));
        assert!(html.contains("<li>Pirmas punktas</li>"));
        assert!(html.contains("<li>Antras punktas</li>"));
        assert!(html.contains("<li>Trečias</li>"));
    }

    #[test]
    fn blank_summary_stays_plain() {
        assert_eq!(summary_to_html_list("  "), esc("  "));
    }
}
