// tests/render_html.rs
use lrt_digest::pipeline::DigestItem;
use lrt_digest::render::build_html;

fn item(topic: &str, title: &str, breaking: bool) -> DigestItem {
    DigestItem {
        topic: topic.to_string(),
        title: title.to_string(),
        url: "https://www.lrt.lt/naujienos/x/1".to_string(),
        summary: "- Pirmas punktas\n- Antras punktas".to_string(),
        published_at: None,
        published_local_str: "07:15".to_string(),
        is_breaking: breaking,
    }
}

fn render(sections: &[(String, Vec<DigestItem>)], top3: &[String], weather: Option<&str>) -> String {
    build_html(
        "2025-03-10",
        "LRT ryto naujienų santrauka — 2025-03-10",
        "Svarbiausios šios dienos naujienos (nuo 00:00).",
        sections,
        top3,
        weather,
        "2025-03-10 07:30",
    )
}

#[test]
fn interpolated_text_is_escaped() {
    let sections = vec![(
        "Lietuvoje".to_string(),
        vec![item("Lietuvoje", "<script>alert(1)</script> & co", false)],
    )];
    let html = render(&sections, &[], None);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
}

#[test]
fn breaking_badge_only_for_breaking_items() {
    let sections = vec![(
        "Lietuvoje".to_string(),
        vec![item("Lietuvoje", "Karšta", true)],
    )];
    let html = render(&sections, &[], None);
    assert!(html.contains(r#"<span class="badge breaking">NAUJA</span>"#));

    let sections = vec![(
        "Lietuvoje".to_string(),
        vec![item("Lietuvoje", "Rami", false)],
    )];
    let html = render(&sections, &[], None);
    assert!(!html.contains("NAUJA"));
}

#[test]
fn empty_digest_renders_placeholder_panel() {
    let sections = vec![("Lietuvoje".to_string(), vec![]), ("Sportas".to_string(), vec![])];
    let html = render(&sections, &[], None);
    assert!(html.contains("naujienų šiame lange nerasta"));
    assert!(!html.contains(r#"<h2 class="topic-title">"#));
}

#[test]
fn empty_topics_are_skipped_but_others_render() {
    let sections = vec![
        ("Lietuvoje".to_string(), vec![]),
        ("Sportas".to_string(), vec![item("Sportas", "Rungtynės", false)]),
    ];
    let html = render(&sections, &[], None);
    assert_eq!(html.matches(r#"<h2 class="topic-title">"#).count(), 1);
    assert!(html.contains("Rungtynės"));
    assert!(html.contains("1 vnt."));
}

#[test]
fn summary_lines_become_a_bullet_list() {
    let sections = vec![(
        "Verslas".to_string(),
        vec![item("Verslas", "Rinkos", false)],
    )];
    let html = render(&sections, &[], None);
    assert!(html.contains("<li>Pirmas punktas</li>"));
    assert!(html.contains("<li>Antras punktas</li>"));
}

#[test]
fn top3_block_renders_with_leading_bullets_stripped() {
    let top3 = vec![
        "• Pirma — nes svarbu".to_string(),
        "• Antra — nes svarbu".to_string(),
    ];
    let html = render(&[], &top3, None);
    assert!(html.contains("Top 3 šiandien"));
    assert!(html.contains("<li>Pirma — nes svarbu</li>"));

    let html = render(&[], &[], None);
    assert!(!html.contains("Top 3 šiandien"));
}

#[test]
fn weather_pill_is_optional() {
    let html = render(&[], &[], Some("Vilnius: dabar 2°C."));
    assert!(html.contains("Vilnius: dabar 2°C."));

    let html = render(&[], &[], None);
    assert!(!html.contains("weather-dot\"></span><span>"));
}

#[test]
fn card_links_to_the_article_domain() {
    let sections = vec![(
        "Lietuvoje".to_string(),
        vec![item("Lietuvoje", "Straipsnis", false)],
    )];
    let html = render(&sections, &[], None);
    assert!(html.contains(r#"href="https://www.lrt.lt/naujienos/x/1""#));
    assert!(html.contains("Skaityti www.lrt.lt"));
    assert!(html.contains("07:15"));
}
