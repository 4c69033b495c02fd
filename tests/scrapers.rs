mod common;

use champion_codex::api::transport::MockTransport;
use champion_codex::Quote;
use common::*;

#[test]
fn placeholder_and_blank_captions_are_dropped() {
    let c = client(upstream());
    let quotes = c.fetch_quotes(Some("Ahri"));

    assert_eq!(
        quotes,
        vec![Quote {
            text: "Hello".to_string(),
            audio: "https://static.wikia.nocookie.net/leagueoflegends/images/1/1a/Ahri_Original_Move_0.ogg/revision/latest?cb=20220814".to_string(),
        }]
    );
}

#[test]
fn display_name_spaces_become_underscores() {
    let c = client(MockTransport::new());
    assert!(c.fetch_quotes(Some("Miss  Fortune")).is_empty());
    assert_eq!(
        c.transport().requested_urls(),
        vec!["https://leagueoflegends.fandom.com/wiki/Miss_Fortune/LoL/Audio"]
    );
}

#[test]
fn quotes_degrade_to_empty() {
    let c = client(MockTransport::new().route(AHRI_AUDIO_URL, 404, AHRI_AUDIO));
    assert!(c.fetch_quotes(Some("Ahri")).is_empty());

    let c = client(MockTransport::new().ok(AHRI_AUDIO_URL, "\u{0}\u{1}garbage<<<"));
    assert!(c.fetch_quotes(Some("Ahri")).is_empty());

    let drifted = AHRI_AUDIO
        .replace("<audio", "<div data-kind=\"audio\"")
        .replace("</audio>", "</div>");
    let c = client(MockTransport::new().ok(AHRI_AUDIO_URL, drifted));
    assert!(c.fetch_quotes(Some("Ahri")).is_empty());
}

#[test]
fn n_audio_elements_minus_k_placeholders() {
    let mut html = String::from("<ul>");
    for i in 0..7 {
        let caption = if i % 3 == 0 { "Link".to_string() } else { format!("Line {}", i) };
        html.push_str(&format!(
            r#"<li><audio><source src="https://static/{}.ogg"></audio>{}</li>"#,
            i, caption
        ));
    }
    html.push_str("</ul>");

    let c = client(MockTransport::new().ok(AHRI_AUDIO_URL, html));
    let quotes = c.fetch_quotes(Some("Ahri"));
    // captions "Link" at 0, 3, 6
    assert_eq!(quotes.len(), 7 - 3);
    assert_eq!(quotes[0].text, "Line 1");
    assert_eq!(quotes[3].audio, "https://static/5.ogg");
}

#[test]
fn role_stats_skip_header_and_zero_bad_values() {
    let c = client(upstream());
    let stats = c.fetch_role_stats("ahri");

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].role, "Medio");
    assert_eq!(stats[0].popularity, 12.5);
    assert_eq!(stats[0].win_rate, 51.3);
    assert_eq!(stats[1].role, "Apoyo");
    assert_eq!(stats[1].popularity, 0.0);
    assert_eq!(stats[1].win_rate, 0.0);
    assert_eq!(c.transport().last_user_agent().as_deref(), Some("Mozilla/5.0"));
}

#[test]
fn role_stats_degrade_to_empty() {
    let c = client(MockTransport::new().route(AHRI_ROLES_URL, 403, "blocked"));
    assert!(c.fetch_role_stats("ahri").is_empty());

    let c = client(MockTransport::new().ok(AHRI_ROLES_URL, "{\"not\": \"a page\"}"));
    assert!(c.fetch_role_stats("ahri").is_empty());

    let c = client(MockTransport::new());
    assert!(c.fetch_role_stats("ahri").is_empty());
}

#[test]
fn repeated_scrapes_are_equal() {
    let c = client(upstream());
    assert_eq!(c.fetch_quotes(Some("Ahri")), c.fetch_quotes(Some("Ahri")));
    assert_eq!(c.fetch_role_stats("ahri"), c.fetch_role_stats("ahri"));
}
