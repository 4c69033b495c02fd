use crate::api::models::Quote;
use scraper::{ElementRef, Html, Selector};

/// Caption the wiki emits for entries without a usable transcript.
const PLACEHOLDER_CAPTION: &str = "Link";

/// Pulls every `<audio>` element out of a wiki audio page, pairing the first
/// nested `<source src>` with the trimmed text of the audio's parent.
pub fn extract_quotes(html: &str) -> Vec<Quote> {
    let (Ok(audio_sel), Ok(source_sel)) = (Selector::parse("audio"), Selector::parse("source"))
    else {
        return vec![];
    };

    let document = Html::parse_document(html);
    let mut quotes = Vec::new();

    for audio in document.select(&audio_sel) {
        let src = audio
            .select(&source_sel)
            .next()
            .and_then(|source| source.value().attr("src"))
            .unwrap_or_default();

        let text = audio
            .parent()
            .and_then(ElementRef::wrap)
            .map(|parent| parent.text().collect::<String>())
            .unwrap_or_default();
        let text = text.trim();

        if src.is_empty() || text.is_empty() || text == PLACEHOLDER_CAPTION {
            continue;
        }

        quotes.push(Quote {
            text: text.to_string(),
            audio: src.to_string(),
        });
    }

    quotes
}
