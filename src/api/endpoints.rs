// URL builders for the data feed, the wiki and the stats site.

use crate::config::Config;

pub fn catalog_url(config: &Config, locale: &str) -> String {
    format!(
        "{}/{}/data/{}/champion.json",
        config.ddragon_base, config.version, locale
    )
}

pub fn detail_url(config: &Config, key: &str) -> String {
    format!(
        "{}/{}/data/{}/champion/{}.json",
        config.ddragon_base, config.version, config.canonical_locale, key
    )
}

pub fn wiki_audio_url(config: &Config, display_name: &str) -> String {
    format!("{}/{}/LoL/Audio", config.wiki_base, wiki_title(display_name))
}

pub fn role_stats_url(config: &Config, slug: &str) -> String {
    format!("{}/{}", config.stats_base, slug)
}

pub fn loading_art_url(config: &Config, key: &str) -> String {
    format!("{}/img/champion/loading/{}_0.jpg", config.ddragon_base, key)
}

pub fn splash_art_url(config: &Config, key: &str, num: u32) -> String {
    format!("{}/img/champion/splash/{}_{}.jpg", config.ddragon_base, key, num)
}

pub fn spell_icon_url(config: &Config, image: &str) -> String {
    format!("{}/{}/img/spell/{}", config.ddragon_base, config.version, image)
}

pub fn passive_icon_url(config: &Config, image: &str) -> String {
    format!("{}/{}/img/passive/{}", config.ddragon_base, config.version, image)
}

/// Wiki page title: every whitespace run becomes a single underscore.
pub fn wiki_title(display_name: &str) -> String {
    let mut out = String::with_capacity(display_name.len());
    let mut in_space = false;
    for c in display_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
