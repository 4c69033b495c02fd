#![allow(dead_code)]

use champion_codex::api::transport::MockTransport;
use champion_codex::{ChampionClient, Config};

pub const CATALOG_EN: &str = include_str!("../fixtures/catalog_en.json");
pub const CATALOG_ES: &str = include_str!("../fixtures/catalog_es.json");
pub const AHRI: &str = include_str!("../fixtures/ahri.json");
pub const AHRI_PARTIAL_IMAGES: &str = include_str!("../fixtures/ahri_partial_images.json");
pub const CATALOG_ES_PARTIAL: &str = include_str!("../fixtures/catalog_es_partial.json");
pub const AATROX: &str = include_str!("../fixtures/aatrox.json");
pub const AHRI_AUDIO: &str = include_str!("../fixtures/ahri_audio.html");
pub const AHRI_ROLES: &str = include_str!("../fixtures/ahri_roles.html");

pub const CANONICAL_URL: &str =
    "https://ddragon.leagueoflegends.com/cdn/14.7.1/data/en_US/champion.json";
pub const LISTING_URL: &str =
    "https://ddragon.leagueoflegends.com/cdn/14.7.1/data/es_ES/champion.json";
pub const AHRI_URL: &str =
    "https://ddragon.leagueoflegends.com/cdn/14.7.1/data/en_US/champion/Ahri.json";
pub const AATROX_URL: &str =
    "https://ddragon.leagueoflegends.com/cdn/14.7.1/data/en_US/champion/Aatrox.json";
pub const AHRI_AUDIO_URL: &str = "https://leagueoflegends.fandom.com/wiki/Ahri/LoL/Audio";
pub const AHRI_ROLES_URL: &str = "https://www.leagueofgraphs.com/es/champions/stats/ahri";

/// Every upstream document served healthy.
pub fn upstream() -> MockTransport {
    MockTransport::new()
        .ok(CANONICAL_URL, CATALOG_EN)
        .ok(LISTING_URL, CATALOG_ES)
        .ok(AHRI_URL, AHRI)
        .ok(AATROX_URL, AATROX)
        .ok(AHRI_AUDIO_URL, AHRI_AUDIO)
        .ok(AHRI_ROLES_URL, AHRI_ROLES)
}

pub fn client(transport: MockTransport) -> ChampionClient<MockTransport> {
    ChampionClient::with_transport(Config::default(), transport)
}
