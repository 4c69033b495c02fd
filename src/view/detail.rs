use crate::api::client::ChampionClient;
use crate::api::models::{ChampionDetail, Quote, Spell};
use crate::api::transport::Transport;

pub const ABILITY_SLOTS: [&str; 4] = ["Q", "W", "E", "R"];
pub const QUOTES_PER_PAGE: usize = 20;

/// Everything the detail page shows for one champion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampionView {
    pub detail: ChampionDetail,
    pub quotes: Vec<Quote>,
}

impl ChampionView {
    /// Loads the champion, then its voice lines by resolved display name.
    /// `None` means the champion could not be found or loaded; missing voice
    /// lines only leave `quotes` empty.
    pub fn assemble<T: Transport>(
        client: &ChampionClient<T>,
        identifier: Option<&str>,
    ) -> Option<Self> {
        let detail = client.fetch_detail(identifier)?;
        let quotes = client.fetch_quotes(Some(&detail.name));
        Some(ChampionView { detail, quotes })
    }

    /// Spells paired with their ability key. Spells past the fourth have no
    /// slot and are left out.
    pub fn spell_slots(&self) -> Vec<(&'static str, &Spell)> {
        if self.detail.spells.len() != ABILITY_SLOTS.len() {
            log::debug!(
                "{} has {} spells, expected {}",
                self.detail.id,
                self.detail.spells.len(),
                ABILITY_SLOTS.len()
            );
        }
        ABILITY_SLOTS.iter().copied().zip(self.detail.spells.iter()).collect()
    }
}

/// File name in front of `.ogg` in an audio reference, or "".
pub fn audio_file_stem(reference: &str) -> &str {
    let Some(ogg) = reference.find(".ogg") else {
        return "";
    };
    let before = &reference[..ogg];
    match before.rfind('/') {
        Some(slash) => &before[slash + 1..],
        None => before,
    }
}
