use crate::config::Config;
use crate::error::FetchError;
use crate::scrape::{quotes, role_stats};
use serde::de::DeserializeOwned;

use super::endpoints;
use super::models::*;
use super::transport::{Transport, UreqTransport};

/// Read-only client over the champion feed, the wiki and the stats site.
///
/// Every public fetch degrades instead of failing: an empty `Vec` or `None`
/// means "unavailable", and the cause has already been logged.
pub struct ChampionClient<T: Transport = UreqTransport> {
    config: Config,
    transport: T,
}

impl ChampionClient<UreqTransport> {
    pub fn new(config: Config) -> Self {
        ChampionClient::with_transport(config, UreqTransport)
    }
}

impl<T: Transport> ChampionClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        ChampionClient { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn execute_request(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {}", url);
        let resp = self.transport.get(url, &self.config.user_agent)?;
        if !resp.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: resp.status,
            });
        }
        Ok(resp.body)
    }

    fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, FetchError> {
        let body = self.execute_request(url)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Payload(e.to_string()))
    }

    /// Localized champion list for browsing. Empty means unavailable.
    pub fn fetch_catalog(&self) -> Vec<ChampionSummary> {
        match self.get_catalog() {
            Ok(list) => {
                log::info!("catalog: {} champions", list.len());
                list
            }
            Err(e) => {
                log::warn!("Error fetching all champions: {}", e);
                Vec::new()
            }
        }
    }

    /// Only an unusable envelope fails; a malformed entry is logged and skipped.
    fn get_catalog(&self) -> Result<Vec<ChampionSummary>, FetchError> {
        let url = endpoints::catalog_url(&self.config, &self.config.locale);
        let envelope: FeedEnvelope = self.get_json(&url)?;
        Ok(envelope
            .data
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value(value) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    log::warn!("Skipping catalog entry '{}': {}", key, e);
                    None
                }
            })
            .collect())
    }

    /// Canonical keys of the unlocalized feed, indexed case-insensitively.
    fn get_key_index(&self) -> Result<KeyIndex, FetchError> {
        let url = endpoints::catalog_url(&self.config, &self.config.canonical_locale);
        let envelope: FeedEnvelope = self.get_json(&url)?;
        Ok(KeyIndex::from_keys(envelope.data.into_iter().map(|(key, _)| key)))
    }

    /// Resolves `identifier` in any casing to the canonical key and loads the
    /// full record. `None` or `""` returns `None` without touching the network.
    pub fn fetch_detail(&self, identifier: Option<&str>) -> Option<ChampionDetail> {
        let identifier = identifier.filter(|id| !id.is_empty())?;

        match self.get_detail(identifier) {
            Ok(detail) => Some(detail),
            Err(e) => {
                log::warn!("Error fetching champion '{}': {}", identifier, e);
                None
            }
        }
    }

    fn get_detail(&self, identifier: &str) -> Result<ChampionDetail, FetchError> {
        let index = self.get_key_index()?;
        let key = index
            .resolve(identifier)
            .ok_or_else(|| FetchError::NotFound(identifier.to_string()))?;

        let url = endpoints::detail_url(&self.config, key);
        let mut envelope: FeedEnvelope = self.get_json(&url)?;
        let record = envelope
            .data
            .remove(key)
            .ok_or_else(|| FetchError::Payload(format!("detail document has no '{}' entry", key)))?;

        serde_json::from_value(record).map_err(|e| FetchError::Payload(e.to_string()))
    }

    /// Voice lines from the wiki audio page of `display_name`, in page order.
    pub fn fetch_quotes(&self, display_name: Option<&str>) -> Vec<Quote> {
        let Some(name) = display_name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Vec::new();
        };

        let url = endpoints::wiki_audio_url(&self.config, name);
        match self.execute_request(&url) {
            Ok(html) => {
                let quotes = quotes::extract_quotes(&html);
                log::info!("{}: {} voice lines", name, quotes.len());
                quotes
            }
            Err(e) => {
                log::warn!("Error fetching champion audio quotes for {}: {}", name, e);
                Vec::new()
            }
        }
    }

    /// Per-role popularity and win rate from the stats site.
    pub fn fetch_role_stats(&self, slug: &str) -> Vec<RoleStat> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Vec::new();
        }

        let url = endpoints::role_stats_url(&self.config, slug);
        match self.execute_request(&url) {
            Ok(html) => {
                let stats = role_stats::extract_role_stats(&html);
                log::info!("{}: {} role rows", slug, stats.len());
                stats
            }
            Err(e) => {
                log::warn!("Error fetching champion role stats for {}: {}", slug, e);
                Vec::new()
            }
        }
    }
}
