use crate::error::AppError;
use std::env;

pub const DEFAULT_VERSION: &str = "14.7.1";
pub const DEFAULT_LOCALE: &str = "es_ES";
pub const DEFAULT_CANONICAL_LOCALE: &str = "en_US";
pub const DEFAULT_DDRAGON_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";
pub const DEFAULT_WIKI_BASE: &str = "https://leagueoflegends.fandom.com/wiki";
pub const DEFAULT_STATS_BASE: &str = "https://www.leagueofgraphs.com/es/champions/stats";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Data feed version, used as a path segment.
    pub version: String,
    /// Localized variant used for the listing.
    pub locale: String,
    /// Unlocalized variant used for key resolution and details.
    pub canonical_locale: String,
    pub ddragon_base: String,
    pub wiki_base: String,
    pub stats_base: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: DEFAULT_VERSION.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            canonical_locale: DEFAULT_CANONICAL_LOCALE.to_string(),
            ddragon_base: DEFAULT_DDRAGON_BASE.to_string(),
            wiki_base: DEFAULT_WIKI_BASE.to_string(),
            stats_base: DEFAULT_STATS_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing or blank values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let config = Config {
            version: read("DDRAGON_VERSION", DEFAULT_VERSION),
            locale: read("DDRAGON_LOCALE", DEFAULT_LOCALE),
            canonical_locale: read("DDRAGON_CANONICAL_LOCALE", DEFAULT_CANONICAL_LOCALE),
            ddragon_base: trim_slash(read("DDRAGON_BASE_URL", DEFAULT_DDRAGON_BASE)),
            wiki_base: trim_slash(read("WIKI_BASE_URL", DEFAULT_WIKI_BASE)),
            stats_base: trim_slash(read("STATS_BASE_URL", DEFAULT_STATS_BASE)),
            user_agent: read("SCRAPER_USER_AGENT", DEFAULT_USER_AGENT),
        };

        for (name, url) in [
            ("DDRAGON_BASE_URL", &config.ddragon_base),
            ("WIKI_BASE_URL", &config.wiki_base),
            ("STATS_BASE_URL", &config.stats_base),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::ConfigError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(config)
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
