use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Response wrapper shared by the catalog and detail documents.
/// Keys stay in document order.
#[derive(Debug, Deserialize)]
pub struct FeedEnvelope {
    pub data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChampionSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skin {
    pub num: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Spell {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Passive {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: ImageRef,
}

/// Ordered stat-key -> value pairs. Non-numeric values are dropped, unknown
/// keys are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stats(pub Vec<(String, f64)>);

impl Stats {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Stats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Stats(
            map.into_iter()
                .filter_map(|(k, v)| v.as_f64().map(|n| (k, n)))
                .collect(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChampionDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lore: String,
    #[serde(default, deserialize_with = "usable_image")]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub skins: Vec<Skin>,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub passive: Passive,
    #[serde(default)]
    pub stats: Stats,
}

impl ChampionDetail {
    pub fn summary(&self) -> ChampionSummary {
        ChampionSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            blurb: self.blurb.clone(),
            tags: self.tags.clone(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An image object without a file name, or of the wrong shape, is no image.
fn usable_image<'de, D>(deserializer: D) -> Result<Option<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value::<ImageRef>(v).ok())
        .filter(|image| !image.full.is_empty()))
}

/// A voice line scraped from the wiki.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub text: String,
    pub audio: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleStat {
    pub role: String,
    pub popularity: f64,
    pub win_rate: f64,
}

/// Lowercased key -> canonical key, built from the canonical catalog.
///
/// The feed is assumed to hold no two keys that differ only by case. If it
/// ever does, the key that appears first in the document wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyIndex {
    by_folded: HashMap<String, String>,
}

impl KeyIndex {
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_folded = HashMap::new();
        for key in keys {
            let key = key.into();
            by_folded.entry(key.to_lowercase()).or_insert(key);
        }
        KeyIndex { by_folded }
    }

    pub fn resolve(&self, identifier: &str) -> Option<&str> {
        self.by_folded
            .get(&identifier.to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_folded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_folded.is_empty()
    }
}
