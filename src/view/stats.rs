use crate::api::models::Stats;

pub const FALLBACK_ICON: &str = "📊";
pub const FALLBACK_MAX: f64 = 100.0;

struct StatInfo {
    key: &'static str,
    label: &'static str,
    icon: Option<&'static str>,
    max: f64,
}

const KNOWN_STATS: &[StatInfo] = &[
    StatInfo { key: "hp", label: "Health", icon: Some("❤️"), max: 3000.0 },
    StatInfo { key: "hpperlevel", label: "Health per level", icon: None, max: 200.0 },
    StatInfo { key: "mp", label: "Mana", icon: Some("🔵"), max: 1500.0 },
    StatInfo { key: "mpperlevel", label: "Mana per level", icon: None, max: 200.0 },
    StatInfo { key: "movespeed", label: "Movement Speed", icon: Some("🏃"), max: 500.0 },
    StatInfo { key: "armor", label: "Armor", icon: Some("🛡️"), max: 150.0 },
    StatInfo { key: "armorperlevel", label: "Armor per level", icon: None, max: 10.0 },
    StatInfo { key: "spellblock", label: "Magic Resist", icon: Some("✨"), max: 100.0 },
    StatInfo { key: "spellblockperlevel", label: "Magic Resist per level", icon: None, max: 5.0 },
    StatInfo { key: "attackrange", label: "Attack Range", icon: Some("🏹"), max: 700.0 },
    StatInfo { key: "hpregen", label: "Health Regeneration", icon: Some("💉"), max: 30.0 },
    StatInfo { key: "hpregenperlevel", label: "Health Regen per level", icon: None, max: 10.0 },
    StatInfo { key: "mpregen", label: "Mana Regeneration", icon: Some("🧪"), max: 30.0 },
    StatInfo { key: "mpregenperlevel", label: "Mana Regen per level", icon: None, max: 10.0 },
    StatInfo { key: "crit", label: "Critical Strike", icon: Some("🎯"), max: 100.0 },
    StatInfo { key: "critperlevel", label: "Critical per level", icon: None, max: 10.0 },
    StatInfo { key: "attackdamage", label: "Attack Damage", icon: Some("⚔️"), max: 200.0 },
    StatInfo { key: "attackdamageperlevel", label: "Attack Damage per level", icon: None, max: 10.0 },
    StatInfo { key: "attackspeed", label: "Attack Speed", icon: Some("💨"), max: 2.5 },
    StatInfo { key: "attackspeedperlevel", label: "Attack Speed per level", icon: None, max: 5.0 },
];

/// One renderable stat row. Unknown keys get the raw key as label, the
/// fallback icon and a scale of 100.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub key: String,
    pub label: String,
    pub icon: &'static str,
    pub value: f64,
    pub max: f64,
}

impl StatBar {
    pub fn new(key: &str, value: f64) -> Self {
        let known = KNOWN_STATS.iter().find(|s| s.key == key);
        StatBar {
            key: key.to_string(),
            label: known.map_or_else(|| key.to_string(), |s| s.label.to_string()),
            icon: known.and_then(|s| s.icon).unwrap_or(FALLBACK_ICON),
            value,
            max: known.map_or(FALLBACK_MAX, |s| s.max),
        }
    }

    /// Share of the scale, clamped to 0..=100.
    pub fn percentage(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_known(&self) -> bool {
        KNOWN_STATS.iter().any(|s| s.key == self.key)
    }
}

pub fn stat_bars(stats: &Stats) -> Vec<StatBar> {
    stats.iter().map(|(key, value)| StatBar::new(key, value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vocabulary_has_twenty_keys() {
        assert_eq!(KNOWN_STATS.len(), 20);
    }

    #[test]
    fn known_stat() {
        let bar = StatBar::new("hp", 1500.0);
        assert_eq!(bar.label, "Health");
        assert_eq!(bar.icon, "❤️");
        assert_eq!(bar.percentage(), 50.0);
        assert!(bar.is_known());
    }

    #[test]
    fn per_level_stats_use_fallback_icon() {
        let bar = StatBar::new("armorperlevel", 4.7);
        assert_eq!(bar.label, "Armor per level");
        assert_eq!(bar.icon, FALLBACK_ICON);
        assert_eq!(bar.max, 10.0);
    }

    #[test]
    fn unknown_stat_falls_back() {
        let bar = StatBar::new("omnivamp", 250.0);
        assert_eq!(bar.label, "omnivamp");
        assert_eq!(bar.icon, FALLBACK_ICON);
        assert_eq!(bar.max, FALLBACK_MAX);
        assert_eq!(bar.percentage(), 100.0);
        assert!(!bar.is_known());
    }

    #[test]
    fn negative_values_clamp_to_zero() {
        assert_eq!(StatBar::new("crit", -5.0).percentage(), 0.0);
    }

    #[test]
    fn bars_follow_stats_order() {
        let stats = Stats(vec![("mp".into(), 418.0), ("hp".into(), 590.0)]);
        let keys: Vec<_> = stat_bars(&stats).into_iter().map(|b| b.key).collect();
        assert_eq!(keys, vec!["mp", "hp"]);
    }
}
