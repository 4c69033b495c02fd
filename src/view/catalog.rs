use crate::api::models::ChampionSummary;

pub const CHAMPIONS_PER_PAGE: usize = 20;

/// Champions whose name contains `search` (any case) and, when `tag` is
/// non-empty, that carry that role tag. Order is preserved.
pub fn filter_catalog<'a>(
    champions: &'a [ChampionSummary],
    search: &str,
    tag: &str,
) -> Vec<&'a ChampionSummary> {
    let needle = search.to_lowercase();
    champions
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .filter(|c| tag.is_empty() || c.tags.iter().any(|t| t == tag))
        .collect()
}

/// Distinct role tags in first-seen order.
pub fn all_tags(champions: &[ChampionSummary]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in champions.iter().flat_map(|c| c.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

pub fn translate_role(tag: &str) -> &str {
    match tag {
        "Assassin" => "Asesino",
        "Fighter" => "Luchador",
        "Tank" => "Tanque",
        "Mage" => "Mago",
        "Marksman" => "Tirador",
        "Support" => "Soporte",
        other => other,
    }
}

pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        len.div_ceil(per_page)
    }
}

/// Zero-based page slice. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page);
    if per_page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champ(name: &str, tags: &[&str]) -> ChampionSummary {
        ChampionSummary {
            id: name.replace(' ', ""),
            name: name.to_string(),
            title: String::new(),
            blurb: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample() -> Vec<ChampionSummary> {
        vec![
            champ("Aatrox", &["Fighter", "Tank"]),
            champ("Ahri", &["Mage", "Assassin"]),
            champ("Akali", &["Assassin"]),
            champ("Lee Sin", &["Fighter", "Assassin"]),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let list = sample();
        let names: Vec<_> = filter_catalog(&list, "A", "").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Aatrox", "Ahri", "Akali"]);
        assert_eq!(filter_catalog(&list, "sin", "").len(), 1);
        assert_eq!(filter_catalog(&list, "", "").len(), 4);
    }

    #[test]
    fn tag_filter_combines_with_search() {
        let list = sample();
        let names: Vec<_> = filter_catalog(&list, "a", "Assassin")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ahri", "Akali"]);
        assert!(filter_catalog(&list, "", "Support").is_empty());
    }

    #[test]
    fn tags_in_first_seen_order() {
        assert_eq!(all_tags(&sample()), vec!["Fighter", "Tank", "Mage", "Assassin"]);
    }

    #[test]
    fn role_translation() {
        assert_eq!(translate_role("Marksman"), "Tirador");
        assert_eq!(translate_role("Bard"), "Bard");
    }

    #[test]
    fn pages() {
        let items: Vec<u32> = (0..45).collect();
        assert_eq!(page_count(items.len(), 20), 3);
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(paginate(&items, 0, 20).len(), 20);
        assert_eq!(paginate(&items, 2, 20), &[40u32, 41, 42, 43, 44][..]);
        assert!(paginate(&items, 3, 20).is_empty());
        assert!(paginate(&items, 0, 0).is_empty());
    }
}
