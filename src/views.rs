//! Display projections over the entry list.
//!
//! All functions are pure: they derive a new vector and never reorder or
//! mutate the source of truth held by the app.

use crate::entry::{CategoryFilter, Entry};

/// Number of entries the showcase slider rotates through.
pub const SHOWCASE_SIZE: usize = 5;

/// Entries matching a category, in their original relative order.
/// `CategoryFilter::All` is the identity projection.
pub fn filter_by_category(entries: &[Entry], filter: &CategoryFilter) -> Vec<Entry> {
    match filter {
        CategoryFilter::All => entries.to_vec(),
        CategoryFilter::Only(category) => entries
            .iter()
            .filter(|e| e.category == *category)
            .cloned()
            .collect(),
    }
}

/// The last `n` entries in store order, for the showcase slider.
///
/// Store order, not timestamps: the newest entries sit at the tail of the
/// list the backend returned.
pub fn recent_for_showcase(entries: &[Entry], n: usize) -> Vec<Entry> {
    let start = entries.len().saturating_sub(n);
    entries[start..].to_vec()
}

/// Categories present in the list, first-seen order, with a leading `All`.
pub fn distinct_categories(entries: &[Entry]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    for entry in entries {
        let filter = CategoryFilter::Only(entry.category);
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, Rarity, Vec3};

    fn entry(id: &str, category: Category) -> Entry {
        Entry {
            id: id.to_string(),
            name: format!("Creature {}", id),
            category,
            health: 10.0,
            damage: "0 (None)".to_string(),
            behavior: "Idle".to_string(),
            habitat: "Everywhere".to_string(),
            drops: vec![],
            rarity: Rarity::Common,
            description: "test".to_string(),
            model: "m.glb".to_string(),
            image: "i.png".to_string(),
            banner: "b.jpg".to_string(),
            sound: "s.ogg".to_string(),
            scale: 1.0,
            position: Vec3::default(),
            rotation: Vec3::default(),
            weaknesses: vec![],
            abilities: vec![],
            created_at: None,
            updated_at: None,
            is_playing_sound: false,
        }
    }

    fn entry_ids(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_filter_all_is_identity() {
        let entries = vec![
            entry("1", Category::Passive),
            entry("2", Category::Hostile),
            entry("3", Category::Boss),
        ];
        let filtered = filter_by_category(&entries, &CategoryFilter::All);
        assert_eq!(entry_ids(&filtered), entry_ids(&entries));
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let entries = vec![
            entry("1", Category::Hostile),
            entry("2", Category::Passive),
            entry("3", Category::Hostile),
            entry("4", Category::Hostile),
        ];
        let filtered =
            filter_by_category(&entries, &CategoryFilter::Only(Category::Hostile));
        assert_eq!(entry_ids(&filtered), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_filter_unmatched_category_is_empty() {
        let entries = vec![entry("1", Category::Passive)];
        let filtered = filter_by_category(&entries, &CategoryFilter::Only(Category::Boss));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_showcase_smaller_list_returned_whole() {
        let entries = vec![
            entry("1", Category::Passive),
            entry("2", Category::Hostile),
            entry("3", Category::Neutral),
        ];
        let recent = recent_for_showcase(&entries, 5);
        assert_eq!(entry_ids(&recent), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_showcase_takes_tail_slice() {
        let entries: Vec<Entry> = (1..=8)
            .map(|i| entry(&i.to_string(), Category::Passive))
            .collect();
        let recent = recent_for_showcase(&entries, 5);
        assert_eq!(entry_ids(&recent), vec!["4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_showcase_of_empty_list() {
        assert!(recent_for_showcase(&[], 5).is_empty());
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let entries = vec![
            entry("1", Category::Hostile),
            entry("2", Category::Passive),
            entry("3", Category::Hostile),
            entry("4", Category::Boss),
        ];
        let filters = distinct_categories(&entries);
        assert_eq!(
            filters,
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(Category::Hostile),
                CategoryFilter::Only(Category::Passive),
                CategoryFilter::Only(Category::Boss),
            ]
        );
    }

    #[test]
    fn test_distinct_categories_always_leads_with_all() {
        assert_eq!(distinct_categories(&[]), vec![CategoryFilter::All]);
    }
}
