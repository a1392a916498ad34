//! Sequential id assignment for catalog entries.

/// Allocate the next id over the set of ids currently in the store.
///
/// Ids are decimal strings of a monotonic counter: the result is
/// `max(parseable ids) + 1`, saturating at `u64::MAX`. Ids that do not parse
/// as integers are excluded from the maximum, and an empty set yields `"1"`.
/// Pure, so backends and the sync service share one allocation rule.
pub fn allocate_id(existing: &[String]) -> String {
    let max = existing
        .iter()
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    max.saturating_add(1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_set_yields_one() {
        assert_eq!(allocate_id(&[]), "1");
    }

    #[test]
    fn test_gap_in_ids_continues_from_max() {
        assert_eq!(allocate_id(&ids(&["1", "2", "5"])), "6");
    }

    #[test]
    fn test_non_numeric_ids_are_ignored() {
        assert_eq!(allocate_id(&ids(&["abc", "x-7"])), "1");
        assert_eq!(allocate_id(&ids(&["3", "legacy", ""])), "4");
    }

    #[test]
    fn test_allocated_id_is_fresh() {
        let existing = ids(&["1", "2", "5", "12", "oddball"]);
        let next = allocate_id(&existing);
        assert!(!existing.contains(&next));
    }

    #[test]
    fn test_allocation_is_numerically_increasing() {
        let mut existing = ids(&["2", "9"]);
        let first = allocate_id(&existing);
        existing.push(first.clone());
        let second = allocate_id(&existing);

        let first_n: u64 = first.parse().unwrap();
        let second_n: u64 = second.parse().unwrap();
        assert!(second_n > first_n);
    }

    #[test]
    fn test_saturates_at_counter_limit() {
        let existing = ids(&["3", "18446744073709551615"]);
        assert_eq!(allocate_id(&existing), u64::MAX.to_string());
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(allocate_id(&ids(&[" 7 "])), "8");
    }
}
