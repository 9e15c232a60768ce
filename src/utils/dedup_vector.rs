use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicates a slice while maintaining the original order.
///
/// # Arguments
/// * `items` - Elements to deduplicate; the first occurrence of each wins.
///
/// # Returns
/// A new vector with duplicates removed, preserving the original order.
pub fn dedup_vector<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
