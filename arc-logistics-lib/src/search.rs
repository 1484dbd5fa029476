//! Free-text lookup over the item index.

use crate::index::{ItemIndex, ItemStatusEntry, canonical_name};

/// Find index entries whose display name contains `query`, ignoring case.
///
/// A blank query returns nothing. Results are ordered by remaining demand,
/// highest first; equal demand keeps index order. An empty result means the
/// item is not tracked and can be discarded.
pub fn search<'a>(index: &'a ItemIndex, query: &str) -> Vec<&'a ItemStatusEntry> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = canonical_name(query);
    let mut results: Vec<&ItemStatusEntry> = index
        .iter()
        .filter(|entry| canonical_name(&entry.display_name).contains(&needle))
        .collect();

    results.sort_by(|a, b| b.remaining_needed.cmp(&a.remaining_needed));
    results
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
