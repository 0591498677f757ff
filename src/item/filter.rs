//! Search filtering over item lists.

use crate::item::Item;

/// Return the items whose label or category contains `query` as a
/// case-insensitive substring, preserving the original order.
///
/// An empty query returns the full list unchanged.
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .cloned()
        .collect()
}

fn matches_query(item: &Item, needle: &str) -> bool {
    item.label.to_lowercase().contains(needle)
        || item
            .category
            .as_deref()
            .is_some_and(|category| category.to_lowercase().contains(needle))
}
