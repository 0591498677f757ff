//! Category grouping for the rendered list.

use crate::item::Item;

/// Group name for items without a category.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A run of items sharing one category, in original item order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroup {
    pub name: String,
    pub items: Vec<Item>,
}

/// Partition items into groups keyed by category.
///
/// Groups appear in first-seen category order; within a group, items keep
/// their original order. Items with no category land in the
/// [`DEFAULT_CATEGORY`] group. Grouping is a rendering concern only and
/// never affects selection identity.
pub fn group_items(items: &[Item]) -> Vec<ItemGroup> {
    let mut groups: Vec<ItemGroup> = Vec::new();

    for item in items {
        let name = item.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(ItemGroup {
                name: name.to_string(),
                items: vec![item.clone()],
            }),
        }
    }

    groups
}
