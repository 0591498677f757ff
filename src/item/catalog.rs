//! # Item Catalog
//!
//! Defines [`Item`] and loads catalogs from JSON files.
//!
//! ## Catalog Format
//!
//! A catalog is a JSON array of objects:
//!
//! ```json
//! [
//!   { "value": "nginx", "label": "Nginx", "category": "Services" },
//!   { "value": "htop", "category": "Tools" },
//!   { "value": "misc-note" }
//! ]
//! ```
//!
//! `value` is the selection identity and must be unique and non-empty.
//! `label` defaults to the value when omitted. Items without a `category`
//! are grouped under [`super::DEFAULT_CATEGORY`] at render time.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One selectable entry. Supplied once by the caller and never mutated by
/// the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identity; this is what a confirmed selection reports.
    pub value: String,
    /// Human-readable search/display text. Defaults to `value` when absent
    /// in a catalog file.
    #[serde(default)]
    pub label: String,
    /// Optional grouping key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Item {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Load and validate a catalog from a JSON file.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&contents)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Parse a catalog from a JSON string, normalizing missing labels and
/// rejecting empty or duplicate values.
pub fn parse_catalog(contents: &str) -> Result<Vec<Item>> {
    let mut items: Vec<Item> =
        serde_json::from_str(contents).context("Catalog must be a JSON array of items")?;

    let mut seen = HashSet::new();
    for (index, item) in items.iter_mut().enumerate() {
        if item.value.is_empty() {
            bail!("Item at index {} has an empty value", index);
        }
        if !seen.insert(item.value.clone()) {
            bail!("Duplicate item value: {}", item.value);
        }
        if item.label.is_empty() {
            item.label = item.value.clone();
        }
    }

    Ok(items)
}
