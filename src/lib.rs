//! Tickbox - an interactive terminal multi-select prompt
//!
//! This library provides a searchable, categorized multi-select prompt for
//! the terminal: raw keyboard input, full-screen redraws, and a result that
//! is either the confirmed selection or an explicit cancellation.

pub mod item;
pub mod prompt;

pub use item::{filter_items, group_items, load_items, Item, ItemGroup};
pub use prompt::{MultiSelect, PromptResult, Theme};
