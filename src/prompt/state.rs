//! # Session State Machine
//!
//! One prompt invocation owns a single [`SessionState`]. The state is only
//! ever changed by [`transition`], a pure function from the current state,
//! one decoded [`PromptEvent`], and the currently filtered-and-grouped view
//! to the next state (or a terminal outcome). The controller holds the only
//! mutable binding and replaces it by assignment after each event, which
//! keeps every transition unit-testable without a terminal.
//!
//! Two index spaces are in play and both live here and in the renderer:
//! `cursor_index` counts *items only*, in display (grouped) order, while
//! `scroll_offset` counts *display rows*, where every category header
//! occupies a row of its own. The window arithmetic below and the
//! renderer's row windowing share the row space, so a window computed here
//! always contains the cursor row on screen.
//!
//! ## Invariants
//!
//! After every transition:
//!
//! - `cursor_index` is within `[0, item_count - 1]` when the filtered view
//!   is non-empty, and stays at `0` (inert) when it is empty.
//! - The cursor's display row is inside
//!   `[scroll_offset, scroll_offset + max_visible)`; the window follows the
//!   cursor in the same transition. When the cursor sits on the first item
//!   of a group, scrolling up also pulls the group header into view.
//! - Editing the search buffer resets both `cursor_index` and
//!   `scroll_offset` to `0`, because the filtered universe changed.
//! - `selected` only holds values present in the supplied item list, and
//!   toggling is self-inverse.

use crate::item::{Item, ItemGroup};
use std::collections::HashSet;

/// A decoded input event, already classified by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    CursorUp,
    CursorDown,
    Home,
    End,
    Toggle,
    Input(char),
    Backspace,
    Confirm,
    Cancel,
}

/// The mutable-by-transition state of one prompt invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Values currently chosen. Membership only; result order is derived
    /// from the catalog at confirm time.
    pub selected: HashSet<String>,
    /// The live search input buffer.
    pub search_query: String,
    /// Index of the cursor among the currently filtered items, in display
    /// (grouped) order. Category headers are never cursor targets.
    pub cursor_index: usize,
    /// First visible display row, in the flattened row list where category
    /// headers count as rows.
    pub scroll_offset: usize,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of applying one event to a [`SessionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The session continues with the next state.
    Continue(SessionState),
    /// The user confirmed; settle with the state's selection.
    Confirm(SessionState),
    /// The user cancelled; the selection is discarded.
    Cancel,
}

/// Apply one event to the session, consuming the current state.
///
/// `groups` must be the grouped view of the items matching
/// `state.search_query`; the caller recomputes it per event. Navigation on
/// an empty view is a no-op, never a panic.
pub fn transition(
    mut state: SessionState,
    event: PromptEvent,
    groups: &[ItemGroup],
    max_visible: usize,
) -> Outcome {
    let count = item_count(groups);

    match event {
        PromptEvent::CursorUp => {
            if count > 0 {
                state.cursor_index = state.cursor_index.saturating_sub(1);
                follow_cursor(&mut state, groups, max_visible);
            }
            Outcome::Continue(state)
        }
        PromptEvent::CursorDown => {
            if count > 0 {
                state.cursor_index = (state.cursor_index + 1).min(count - 1);
                follow_cursor(&mut state, groups, max_visible);
            }
            Outcome::Continue(state)
        }
        PromptEvent::Home => {
            if count > 0 {
                state.cursor_index = 0;
                follow_cursor(&mut state, groups, max_visible);
            }
            Outcome::Continue(state)
        }
        PromptEvent::End => {
            if count > 0 {
                state.cursor_index = count - 1;
                follow_cursor(&mut state, groups, max_visible);
            }
            Outcome::Continue(state)
        }
        PromptEvent::Toggle => {
            if let Some(item) = item_at(groups, state.cursor_index) {
                if !state.selected.remove(&item.value) {
                    state.selected.insert(item.value.clone());
                }
            }
            Outcome::Continue(state)
        }
        PromptEvent::Input(c) => {
            state.search_query.push(c);
            reset_position(&mut state);
            Outcome::Continue(state)
        }
        PromptEvent::Backspace => {
            state.search_query.pop();
            reset_position(&mut state);
            Outcome::Continue(state)
        }
        PromptEvent::Confirm => Outcome::Confirm(state),
        PromptEvent::Cancel => Outcome::Cancel,
    }
}

/// Total number of items across all groups.
fn item_count(groups: &[ItemGroup]) -> usize {
    groups.iter().map(|group| group.items.len()).sum()
}

/// Item at a display-order index, headers excluded.
fn item_at(groups: &[ItemGroup], index: usize) -> Option<&Item> {
    let mut remaining = index;
    for group in groups {
        if remaining < group.items.len() {
            return group.items.get(remaining);
        }
        remaining -= group.items.len();
    }
    None
}

/// Display-row positions of the cursor item: its own row, and the topmost
/// row to bring into view when scrolling up (the group header row when the
/// item is the first of its group).
fn flattened_rows(groups: &[ItemGroup], cursor_index: usize) -> Option<(usize, usize)> {
    let mut row = 0usize;
    let mut index = 0usize;
    for group in groups {
        let header_row = row;
        row += 1;
        for (position, _) in group.items.iter().enumerate() {
            if index == cursor_index {
                let top_row = if position == 0 { header_row } else { row };
                return Some((row, top_row));
            }
            row += 1;
            index += 1;
        }
    }
    None
}

/// Keep the cursor's display row inside the visible window, moving the
/// window in the same index space the renderer scrolls in.
fn follow_cursor(state: &mut SessionState, groups: &[ItemGroup], max_visible: usize) {
    if max_visible == 0 {
        return;
    }
    let Some((row, top_row)) = flattened_rows(groups, state.cursor_index) else {
        return;
    };

    // The highest window start that still shows the cursor row.
    let min_top_for_cursor = (row + 1).saturating_sub(max_visible);
    if top_row < state.scroll_offset {
        state.scroll_offset = top_row.max(min_top_for_cursor);
    } else if row >= state.scroll_offset + max_visible {
        state.scroll_offset = row + 1 - max_visible;
    }
}

/// The search universe changed; previous positions are meaningless.
fn reset_position(state: &mut SessionState) {
    state.cursor_index = 0;
    state.scroll_offset = 0;
}

/// Order a confirmed selection by original catalog order.
///
/// The selection set itself is unordered; deriving the result from the
/// catalog makes confirm output deterministic.
pub fn ordered_selection(items: &[Item], selected: &HashSet<String>) -> Vec<String> {
    items
        .iter()
        .filter(|item| selected.contains(&item.value))
        .map(|item| item.value.clone())
        .collect()
}
