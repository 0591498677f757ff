//! Property-based tests for the prompt's core invariants.
//!
//! Random catalogs and random event sequences, with the session invariants
//! checked after every single transition:
//!
//! - the cursor stays inside the filtered item list (and inert at 0 when
//!   the filtered list is empty)
//! - the window the renderer actually draws contains the cursor row, with
//!   category headers counted as rows
//! - the selection set only ever holds values from the catalog
//!
//! Plus the pure-function properties of the filter and grouper.

use proptest::prelude::*;
use tickbox::item::{filter_items, group_items, Item, ItemGroup};
use tickbox::prompt::{transition, visible_rows, Outcome, PromptEvent, Row, SessionState};

/// Strategy for non-terminal events. Confirm/Cancel end a session, so the
/// invariant walk generates everything else; terminal outcomes are covered
/// by scenario tests.
fn arb_event() -> impl Strategy<Value = PromptEvent> {
    prop_oneof![
        Just(PromptEvent::CursorUp),
        Just(PromptEvent::CursorDown),
        Just(PromptEvent::Home),
        Just(PromptEvent::End),
        Just(PromptEvent::Toggle),
        Just(PromptEvent::Backspace),
        prop::char::range('a', 'e').prop_map(PromptEvent::Input),
    ]
}

/// Strategy for a catalog with unique values, short searchable labels, and
/// a mix of categorized and uncategorized items.
fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        ("[a-e]{1,4}", prop::option::of(prop_oneof![Just("Tools"), Just("Apps")])),
        0..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (label, category))| {
                let item = Item::new(format!("value-{index}"), label);
                match category {
                    Some(name) => item.with_category(name),
                    None => item,
                }
            })
            .collect()
    })
}

/// True when the rendered window for this state contains the cursor row.
fn cursor_is_drawn(groups: &[ItemGroup], state: &SessionState, max_visible: usize) -> bool {
    visible_rows(groups, state, max_visible)
        .iter()
        .any(|row| matches!(row, Row::Entry { is_cursor: true, .. }))
}

proptest! {
    #[test]
    fn navigation_invariants_hold_after_every_transition(
        items in arb_items(),
        events in prop::collection::vec(arb_event(), 0..40),
        // A window of at least two rows always fits a header plus the
        // cursor row; a one-row window is exercised by scenario tests.
        max_visible in 2usize..6,
    ) {
        let mut state = SessionState::new();

        for event in events {
            let filtered = filter_items(&items, &state.search_query);
            let groups = group_items(&filtered);
            let next = match transition(state, event, &groups, max_visible) {
                Outcome::Continue(next) => next,
                Outcome::Confirm(_) | Outcome::Cancel => break,
            };

            let next_filtered = filter_items(&items, &next.search_query);
            let next_groups = group_items(&next_filtered);
            if next_filtered.is_empty() {
                prop_assert_eq!(next.cursor_index, 0);
                prop_assert_eq!(next.scroll_offset, 0);
            } else {
                prop_assert!(next.cursor_index < next_filtered.len());
                prop_assert!(
                    cursor_is_drawn(&next_groups, &next, max_visible),
                    "cursor {} (offset {}) not inside the rendered window",
                    next.cursor_index, next.scroll_offset
                );
            }

            for value in &next.selected {
                prop_assert!(
                    items.iter().any(|item| &item.value == value),
                    "selected value {} not in catalog", value
                );
            }

            state = next;
        }
    }

    #[test]
    fn toggle_twice_restores_prior_selection(
        items in arb_items(),
        moves in prop::collection::vec(Just(PromptEvent::CursorDown), 0..6),
    ) {
        let mut state = SessionState::new();
        let groups = group_items(&items);
        for event in moves {
            state = match transition(state, event, &groups, 10) {
                Outcome::Continue(next) => next,
                other => panic!("expected Continue, got {other:?}"),
            };
        }

        let before = state.selected.clone();
        let once = match transition(state, PromptEvent::Toggle, &groups, 10) {
            Outcome::Continue(next) => next,
            other => panic!("expected Continue, got {other:?}"),
        };
        let twice = match transition(once, PromptEvent::Toggle, &groups, 10) {
            Outcome::Continue(next) => next,
            other => panic!("expected Continue, got {other:?}"),
        };
        prop_assert_eq!(twice.selected, before);
    }

    #[test]
    fn filter_returns_order_preserving_subsequence(
        items in arb_items(),
        query in "[a-e]{0,3}",
    ) {
        let filtered = filter_items(&items, &query);

        // Every filtered item appears in the input, in order.
        let mut rest = &items[..];
        for item in &filtered {
            match rest.iter().position(|candidate| candidate == item) {
                Some(position) => rest = &rest[position + 1..],
                None => prop_assert!(false, "filtered item not found in order: {:?}", item),
            }
        }
    }

    #[test]
    fn filter_is_idempotent(items in arb_items(), query in "[a-e]{0,3}") {
        let once = filter_items(&items, &query);
        let twice = filter_items(&once, &query);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn group_flatten_preserves_item_multiset(items in arb_items()) {
        let groups = group_items(&items);
        let flattened: Vec<Item> = groups.into_iter().flat_map(|group| group.items).collect();

        prop_assert_eq!(flattened.len(), items.len());
        for item in &items {
            let original = items.iter().filter(|candidate| *candidate == item).count();
            let grouped = flattened.iter().filter(|candidate| *candidate == item).count();
            prop_assert_eq!(original, grouped);
        }
    }

    #[test]
    fn group_names_are_unique_and_first_seen_ordered(items in arb_items()) {
        let groups = group_items(&items);

        let mut names: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), total, "duplicate group names");

        // First-seen order: the first item of each group appears in the
        // catalog before the first item of every later group.
        let first_position = |group: &tickbox::item::ItemGroup| {
            items.iter().position(|item| Some(item) == group.items.first())
        };
        let positions: Vec<Option<usize>> = groups.iter().map(first_position).collect();
        for pair in positions.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
