//! # Prompt Rendering
//!
//! Turns one [`PromptView`] snapshot into a full-frame redraw: header with
//! the live search buffer, the windowed item list, and a footer with counts
//! and key help.
//!
//! Row windowing is split out into [`visible_rows`], a pure function that
//! flattens grouped items into header and item rows and returns only the
//! rows inside the scroll window. Rendering draws whatever that plan says,
//! which keeps the windowing logic testable without a terminal.

use crate::item::ItemGroup;
use crate::prompt::state::SessionState;
use crate::prompt::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Everything one redraw needs, assembled by the controller per event.
pub struct PromptView<'a> {
    pub title: &'a str,
    pub state: &'a SessionState,
    pub groups: &'a [ItemGroup],
    pub filtered_count: usize,
    pub total_count: usize,
    pub max_visible: usize,
    pub theme: &'a Theme,
}

/// One row of the flattened display list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<'a> {
    /// A category header. Carries no selection or cursor indicators.
    Header(&'a str),
    /// An item row with its visual state flags.
    Entry {
        value: &'a str,
        label: &'a str,
        is_selected: bool,
        is_cursor: bool,
    },
}

/// Flatten grouped items into display rows and return the visible window.
///
/// Each group contributes one header row followed by its item rows. A
/// running index over *all* rows (headers included) is matched against
/// `[scroll_offset, scroll_offset + max_visible)`; the cursor flag uses the
/// item-only index. `max_visible == 0` yields an empty plan.
pub fn visible_rows<'a>(
    groups: &'a [ItemGroup],
    state: &SessionState,
    max_visible: usize,
) -> Vec<Row<'a>> {
    let start = state.scroll_offset;
    let end = start.saturating_add(max_visible);

    let mut rows = Vec::new();
    let mut visible_index = 0usize;
    let mut item_index = 0usize;

    for group in groups {
        if visible_index >= end {
            break;
        }
        if visible_index >= start {
            rows.push(Row::Header(group.name.as_str()));
        }
        visible_index += 1;

        for item in &group.items {
            if visible_index >= start && visible_index < end {
                rows.push(Row::Entry {
                    value: item.value.as_str(),
                    label: item.label.as_str(),
                    is_selected: state.selected.contains(&item.value),
                    is_cursor: item_index == state.cursor_index,
                });
            }
            visible_index += 1;
            item_index += 1;
        }
    }

    rows
}

pub fn render(frame: &mut Frame, view: &PromptView) {
    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, view, main_chunks[0]);
    render_list(frame, view, main_chunks[1]);
    render_footer(frame, view, main_chunks[2]);
}

fn render_header(frame: &mut Frame, view: &PromptView, area: Rect) {
    let theme = view.theme;

    let search_line = Line::from(vec![
        Span::styled("  / ", Style::default().fg(theme.fg_dim)),
        Span::styled(
            view.state.search_query.clone(),
            Style::default().fg(theme.secondary),
        ),
        Span::styled("▏", Style::default().fg(theme.fg_dim)),
    ]);

    let header = Paragraph::new(vec![search_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", view.title),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, view: &PromptView, area: Rect) {
    let theme = view.theme;

    let items: Vec<ListItem> = visible_rows(view.groups, view.state, view.max_visible)
        .iter()
        .map(|row| match row {
            Row::Header(name) => ListItem::new(Line::from(Span::styled(
                (*name).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))),
            Row::Entry {
                label,
                is_selected,
                is_cursor,
                ..
            } => {
                let marker = if *is_selected { "x" } else { " " };
                let content = format!("  [{marker}] {label}");
                let style = if *is_cursor {
                    Style::default()
                        .fg(theme.bg)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else if *is_selected {
                    Style::default().fg(theme.success)
                } else {
                    Style::default().fg(theme.fg)
                };
                ListItem::new(content).style(style)
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::NONE));
    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, view: &PromptView, area: Rect) {
    let theme = view.theme;

    let counts = format!(
        " {} selected · {}/{} shown  ",
        view.state.selected.len(),
        view.filtered_count,
        view.total_count
    );
    let footer = Line::from(vec![
        Span::styled(counts, Style::default().fg(theme.fg)),
        Span::styled(
            "[↑↓] Navigate  [Space] Toggle  [Enter] Confirm  [Esc] Cancel",
            Style::default().fg(theme.fg_dim),
        ),
    ]);

    frame.render_widget(Paragraph::new(footer), area);
}
