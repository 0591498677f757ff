//! # Prompt Controller
//!
//! Owns the lifecycle of one prompt invocation end to end: terminal
//! acquisition, the event loop, and settlement of the result.
//!
//! The loop is single-threaded and event-driven. Each iteration recomputes
//! the filtered and grouped view from the current session state, draws one
//! full frame, waits for the next key event, decodes it, and applies exactly
//! one state transition. Confirm and cancel settle the result once;
//! [`TerminalGuard`] restores the terminal on every exit path, including
//! panics.

use crate::item::{filter_items, group_items, Item};
use crate::prompt::render::{render, PromptView};
use crate::prompt::state::{ordered_selection, transition, Outcome, PromptEvent, SessionState};
use crate::prompt::theme::Theme;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Default number of visible rows when neither caller nor config says
/// otherwise.
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// How a settled prompt ended.
///
/// Cancellation is deliberately distinct from a confirmed empty selection;
/// callers that care must match on the variant, not on emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// The user confirmed. Values are in original catalog order.
    Selected(Vec<String>),
    /// The user cancelled (Esc, Ctrl-C, or the input source closing); any
    /// toggles are discarded.
    Cancelled,
}

/// Trait for reading terminal events (allows dependency injection for testing)
///
/// `read_event` blocks until an event arrives; `None` means the event
/// source is exhausted and the session cannot continue.
pub trait EventReader {
    fn read_event(&mut self) -> Result<Option<Event>>;
}

/// Production event reader that blocks on crossterm's event stream
pub struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self) -> Result<Option<Event>> {
        Ok(Some(
            event::read().context("Failed to read keyboard event")?,
        ))
    }
}

/// Scoped ownership of the terminal's raw mode and alternate screen.
///
/// Acquisition switches the terminal to character-buffered input; release
/// restores line-buffered input and the primary screen. Release is
/// idempotent and also runs from `Drop`, so the terminal is restored even
/// when the loop unwinds.
struct TerminalGuard {
    released: bool,
}

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode for terminal")?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("Failed to enter alternate screen");
        }
        Ok(Self { released: false })
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// An interactive multi-select prompt over a categorized item list.
///
/// ```no_run
/// use tickbox::{Item, MultiSelect, PromptResult};
///
/// let items = vec![
///     Item::new("nginx", "Nginx").with_category("Services"),
///     Item::new("htop", "Htop").with_category("Tools"),
/// ];
/// let result = MultiSelect::new("Pick packages", items).run()?;
/// if let PromptResult::Selected(values) = result {
///     println!("{}", values.join(", "));
/// }
/// # anyhow::Ok(())
/// ```
pub struct MultiSelect {
    title: String,
    items: Vec<Item>,
    max_visible: usize,
    theme: Theme,
}

impl MultiSelect {
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            title: title.into(),
            items,
            max_visible: DEFAULT_MAX_VISIBLE,
            theme: Theme::default_theme().clone(),
        }
    }

    /// Cap the number of visible display rows (headers included).
    pub fn max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the prompt to settlement.
    ///
    /// Fails up front when the terminal cannot be switched to raw mode
    /// (e.g. a non-interactive invocation); there is no non-interactive
    /// fallback.
    pub fn run(self) -> Result<PromptResult> {
        let mut guard = TerminalGuard::acquire()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        let mut reader = CrosstermEventReader;

        let result = run_loop(&mut terminal, &self, &mut reader);

        guard.release();
        result
    }
}

/// Decode a raw key event into the prompt's input alphabet.
///
/// Control and meta chords never reach the search buffer; unrecognized keys
/// decode to `None` and are ignored by the loop.
pub fn decode_key(key: KeyEvent) -> Option<PromptEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(PromptEvent::Cancel);
    }

    match key.code {
        KeyCode::Up => Some(PromptEvent::CursorUp),
        KeyCode::Down => Some(PromptEvent::CursorDown),
        KeyCode::Home => Some(PromptEvent::Home),
        KeyCode::End => Some(PromptEvent::End),
        KeyCode::Enter => Some(PromptEvent::Confirm),
        KeyCode::Esc => Some(PromptEvent::Cancel),
        KeyCode::Backspace => Some(PromptEvent::Backspace),
        KeyCode::Char(' ') => Some(PromptEvent::Toggle),
        KeyCode::Char(c) => {
            let chord = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER;
            if key.modifiers.intersects(chord) {
                None
            } else {
                Some(PromptEvent::Input(c))
            }
        }
        _ => None,
    }
}

/// The event loop: draw, block for the next event, decode, transition,
/// repeat until settled.
///
/// Execution is fully suspended between key presses; each processed event
/// produces at most one transition and one redraw. Filtering is recomputed
/// on every iteration because the search query is part of the loop's own
/// trigger surface; a stale filtered list would desynchronize toggles from
/// the screen.
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    prompt: &MultiSelect,
    reader: &mut dyn EventReader,
) -> Result<PromptResult> {
    let mut state = SessionState::new();

    loop {
        let filtered = filter_items(&prompt.items, &state.search_query);
        let groups = group_items(&filtered);

        terminal
            .draw(|frame| {
                render(
                    frame,
                    &PromptView {
                        title: &prompt.title,
                        state: &state,
                        groups: &groups,
                        filtered_count: filtered.len(),
                        total_count: prompt.items.len(),
                        max_visible: prompt.max_visible,
                        theme: &prompt.theme,
                    },
                );
            })
            .context("Failed to draw prompt")?;

        let Some(event) = reader.read_event()? else {
            return Ok(PromptResult::Cancelled);
        };
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(prompt_event) = decode_key(key) else {
            continue;
        };

        match transition(state, prompt_event, &groups, prompt.max_visible) {
            Outcome::Continue(next) => state = next,
            Outcome::Confirm(done) => {
                return Ok(PromptResult::Selected(ordered_selection(
                    &prompt.items,
                    &done.selected,
                )));
            }
            Outcome::Cancel => return Ok(PromptResult::Cancelled),
        }
    }
}
