//! # Prompt Module
//!
//! The interactive multi-select prompt engine.
//!
//! ## Components
//!
//! - [`state`] - the pure session state machine (cursor, scroll window,
//!   selection set, search buffer)
//! - [`mod@render`] - row windowing and frame drawing
//! - [`controller`] - terminal acquisition, key decoding, and the event loop
//! - [`theme`] / [`config`] - styling and persisted preferences
//!
//! ## Layout
//!
//! ```text
//! ┌ Pick packages ──────────────────────┐
//! │  / search▏                          │
//! └─────────────────────────────────────┘
//!  Services
//!    [x] Nginx
//!    [ ] Redis
//!  Tools
//!    [ ] Htop
//!  1 selected · 3/3 shown  [↑↓] Navigate ...
//! ```
//!
//! Each key event produces exactly one state transition and one full
//! redraw; the screen and the session state are always in sync while the
//! loop waits for input.

pub mod config;
pub mod controller;
pub mod render;
pub mod state;
pub mod theme;

pub use config::Config;
pub use controller::{
    decode_key, CrosstermEventReader, EventReader, MultiSelect, PromptResult, DEFAULT_MAX_VISIBLE,
};
pub use render::{render, visible_rows, PromptView, Row};
pub use state::{ordered_selection, transition, Outcome, PromptEvent, SessionState};
pub use theme::Theme;
