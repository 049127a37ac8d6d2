//! # UI Module
//!
//! Terminal front end for a [`SelectableList`](crate::list::SelectableList).
//!
//! ## Components
//!
//! - [`App`] - list plus TUI state (theme, quit/confirm flags, status line)
//! - [`mod@render`] - draws the list view with ratatui
//! - [`input`] - maps key and mouse events to list operations
//! - [`config`] / [`theme`] - persisted preferences and color themes
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Heading (only when one was given)       │
//! └─────────────────────────────────────────┘
//! ┌ Items (1/3) ────────────────────────────┐
//! │ > Apple                                 │
//! │   Banana                                │
//! │   Cherry                                │
//! └─────────────────────────────────────────┘
//! You have selected item 1: Apple
//! Click on an item to select it.
//! [↑↓/jk] Move  [1-9] Jump  [Enter] Confirm ...
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
