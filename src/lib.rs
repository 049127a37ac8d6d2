//! listgroup - a selectable list component with a terminal front end
//!
//! The [`list`] module holds the component itself: ordered labels, one active
//! entry, an optional selection observer and a read-only rendered view. The
//! [`ui`] module draws that view with ratatui and feeds key and mouse events
//! back into it.

pub mod list;
pub mod logging;
pub mod ui;
