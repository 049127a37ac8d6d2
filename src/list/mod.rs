//! # List Module
//!
//! The selectable list component and its rendered view.
//!
//! ## Components
//!
//! - [`SelectableList`] - ordered labels, the active position, and an
//!   optional selection observer
//! - [`ListView`] - read-only snapshot returned by [`SelectableList::render`]
//! - [`SelectError`] - returned when `select` is given a position outside the list
//!
//! ## States
//!
//! A list built from no items stays empty for its whole lifetime and never
//! has an active entry. A list built from one or more items always has
//! exactly one active entry, starting at the first.
//!
//! ```
//! use listgroup::list::SelectableList;
//!
//! let items = vec!["Apple".to_string(), "Banana".to_string()];
//! let mut list = SelectableList::new(items, Some("Fruits".to_string()), None);
//! list.select(1).unwrap();
//!
//! let view = list.render();
//! assert_eq!(view.summary(), Some("You have selected item 2: Banana"));
//! ```

mod error;
mod selectable;
pub mod view;

pub use error::SelectError;
pub use selectable::{Observer, SelectableList};
pub use view::{ListBody, ListEntry, ListView, INSTRUCTIONS_TEXT, NO_ITEMS_TEXT};
