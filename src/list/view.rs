//! # List View
//!
//! The read-only projection produced by
//! [`SelectableList::render`](super::SelectableList::render).
//!
//! A [`ListView`] carries no styling. The terminal front end turns it into
//! ratatui widgets, `--print` uses its [`Display`](std::fmt::Display)
//! implementation and `--json` serializes it with `serde_json`.

use serde::Serialize;
use std::fmt;

/// Text shown in place of the list when there are no items.
pub const NO_ITEMS_TEXT: &str = "No items found.";

/// Static instruction shown below a populated list.
pub const INSTRUCTIONS_TEXT: &str = "Click on an item to select it.";

/// Marker prefixed to the active entry in the plain-text rendering.
const ACTIVE_MARKER: &str = "> ";
const INACTIVE_MARKER: &str = "  ";

/// Build the summary sentence for the item at `index` (0-based).
pub fn selection_summary(index: usize, label: &str) -> String {
    format!("You have selected item {}: {}", index + 1, label)
}

/// A rendered snapshot of a selectable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub heading: Option<String>,
    pub body: ListBody,
}

/// Everything below the heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListBody {
    /// The list has no items; only the indicator is shown.
    Empty { message: &'static str },
    /// The list has items and exactly one of them is active.
    Populated {
        entries: Vec<ListEntry>,
        summary: String,
        instructions: &'static str,
    },
}

/// One row of a populated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, ListBody::Empty { .. })
    }

    /// Entries in display order (empty for an empty list).
    pub fn entries(&self) -> &[ListEntry] {
        match &self.body {
            ListBody::Empty { .. } => &[],
            ListBody::Populated { entries, .. } => entries,
        }
    }

    /// The entry marked active, if any.
    pub fn active_entry(&self) -> Option<&ListEntry> {
        self.entries().iter().find(|e| e.active)
    }

    /// The summary sentence, absent for an empty list.
    pub fn summary(&self) -> Option<&str> {
        match &self.body {
            ListBody::Empty { .. } => None,
            ListBody::Populated { summary, .. } => Some(summary),
        }
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(heading) = &self.heading {
            writeln!(f, "{}", heading)?;
        }

        match &self.body {
            ListBody::Empty { message } => writeln!(f, "{}", message),
            ListBody::Populated {
                entries,
                summary,
                instructions,
            } => {
                for entry in entries {
                    let marker = if entry.active {
                        ACTIVE_MARKER
                    } else {
                        INACTIVE_MARKER
                    };
                    writeln!(f, "{}{}", marker, entry.label)?;
                }
                writeln!(f, "{}", summary)?;
                writeln!(f, "{}", instructions)
            }
        }
    }
}
