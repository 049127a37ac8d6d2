use super::error::SelectError;
use super::view::{
    selection_summary, ListBody, ListEntry, ListView, INSTRUCTIONS_TEXT, NO_ITEMS_TEXT,
};
use std::fmt;

/// Callback invoked with `(label, index)` after every successful selection.
pub type Observer = Box<dyn FnMut(&str, usize)>;

/// An ordered list of labels with a single active entry.
///
/// Items, heading and observer are fixed at construction. The only mutation
/// is [`select`](Self::select) (and the navigation helpers built on it).
pub struct SelectableList {
    items: Vec<String>,
    heading: Option<String>,
    selected: Option<usize>,
    observer: Option<Observer>,
}

impl SelectableList {
    /// Create a list. The first item is active unless `items` is empty.
    ///
    /// An empty heading is treated as no heading.
    pub fn new(items: Vec<String>, heading: Option<String>, observer: Option<Observer>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self {
            items,
            heading: heading.filter(|h| !h.is_empty()),
            selected,
            observer,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` once constructed with at least one item; never changes afterwards.
    pub fn is_populated(&self) -> bool {
        !self.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Make the item at `index` active and notify the observer.
    ///
    /// Out-of-range indices are rejected without touching the current
    /// selection or calling the observer.
    pub fn select(&mut self, index: usize) -> Result<(), SelectError> {
        let len = self.items.len();
        let Some(label) = self.items.get(index) else {
            tracing::warn!(index, len, "rejected out-of-range selection");
            return Err(SelectError::InvalidIndex { index, len });
        };

        self.selected = Some(index);
        tracing::debug!(index, label = %label, "selection changed");

        if let Some(observer) = self.observer.as_mut() {
            observer(label, index);
        }

        Ok(())
    }

    /// Move to the next item. With `wrap`, the last item moves to the first.
    ///
    /// Returns `Ok(false)` when the list is empty or the active item would
    /// not change; the observer is not called in that case.
    pub fn select_next(&mut self, wrap: bool) -> Result<bool, SelectError> {
        let Some(current) = self.selected else {
            return Ok(false);
        };
        let last = self.items.len() - 1;
        let target = if current < last {
            current + 1
        } else if wrap {
            0
        } else {
            last
        };
        self.move_to(current, target)
    }

    /// Move to the previous item. With `wrap`, the first item moves to the last.
    pub fn select_previous(&mut self, wrap: bool) -> Result<bool, SelectError> {
        let Some(current) = self.selected else {
            return Ok(false);
        };
        let target = if current > 0 {
            current - 1
        } else if wrap {
            self.items.len() - 1
        } else {
            0
        };
        self.move_to(current, target)
    }

    pub fn select_first(&mut self) -> Result<bool, SelectError> {
        let Some(current) = self.selected else {
            return Ok(false);
        };
        self.move_to(current, 0)
    }

    pub fn select_last(&mut self) -> Result<bool, SelectError> {
        let Some(current) = self.selected else {
            return Ok(false);
        };
        self.move_to(current, self.items.len() - 1)
    }

    fn move_to(&mut self, current: usize, target: usize) -> Result<bool, SelectError> {
        if target == current {
            return Ok(false);
        }
        self.select(target).map(|()| true)
    }

    /// Project the current state into a [`ListView`]. Does not mutate.
    pub fn render(&self) -> ListView {
        let heading = self.heading.clone();

        let body = match self.selected {
            Some(active) if active < self.items.len() => {
                let entries = self
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, label)| ListEntry {
                        index,
                        label: label.clone(),
                        active: index == active,
                    })
                    .collect();
                ListBody::Populated {
                    entries,
                    summary: selection_summary(active, &self.items[active]),
                    instructions: INSTRUCTIONS_TEXT,
                }
            }
            _ => ListBody::Empty {
                message: NO_ITEMS_TEXT,
            },
        };

        ListView { heading, body }
    }
}

impl fmt::Debug for SelectableList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectableList")
            .field("items", &self.items)
            .field("heading", &self.heading)
            .field("selected", &self.selected)
            .field("observer", &self.observer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
