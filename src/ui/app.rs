use crate::list::SelectableList;
use crate::ui::theme::Theme;

/// TUI state wrapped around a [`SelectableList`].
#[derive(Debug)]
pub struct App {
    pub list: SelectableList,
    pub theme: &'static Theme,
    pub wrap_around: bool,
    pub should_quit: bool,
    /// Label confirmed with Enter; printed by the binary after the terminal is restored.
    pub confirmed: Option<String>,
    /// One-line message shown in the footer in place of the key help.
    pub status: Option<String>,
}

impl App {
    pub fn new(list: SelectableList, theme: &'static Theme, wrap_around: bool) -> Self {
        Self {
            list,
            theme,
            wrap_around,
            should_quit: false,
            confirmed: None,
            status: None,
        }
    }

    pub fn next(&mut self) {
        let result = self.list.select_next(self.wrap_around);
        self.record(result.map(|_| ()));
    }

    pub fn previous(&mut self) {
        let result = self.list.select_previous(self.wrap_around);
        self.record(result.map(|_| ()));
    }

    pub fn first(&mut self) {
        let result = self.list.select_first();
        self.record(result.map(|_| ()));
    }

    pub fn last(&mut self) {
        let result = self.list.select_last();
        self.record(result.map(|_| ()));
    }

    /// Select by 0-based index (mouse clicks).
    pub fn select_index(&mut self, index: usize) {
        let result = self.list.select(index);
        self.record(result);
    }

    /// Select by 1-based position (digit keys).
    pub fn select_position(&mut self, position: usize) {
        if position == 0 || position > self.list.len() {
            self.status = Some(format!("No item at position {}", position));
            return;
        }
        self.select_index(position - 1);
    }

    /// Accept the active item and stop the event loop.
    pub fn confirm(&mut self) {
        if let Some(label) = self.list.selected_label() {
            self.confirmed = Some(label.to_string());
            self.should_quit = true;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to the next built-in theme and return it.
    pub fn cycle_theme(&mut self) -> &'static Theme {
        self.theme = self.theme.next();
        self.status = Some(format!("Theme: {}", self.theme.name));
        self.theme
    }

    fn record(&mut self, result: Result<(), crate::list::SelectError>) {
        self.status = match result {
            Ok(()) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}
