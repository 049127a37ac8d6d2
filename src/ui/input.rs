//! Translate crossterm events into [`App`] updates.

use crate::ui::app::App;
use crate::ui::render;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Side effects the event loop must carry out after an event is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// The theme changed and should be persisted.
    ThemeChanged,
    Quit,
}

/// Apply `event` to `app`. `area` is the full terminal area, used to
/// hit-test mouse clicks against the drawn list.
pub fn handle_event(app: &mut App, event: &Event, area: Rect) -> Action {
    let action = match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                if let Some(index) = render::item_at(app, area, mouse.column, mouse.row) {
                    app.select_index(index);
                }
            }
            Action::None
        }
        _ => Action::None,
    };

    if app.should_quit {
        Action::Quit
    } else {
        action
    }
}

fn handle_key(app: &mut App, key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Char('g') | KeyCode::Home => app.first(),
        KeyCode::Char('G') | KeyCode::End => app.last(),
        KeyCode::Enter => app.confirm(),
        KeyCode::Char('t') => {
            app.cycle_theme();
            return Action::ThemeChanged;
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(position) = c.to_digit(10) {
                app.select_position(position as usize);
            }
        }
        _ => {}
    }

    Action::None
}
