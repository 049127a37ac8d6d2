use crate::list::{ListBody, ListView};
use crate::ui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const ACTIVE_PREFIX: &str = "> ";
const INACTIVE_PREFIX: &str = "  ";

const HELP_TEXT: &str = "[↑↓/jk] Move  [1-9] Jump  [Enter] Confirm  [t] Theme  [q] Quit";
const EMPTY_HELP_TEXT: &str = "[t] Theme  [q] Quit";

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub heading: Option<Rect>,
    pub list: Rect,
    pub summary: Rect,
    pub instructions: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect, has_heading: bool) -> ScreenAreas {
    let heading_height = if has_heading { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(heading_height), // Heading
            Constraint::Min(3),                 // Items
            Constraint::Length(1),              // Summary
            Constraint::Length(1),              // Instructions
            Constraint::Length(1),              // Footer
        ])
        .split(area);

    ScreenAreas {
        heading: has_heading.then_some(chunks[0]),
        list: chunks[1],
        summary: chunks[2],
        instructions: chunks[3],
        footer: chunks[4],
    }
}

/// First row to draw so that the active row stays inside a window of `height` rows.
pub fn visible_start(active: usize, len: usize, height: usize) -> usize {
    if height == 0 || active < height {
        return 0;
    }
    (active + 1 - height).min(len.saturating_sub(height))
}

/// Map a terminal cell to the index of the item drawn there, if any.
pub fn item_at(app: &App, area: Rect, column: u16, row: u16) -> Option<usize> {
    let list = &app.list;
    let active = list.selected_index()?;
    let areas = screen_layout(area, list.heading().is_some());
    let inner = Block::default().borders(Borders::ALL).inner(areas.list);

    let inside = column >= inner.x
        && column < inner.x + inner.width
        && row >= inner.y
        && row < inner.y + inner.height;
    if !inside {
        return None;
    }

    let start = visible_start(active, list.len(), inner.height as usize);
    let index = start + (row - inner.y) as usize;
    (index < list.len()).then_some(index)
}

pub fn render(frame: &mut Frame, app: &App) {
    let view = app.list.render();
    let areas = screen_layout(frame.area(), view.heading.is_some());

    if let (Some(area), Some(heading)) = (areas.heading, view.heading.as_deref()) {
        render_heading(frame, app, heading, area);
    }

    match &view.body {
        ListBody::Empty { message } => render_empty(frame, app, message, areas.list),
        ListBody::Populated { instructions, .. } => {
            render_items(frame, app, &view, areas.list);
            render_summary(frame, app, &view, areas.summary);
            let hint = Paragraph::new(*instructions).style(Style::default().fg(app.theme.fg_dim));
            frame.render_widget(hint, areas.instructions);
        }
    }

    render_footer(frame, app, view.is_empty(), areas.footer);
}

fn render_heading(frame: &mut Frame, app: &App, heading: &str, area: Rect) {
    let theme = app.theme;
    let text = Line::from(vec![Span::styled(
        format!(" {} ", heading),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )]);

    let header = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(header, area);
}

fn render_empty(frame: &mut Frame, app: &App, message: &str, area: Rect) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(app.theme.fg_dim).bg(app.theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.fg_dim)),
        );

    frame.render_widget(paragraph, area);
}

fn render_items(frame: &mut Frame, app: &App, view: &ListView, area: Rect) {
    let theme = app.theme;
    let entries = view.entries();
    let height = area.height.saturating_sub(2) as usize;
    let active = view.active_entry().map_or(0, |e| e.index);
    let start = visible_start(active, entries.len(), height);

    let items: Vec<ListItem> = entries
        .iter()
        .skip(start)
        .take(height)
        .map(|entry| {
            if entry.active {
                ListItem::new(format!("{}{}", ACTIVE_PREFIX, entry.label)).style(
                    Style::default()
                        .fg(theme.active_fg)
                        .bg(theme.active_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("{}{}", INACTIVE_PREFIX, entry.label))
                    .style(Style::default().fg(theme.fg))
            }
        })
        .collect();

    let title = format!(" Items ({}/{}) ", active + 1, entries.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(theme.accent)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(list, area);
}

fn render_summary(frame: &mut Frame, app: &App, view: &ListView, area: Rect) {
    let (Some(summary), Some(entry)) = (view.summary(), view.active_entry()) else {
        return;
    };

    // Emphasize the label the way the list marks the active row.
    let line = match summary.strip_suffix(entry.label.as_str()) {
        Some(prefix) => Line::from(vec![
            Span::styled(prefix.to_string(), Style::default().fg(app.theme.fg)),
            Span::styled(
                entry.label.clone(),
                Style::default()
                    .fg(app.theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(summary.to_string()),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, app: &App, empty: bool, area: Rect) {
    let footer = match &app.status {
        Some(status) => {
            Paragraph::new(status.as_str()).style(Style::default().fg(app.theme.secondary))
        }
        None => {
            let help = if empty { EMPTY_HELP_TEXT } else { HELP_TEXT };
            Paragraph::new(help).style(Style::default().fg(app.theme.fg_dim))
        }
    };

    frame.render_widget(footer, area);
}
