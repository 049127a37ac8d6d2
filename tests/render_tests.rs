//! Terminal rendering tests
//!
//! Draws the app into ratatui's `TestBackend` and checks the visible text.

use listgroup::list::SelectableList;
use listgroup::ui::render::{item_at, screen_layout};
use listgroup::ui::theme::Theme;
use listgroup::ui::{render, App};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 12;

fn create_app(items: &[&str], heading: Option<&str>) -> App {
    let items = items.iter().map(|s| (*s).to_string()).collect();
    App::new(
        SelectableList::new(items, heading.map(str::to_string), None),
        Theme::default_theme(),
        true,
    )
}

/// Draw `app` and return the buffer as one string per row
fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| render(f, app)).expect("draw");
    buffer_lines(terminal.backend().buffer())
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn test_renders_heading_items_and_summary() {
    let app = create_app(&["Apple", "Banana", "Cherry"], Some("Fruits"));
    let lines = draw(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&lines, "Fruits"));
    assert!(screen_contains(&lines, "> Apple"));
    assert!(screen_contains(&lines, "  Banana"));
    assert!(screen_contains(&lines, "  Cherry"));
    assert!(screen_contains(&lines, "You have selected item 1: Apple"));
    assert!(screen_contains(&lines, "Click on an item to select it."));
}

#[test]
fn test_renders_selection_change() {
    let mut app = create_app(&["X", "Y"], None);
    app.select_index(1);
    let lines = draw(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&lines, "> Y"));
    assert!(screen_contains(&lines, "  X"));
    assert!(screen_contains(&lines, "You have selected item 2: Y"));
}

#[test]
fn test_renders_empty_list() {
    let app = create_app(&[], Some("Fruits"));
    let lines = draw(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&lines, "Fruits"));
    assert!(screen_contains(&lines, "No items found."));
    assert!(!screen_contains(&lines, "You have selected"));
    assert!(!screen_contains(&lines, "Click on an item"));
}

#[test]
fn test_render_is_stable_between_frames() {
    let app = create_app(&["a", "b", "c"], Some("Letters"));
    assert_eq!(draw(&app, WIDTH, HEIGHT), draw(&app, WIDTH, HEIGHT));
}

#[test]
fn test_active_row_stays_visible_when_scrolled() {
    let labels: Vec<String> = (1..=20).map(|i| format!("item-{:02}", i)).collect();
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let mut app = create_app(&refs, None);
    app.last();

    let lines = draw(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&lines, "> item-20"));
    assert!(!screen_contains(&lines, "item-01"));
    assert!(screen_contains(&lines, "You have selected item 20: item-20"));
}

#[test]
fn test_status_replaces_footer_help() {
    let mut app = create_app(&["a"], None);
    app.select_position(4);
    let lines = draw(&app, WIDTH, HEIGHT);

    assert!(screen_contains(&lines, "No item at position 4"));
    assert!(!screen_contains(&lines, "[Enter] Confirm"));
}

#[test]
fn test_item_at_maps_rows_to_indices() {
    let app = create_app(&["Apple", "Banana", "Cherry"], Some("Fruits"));
    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    let list = screen_layout(area, true).list;

    // First row inside the border is item 0.
    assert_eq!(item_at(&app, area, list.x + 2, list.y + 1), Some(0));
    assert_eq!(item_at(&app, area, list.x + 2, list.y + 3), Some(2));
    // Border rows and rows past the last item map to nothing.
    assert_eq!(item_at(&app, area, list.x + 2, list.y), None);
    assert_eq!(item_at(&app, area, list.x + 2, list.y + 4), None);
    // The heading panel is not part of the list.
    assert_eq!(item_at(&app, area, 2, 1), None);
}

#[test]
fn test_item_at_on_empty_list() {
    let app = create_app(&[], None);
    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    assert_eq!(item_at(&app, area, 2, 1), None);
}

#[test]
fn test_empty_heading_draws_no_heading_panel() {
    let app = create_app(&["Apple"], Some(""));
    let lines = draw(&app, WIDTH, HEIGHT);

    // The item list's border is the first row on screen.
    assert!(lines[0].contains("Items (1/1)"));
    assert!(screen_contains(&lines, "> Apple"));
}
