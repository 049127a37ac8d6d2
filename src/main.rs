//! # listgroup CLI Entry Point
//!
//! Shows a list of labels in the terminal, lets the user pick one, and prints
//! the confirmed label to stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Items as arguments
//! listgroup --heading Fruits Apple Banana Cherry
//!
//! # Items from a file, one per line
//! listgroup --file ./items.txt
//!
//! # Start on the second item and print the view without opening the TUI
//! listgroup --select 2 --print X Y
//!
//! # Same view as JSON
//! listgroup --json X Y
//! ```
//!
//! ## Key Bindings
//!
//! - `j` / `Down` - Next item
//! - `k` / `Up` - Previous item
//! - `g` / `Home`, `G` / `End` - First / last item
//! - `1`-`9` - Select that position
//! - Left click - Select the clicked item
//! - `t` - Cycle theme (saved to config)
//! - `Enter` - Confirm and print the active label
//! - `q` / `Esc` - Quit without output

use listgroup::list::{Observer, SelectableList};
use listgroup::logging;
use listgroup::ui::config::Config;
use listgroup::ui::input::{self, Action};
use listgroup::ui::theme::Theme;
use listgroup::ui::{self as tui, App};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// listgroup - pick one item from a list in the terminal
#[derive(Parser, Debug)]
#[command(name = "listgroup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick one item from a list in the terminal", long_about = None)]
struct Args {
    /// Item labels, in display order
    #[arg(value_name = "ITEM", conflicts_with = "file")]
    items: Vec<String>,

    /// Read item labels from a file, one per line (blank lines are skipped)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Heading shown above the list
    #[arg(long, value_name = "TEXT")]
    heading: Option<String>,

    /// 1-based position to select before showing the list
    #[arg(short = 's', long = "select", value_name = "POSITION")]
    select: Option<usize>,

    /// Theme to use for this run (overrides the saved theme)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the list as plain text and exit
    #[arg(long, conflicts_with = "json")]
    print: bool,

    /// Print the list as JSON and exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is best-effort: without a writable data dir we run without it.
    if let Ok(path) = logging::log_path() {
        let _ = logging::init_logging(&path);
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        original_hook(panic_info);
    }));

    run_application(&args)
}

/// Read labels from `path`, one per line, skipping blank lines.
fn read_items(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file: {}", path.display()))?;
    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn collect_items(args: &Args) -> Result<Vec<String>> {
    match &args.file {
        Some(path) => read_items(path),
        None => Ok(args.items.clone()),
    }
}

/// Pick the theme: `--theme` must name a built-in theme, the saved one falls
/// back to the default if it no longer exists.
fn resolve_theme(requested: Option<&str>, config: &Config) -> Result<&'static Theme> {
    if let Some(name) = requested {
        return Theme::by_name(name).ok_or_else(|| {
            let available: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            anyhow!(
                "Unknown theme: {} (available: {})",
                name,
                available.join(", ")
            )
        });
    }

    Ok(Theme::by_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "saved theme not found, using default");
        Theme::default_theme()
    }))
}

fn build_list(args: &Args, items: Vec<String>) -> Result<SelectableList> {
    let observer: Observer = Box::new(|label: &str, index: usize| {
        tracing::info!(index, label, "item selected");
    });
    let mut list = SelectableList::new(items, args.heading.clone(), Some(observer));

    if let Some(position) = args.select {
        let Some(index) = position.checked_sub(1) else {
            bail!("Positions start at 1");
        };
        list.select(index)
            .with_context(|| format!("Cannot select position {}", position))?;
    }

    Ok(list)
}

fn run_application(args: &Args) -> Result<()> {
    let items = collect_items(args)?;
    let config = Config::load();
    let theme = resolve_theme(args.theme.as_deref(), &config)?;
    let list = build_list(args, items)?;

    tracing::info!(items = list.len(), "list loaded");

    if args.print {
        print!("{}", list.render());
        return Ok(());
    }
    if args.json {
        let json =
            serde_json::to_string_pretty(&list.render()).context("Failed to serialize list")?;
        println!("{}", json);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(list, theme, config.wrap_around);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader, config);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    if let Some(label) = app.confirmed {
        tracing::info!(label = %label, "selection confirmed");
        println!("{}", label);
    }

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    mut config: Config,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| tui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let Some(event) = event_reader.read_event(POLL_TIMEOUT)? else {
            continue;
        };

        let size = terminal.size().context("Failed to read terminal size")?;
        let area = Rect::new(0, 0, size.width, size.height);

        match input::handle_event(app, &event, area) {
            Action::Quit => break,
            Action::ThemeChanged => {
                config.theme = app.theme.name.to_string();
                if let Err(e) = config.save() {
                    tracing::warn!(error = %e, "failed to save config");
                    app.status = Some(format!("Could not save theme: {}", e));
                }
            }
            Action::None => {}
        }
    }

    Ok(())
}
