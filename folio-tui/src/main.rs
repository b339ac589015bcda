//! Folio TUI — single-screen portfolio dashboard.
//!
//! Layout, top to bottom:
//! 1. Header — title, range selector, anchor date
//! 2. Cards — total value, daily P&L, win rate
//! 3. Charts — Overview / Allocation / Strategies tabs
//! 4. Strategy details and market updates
//! 5. Status bar

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use folio_core::range::parse_anchor;
use folio_core::{Dataset, FolioConfig, TimeRange};
use folio_tui::{input, logging, ui, App, AppState};

#[derive(Parser, Debug)]
#[command(name = "folio-tui", version, about = "Terminal portfolio dashboard")]
struct Args {
    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Anchor date, YYYY-MM-DD or "today"
    #[arg(long)]
    anchor: Option<String>,

    /// Time range: all, 1y, 6m, 1m
    #[arg(long)]
    range: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = FolioConfig::load(args.config.as_deref())?;
    let _log_guard = logging::init(
        &loaded.config.logging.directory,
        &loaded.config.log_level()?,
    )?;
    loaded.report();
    let config = loaded.config;

    let today = chrono::Local::now().date_naive();
    let mut state = AppState::from_config(&config, today);
    if let Some(anchor) = &args.anchor {
        state.selection = state.selection.with_anchor(parse_anchor(anchor, today)?);
    }
    if let Some(range) = &args.range {
        state.selection = state.selection.with_range(TimeRange::from_keyword(range));
    }
    tracing::info!(
        anchor = ?state.selection.anchor,
        range = %state.selection.range,
        "starting dashboard"
    );

    let mut app = App::new(state, Dataset::sample());
    let tick = Duration::from_millis(config.ui.tick_rate_ms);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, tick);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(recomputes = app.recomputes(), "dashboard closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app.screen()))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.state.running {
            break;
        }
    }
    Ok(())
}
