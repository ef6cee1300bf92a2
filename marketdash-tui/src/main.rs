//! MarketDash TUI — a grid of market panels feeding one comparison chart.
//!
//! Producer panels (equities, sectors, fixed income, currencies, commodities,
//! crypto, watchlist) add tickers to a shared selection; the comparison panel
//! charts them. In arrange mode panels can be moved and resized, and the arrangement
//! is kept per terminal-width breakpoint across sessions.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use marketdash_core::rng::SeedSource;
use marketdash_core::{Catalog, DashboardContext, FileStore};

use marketdash_tui::config::{AppConfig, Paths};
use marketdash_tui::{input, logging, ui, AppState};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let paths = Paths::default_location();

    // Config problems are reported once logging is up.
    let (config, config_error) = match AppConfig::try_load(&paths.config) {
        Ok(loaded) => (loaded.unwrap_or_default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init(&paths.log, &config.log_filter) {
        eprintln!("marketdash: logging disabled: {e:#}");
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %format!("{e:#}"), "invalid config, using defaults");
    }

    let catalog = load_catalog(&config);
    let seeds = SeedSource::new(config.master_seed());
    tracing::info!(
        seed = seeds.master_seed(),
        instruments = catalog.instrument_count(),
        dir = %paths.dir.display(),
        "starting"
    );

    let ctx = DashboardContext::new(FileStore::new(&paths.dir), catalog, seeds);
    let mut app = AppState::new(ctx, chrono::Local::now().naive_local());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, config.tick_rate_ms);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn load_catalog(config: &AppConfig) -> Catalog {
    let Some(path) = &config.catalog else {
        return Catalog::default_catalog();
    };
    match Catalog::from_file(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid catalog, using built-in");
            Catalog::default_catalog()
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick_rate_ms: u64,
) -> Result<()> {
    let tick = Duration::from_millis(tick_rate_ms.max(1));
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
