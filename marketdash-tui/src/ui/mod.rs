//! Top-level UI layout — header, panel grid, status bar.

pub mod comparison_panel;
pub mod economic_panel;
pub mod grid;
pub mod header;
pub mod instrument_panel;
pub mod news_panel;
pub mod overlays;
pub mod rates_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use marketdash_core::layout::grid::bottom;
use marketdash_core::{KeyValueStore, PanelId, PanelKind, Placement};

use crate::app::{AppState, Overlay};
use crate::theme;

use self::grid::GridMetrics;

/// Draw the entire UI.
///
/// Also records the terminal width (which picks the breakpoint) and scrolls
/// the grid so the focused panel stays in view.
pub fn draw<S: KeyValueStore>(f: &mut Frame, app: &mut AppState<S>) {
    let area = f.area();
    app.width = area.width;
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::render(f, chunks[0], app);
    draw_grid(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[1]),
        Overlay::None => {}
    }
}

fn draw_grid<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &mut AppState<S>) {
    let bp = app.breakpoint();
    let placements = app.ctx.layouts().resolve(bp);
    let metrics = GridMetrics::new(area, bp.cols(), bottom(&placements));

    if let Some(focused) = placements.iter().find(|p| p.panel() == Some(app.focus)) {
        let (top, bottom) = metrics.vertical_span(focused);
        app.scroll = grid::scroll_to_show(
            app.scroll,
            top,
            bottom,
            area.height,
            metrics.content_height,
        );
    }

    for placement in &placements {
        let Some(panel) = placement.panel() else {
            continue;
        };
        if let Some(rect) = metrics.rect(placement, area, app.scroll) {
            draw_panel(f, rect, app, panel, placement);
        }
    }
}

/// Draw a single panel with its border.
fn draw_panel<S: KeyValueStore>(
    f: &mut Frame,
    area: Rect,
    app: &mut AppState<S>,
    panel: PanelId,
    placement: &Placement,
) {
    let focused = app.focus == panel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused, app.arranging))
        .title(panel_title(app, panel, placement))
        .title_style(theme::panel_title(focused));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match panel.kind() {
        PanelKind::Producer => instrument_panel::render(f, inner, app, panel),
        PanelKind::Comparison => comparison_panel::render(f, inner, app),
        PanelKind::Informational => match panel {
            PanelId::CentralBanks => rates_panel::render(f, inner, app),
            PanelId::Economic => economic_panel::render(f, inner, app),
            _ => news_panel::render(f, inner, app),
        },
    }
}

fn panel_title<S: KeyValueStore>(app: &AppState<S>, panel: PanelId, p: &Placement) -> String {
    let mut title = format!(" {} ", panel.label());
    if panel == PanelId::Comparison {
        let selection = &app.ctx.selection;
        title = format!(
            " {} · {} · {} ",
            panel.label(),
            selection.mode().label(),
            selection.window().label()
        );
    }
    if app.arranging && app.focus == panel {
        title.push_str(&format!("[{},{} {}x{}] ", p.x, p.y, p.w, p.h));
    }
    title
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use marketdash_core::rng::SeedSource;
    use marketdash_core::{Catalog, DashboardContext, MemoryStore};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> AppState<MemoryStore> {
        let ctx = DashboardContext::new(
            MemoryStore::new(),
            Catalog::default_catalog(),
            SeedSource::new(3),
        );
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();
        AppState::new(ctx, now)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draw_records_width_and_breakpoint() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(130, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert_eq!(app.width, 130);
        assert_eq!(app.breakpoint(), marketdash_core::Breakpoint::Md);
    }

    #[test]
    fn draws_panels_and_selection() {
        let mut app = app();
        app.toggle_cursor_instrument();
        let mut terminal = Terminal::new(TestBackend::new(200, 50)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Global Equities"));
        assert!(text.contains("[x] SPX"));
        assert!(text.contains("[EQ] SPX"));
        assert!(text.contains("REL · 1Y"));
    }

    #[test]
    fn focus_near_bottom_scrolls_grid() {
        let mut app = app();
        app.focus = PanelId::News;
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(app.scroll > 0);
        assert!(screen(&terminal).contains("News"));
    }

    #[test]
    fn help_overlay_renders() {
        let mut app = app();
        app.overlay = Overlay::Help;
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("Arrange mode"));
    }
}
