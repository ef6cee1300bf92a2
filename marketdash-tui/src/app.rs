//! Application state — single-owner, main-thread only.
//!
//! Shared dashboard state lives in the [`DashboardContext`]; this struct adds
//! what only the terminal front end needs: focus, cursors, arrange mode, the
//! status line and the render caches.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use marketdash_core::layout::Direction;
use marketdash_core::series::{instrument_series, ComparisonSeries, Quote, SeriesPoint};
use marketdash_core::{
    Breakpoint, ChartMode, DashboardContext, FileStore, KeyValueStore, PanelId, PanelKind,
    TimeWindow,
};

use crate::sample_data;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Overlay drawn above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Series and quote for one catalog instrument under the current window.
#[derive(Debug, Clone)]
pub struct InstrumentView {
    pub points: Vec<SeriesPoint>,
    pub quote: Option<Quote>,
}

#[derive(Debug)]
struct ComparisonCache {
    key: (u64, TimeWindow, ChartMode),
    series: ComparisonSeries,
}

#[derive(Debug, Default)]
struct InstrumentCache {
    window: Option<TimeWindow>,
    views: HashMap<String, InstrumentView>,
}

pub struct AppState<S: KeyValueStore = FileStore> {
    pub ctx: DashboardContext<S>,
    pub focus: PanelId,
    pub cursors: HashMap<PanelId, usize>,
    pub arranging: bool,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
    /// Terminal width seen by the last draw; selects the breakpoint.
    pub width: u16,
    /// Vertical scroll of the grid in terminal rows.
    pub scroll: u16,
    /// End timestamp of every generated series.
    pub now: NaiveDateTime,
    comparison: Option<ComparisonCache>,
    instruments: InstrumentCache,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(ctx: DashboardContext<S>, now: NaiveDateTime) -> Self {
        Self {
            ctx,
            focus: PanelId::Equity,
            cursors: HashMap::new(),
            arranging: false,
            overlay: Overlay::None,
            status_message: None,
            running: true,
            width: 0,
            scroll: 0,
            now,
            comparison: None,
            instruments: InstrumentCache::default(),
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.width)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    // ── Focus ────────────────────────────────────────────────────────

    /// Panels in reading order (top to bottom, left to right) for the
    /// current breakpoint.
    pub fn focus_order(&self) -> Vec<PanelId> {
        let mut placements = self.ctx.layouts().resolve(self.breakpoint());
        placements.sort_by_key(|p| (p.y, p.x));
        placements.iter().filter_map(|p| p.panel()).collect()
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        if order.is_empty() {
            return;
        }
        let n = order.len() as isize;
        let current = order.iter().position(|&p| p == self.focus).unwrap_or(0) as isize;
        self.focus = order[(current + delta).rem_euclid(n) as usize];
    }

    // ── Cursors ──────────────────────────────────────────────────────

    /// Number of cursor rows a panel offers.
    pub fn row_count(&self, panel: PanelId) -> usize {
        match panel.kind() {
            PanelKind::Producer => self.ctx.catalog.instruments(panel).len(),
            PanelKind::Comparison => self.ctx.selection.len(),
            PanelKind::Informational => match panel {
                PanelId::CentralBanks => sample_data::CENTRAL_BANK_RATES.len(),
                PanelId::Economic => sample_data::ECONOMIC_INDICATORS.len(),
                PanelId::News => sample_data::NEWS.len(),
                _ => 0,
            },
        }
    }

    /// Cursor row of `panel`, clamped to its current row count.
    pub fn cursor(&self, panel: PanelId) -> usize {
        let raw = self.cursors.get(&panel).copied().unwrap_or(0);
        raw.min(self.row_count(panel).saturating_sub(1))
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let rows = self.row_count(self.focus);
        if rows == 0 {
            return;
        }
        let current = self.cursor(self.focus) as isize;
        let next = (current + delta).clamp(0, rows as isize - 1) as usize;
        self.cursors.insert(self.focus, next);
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Toggle the instrument under the cursor of a producer panel.
    pub fn toggle_cursor_instrument(&mut self) {
        if self.focus.kind() != PanelKind::Producer {
            return;
        }
        let Some(instrument) = self
            .ctx
            .catalog
            .instruments(self.focus)
            .get(self.cursor(self.focus))
        else {
            return;
        };
        let ticker = instrument.to_selected();
        let symbol = ticker.symbol().to_string();
        if self.ctx.selection.toggle(ticker) {
            self.set_status(format!("Added {symbol} to comparison"));
        } else {
            self.set_status(format!("Removed {symbol} from comparison"));
        }
    }

    /// Remove the ticker under the comparison panel's cursor.
    pub fn remove_cursor_ticker(&mut self) {
        if self.focus != PanelId::Comparison {
            return;
        }
        let index = self.cursor(PanelId::Comparison);
        let Some(symbol) = self
            .ctx
            .selection
            .tickers()
            .get(index)
            .map(|t| t.symbol().to_string())
        else {
            return;
        };
        if self.ctx.selection.remove(&symbol) {
            self.set_status(format!("Removed {symbol} from comparison"));
        }
    }

    pub fn clear_selection(&mut self) {
        if self.ctx.selection.is_empty() {
            return;
        }
        self.ctx.selection.clear();
        self.set_status("Comparison cleared");
    }

    pub fn toggle_mode(&mut self) {
        let mode = self.ctx.selection.mode().toggle();
        self.ctx.selection.set_mode(mode);
        let label = match mode {
            ChartMode::Compare => "relative (% change)",
            ChartMode::Overlay => "absolute",
        };
        self.set_status(format!("Chart mode: {label}"));
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        self.ctx.selection.set_window(window);
        self.set_status(format!("Window: {}", window.label()));
    }

    // ── Arrange ──────────────────────────────────────────────────────

    pub fn move_focused(&mut self, direction: Direction) {
        let bp = self.breakpoint();
        if !self.ctx.move_panel(bp, self.focus, direction) {
            self.set_warning(format!("{} cannot move further", self.focus.label()));
        }
    }

    pub fn resize_focused(&mut self, dw: i16, dh: i16) {
        let bp = self.breakpoint();
        if !self.ctx.resize_panel(bp, self.focus, dw, dh) {
            self.set_warning(format!("{} is at its size limit", self.focus.label()));
        }
    }

    pub fn reset_layout(&mut self) {
        self.ctx.reset_layout();
        self.scroll = 0;
        self.set_status("Layout reset to default");
    }

    // ── Render caches ────────────────────────────────────────────────

    /// Comparison lines for the current selection, rebuilt only when the
    /// selection, window or mode changed.
    pub fn comparison(&mut self) -> &ComparisonSeries {
        let selection = &self.ctx.selection;
        let key = (selection.revision(), selection.window(), selection.mode());
        let cache = match self.comparison.take() {
            Some(cache) if cache.key == key => cache,
            _ => ComparisonCache {
                key,
                series: ComparisonSeries::build(selection, &self.ctx.seeds, self.now),
            },
        };
        &self.comparison.insert(cache).series
    }

    /// Series and quote for every instrument of a producer panel.
    pub fn instrument_views(&mut self, panel: PanelId) -> Vec<InstrumentView> {
        let window = self.ctx.selection.window();
        if self.instruments.window != Some(window) {
            self.instruments.views.clear();
            self.instruments.window = Some(window);
        }
        let mut views = Vec::new();
        for instrument in self.ctx.catalog.instruments(panel) {
            let view = self
                .instruments
                .views
                .entry(instrument.symbol.clone())
                .or_insert_with(|| {
                    let points = instrument_series(instrument, window, &self.ctx.seeds, self.now);
                    let quote = Quote::from_series(&points);
                    InstrumentView { points, quote }
                });
            views.push(view.clone());
        }
        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use marketdash_core::rng::SeedSource;
    use marketdash_core::{Catalog, MemoryStore};

    fn app() -> AppState<MemoryStore> {
        let ctx = DashboardContext::new(
            MemoryStore::new(),
            Catalog::default_catalog(),
            SeedSource::new(7),
        );
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();
        let mut app = AppState::new(ctx, now);
        app.width = 200;
        app
    }

    #[test]
    fn focus_order_follows_grid() {
        let app = app();
        let order = app.focus_order();
        assert_eq!(order.len(), PanelId::ALL.len());
        assert_eq!(order[0], PanelId::Equity);
        assert_eq!(order[1], PanelId::Sectors);
        assert_eq!(order[2], PanelId::FixedIncome);
        assert_eq!(order[3], PanelId::Comparison);
    }

    #[test]
    fn focus_wraps() {
        let mut app = app();
        app.focus_prev();
        assert_eq!(app.focus, PanelId::News);
        app.focus_next();
        assert_eq!(app.focus, PanelId::Equity);
    }

    #[test]
    fn breakpoint_tracks_width() {
        let mut app = app();
        assert_eq!(app.breakpoint(), Breakpoint::Lg);
        app.width = 130;
        assert_eq!(app.breakpoint(), Breakpoint::Md);
        app.width = 80;
        assert_eq!(app.breakpoint(), Breakpoint::Sm);
    }

    #[test]
    fn cursor_clamps_to_rows() {
        let mut app = app();
        app.move_cursor(100);
        assert_eq!(app.cursor(PanelId::Equity), app.row_count(PanelId::Equity) - 1);
        app.move_cursor(-100);
        assert_eq!(app.cursor(PanelId::Equity), 0);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut app = app();
        app.toggle_cursor_instrument();
        assert_eq!(app.ctx.selection.len(), 1);
        assert_eq!(app.ctx.selection.tickers()[0].symbol(), "SPX");
        app.toggle_cursor_instrument();
        assert!(app.ctx.selection.is_empty());
    }

    #[test]
    fn toggle_ignored_outside_producers() {
        let mut app = app();
        app.focus = PanelId::News;
        app.toggle_cursor_instrument();
        assert!(app.ctx.selection.is_empty());
    }

    #[test]
    fn remove_from_comparison_cursor() {
        let mut app = app();
        app.toggle_cursor_instrument();
        app.move_cursor(1);
        app.toggle_cursor_instrument();
        assert_eq!(app.ctx.selection.len(), 2);

        app.focus = PanelId::Comparison;
        app.move_cursor(1);
        app.remove_cursor_ticker();
        let symbols: Vec<_> = app.ctx.selection.tickers().iter().map(|t| t.symbol()).collect();
        assert_eq!(symbols, ["SPX"]);
    }

    #[test]
    fn comparison_cache_follows_revision() {
        let mut app = app();
        assert!(app.comparison().is_empty());
        app.toggle_cursor_instrument();
        assert_eq!(app.comparison().lines.len(), 1);
        app.toggle_mode();
        assert_eq!(app.comparison().mode, ChartMode::Overlay);
        app.set_window(TimeWindow::OneMonth);
        let series = app.comparison();
        assert_eq!(series.window, TimeWindow::OneMonth);
        assert_eq!(series.lines[0].points.len(), TimeWindow::OneMonth.steps() + 1);
    }

    #[test]
    fn instrument_views_follow_window() {
        let mut app = app();
        let views = app.instrument_views(PanelId::Currency);
        assert_eq!(views.len(), app.ctx.catalog.instruments(PanelId::Currency).len());
        assert!(views.iter().all(|v| v.quote.is_some()));

        app.set_window(TimeWindow::OneWeek);
        let views = app.instrument_views(PanelId::Currency);
        assert_eq!(views[0].points.len(), TimeWindow::OneWeek.steps() + 1);
    }

    #[test]
    fn failed_gesture_warns() {
        let mut app = app();
        app.move_focused(Direction::Left);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn reset_restores_default_and_scroll() {
        let mut app = app();
        app.resize_focused(0, 2);
        app.scroll = 5;
        app.reset_layout();
        assert_eq!(app.scroll, 0);
        assert_eq!(
            app.ctx.layouts(),
            &marketdash_core::Layouts::default_layouts()
        );
    }
}
