//! Selection Store: which instruments are currently being compared.
//!
//! Any producer panel may add or remove tickers; the comparison panel reads
//! the list together with the chart mode and time window. All mutations are
//! total: duplicates and missing symbols are silent no-ops.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::ticker::SelectedTicker;

/// How the comparison chart scales its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Absolute values.
    Overlay,
    /// Percent change from the first observation.
    #[default]
    Compare,
}

impl ChartMode {
    pub fn toggle(self) -> Self {
        match self {
            ChartMode::Overlay => ChartMode::Compare,
            ChartMode::Compare => ChartMode::Overlay,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartMode::Overlay => "ABS",
            ChartMode::Compare => "REL",
        }
    }
}

/// Supported time spans for the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "MAX")]
    Max,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 6] = [
        TimeWindow::OneDay,
        TimeWindow::OneWeek,
        TimeWindow::OneMonth,
        TimeWindow::OneYear,
        TimeWindow::FiveYears,
        TimeWindow::Max,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::OneDay => "1D",
            TimeWindow::OneWeek => "1W",
            TimeWindow::OneMonth => "1M",
            TimeWindow::OneYear => "1Y",
            TimeWindow::FiveYears => "5Y",
            TimeWindow::Max => "MAX",
        }
    }

    /// Number of steps in the window. A series has `steps() + 1` points.
    pub fn steps(self) -> usize {
        match self {
            TimeWindow::OneDay => 24,
            TimeWindow::OneWeek => 7,
            TimeWindow::OneMonth => 30,
            TimeWindow::OneYear => 365,
            TimeWindow::FiveYears => 1825,
            TimeWindow::Max => 3650,
        }
    }

    /// Time between two observations.
    pub fn step(self) -> Duration {
        match self {
            TimeWindow::OneDay => Duration::hours(1),
            _ => Duration::days(1),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|w| *w == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Shared ticker selection plus chart mode and time window.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    tickers: Vec<SelectedTicker>,
    mode: ChartMode,
    window: TimeWindow,
    revision: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `ticker` unless its symbol is already present.
    ///
    /// Returns `true` if the ticker was inserted. The stored color is always
    /// the category color.
    pub fn add(&mut self, ticker: SelectedTicker) -> bool {
        if self.contains(ticker.symbol()) {
            return false;
        }
        tracing::debug!(symbol = ticker.symbol(), "ticker added to selection");
        self.tickers.push(ticker.recolored());
        self.bump();
        true
    }

    /// Remove the entry with `symbol`. Returns `true` if one was removed.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.tickers.len();
        self.tickers.retain(|t| t.symbol() != symbol);
        let removed = self.tickers.len() != before;
        if removed {
            tracing::debug!(symbol, "ticker removed from selection");
            self.bump();
        }
        removed
    }

    /// Checkbox semantics: remove if selected, add otherwise.
    ///
    /// Returns `true` if the ticker is selected afterwards.
    pub fn toggle(&mut self, ticker: SelectedTicker) -> bool {
        if self.remove(ticker.symbol()) {
            false
        } else {
            self.add(ticker)
        }
    }

    pub fn clear(&mut self) {
        if !self.tickers.is_empty() {
            self.tickers.clear();
            self.bump();
        }
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        if self.mode != mode {
            self.mode = mode;
            self.bump();
        }
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        if self.window != window {
            self.window = window;
            self.bump();
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.tickers.iter().any(|t| t.symbol() == symbol)
    }

    /// Selected tickers in insertion order.
    pub fn tickers(&self) -> &[SelectedTicker] {
        &self.tickers
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Incremented on every mutation that changed something.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
