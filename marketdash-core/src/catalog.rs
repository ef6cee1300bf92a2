//! Instrument catalog — the static panel set and the instruments each
//! producer panel offers for selection.
//!
//! The catalog can be loaded from a TOML file; otherwise the built-in
//! `default_catalog()` is used.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::TimeWindow;
use crate::series::RandomWalk;
use crate::ticker::{Category, SelectedTicker};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Every panel the dashboard knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelId {
    Equity,
    Sectors,
    FixedIncome,
    Currency,
    Commodities,
    Crypto,
    Watchlist,
    CentralBanks,
    Economic,
    News,
    Comparison,
}

/// What a panel does with the shared selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Lists instruments and adds/removes them from the selection.
    Producer,
    /// Static tables and feeds; ignores the selection.
    Informational,
    /// Draws the selected tickers.
    Comparison,
}

impl PanelId {
    pub const ALL: [PanelId; 11] = [
        PanelId::Equity,
        PanelId::Sectors,
        PanelId::FixedIncome,
        PanelId::Currency,
        PanelId::Commodities,
        PanelId::Crypto,
        PanelId::Watchlist,
        PanelId::CentralBanks,
        PanelId::Economic,
        PanelId::News,
        PanelId::Comparison,
    ];

    /// The id used in persisted layouts.
    pub fn id(self) -> &'static str {
        match self {
            PanelId::Equity => "equity",
            PanelId::Sectors => "sectors",
            PanelId::FixedIncome => "fixedIncome",
            PanelId::Currency => "currency",
            PanelId::Commodities => "commodities",
            PanelId::Crypto => "crypto",
            PanelId::Watchlist => "watchlist",
            PanelId::CentralBanks => "centralBanks",
            PanelId::Economic => "economic",
            PanelId::News => "news",
            PanelId::Comparison => "comparison",
        }
    }

    /// Resolve a persisted id. Unknown ids resolve to `None` and stay inert.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelId::Equity => "Global Equities",
            PanelId::Sectors => "Sectors",
            PanelId::FixedIncome => "Fixed Income",
            PanelId::Currency => "Currencies",
            PanelId::Commodities => "Commodities",
            PanelId::Crypto => "Crypto",
            PanelId::Watchlist => "Watchlist",
            PanelId::CentralBanks => "Central Bank Rates",
            PanelId::Economic => "Economic Indicators",
            PanelId::News => "News",
            PanelId::Comparison => "Chart Analysis",
        }
    }

    pub fn kind(self) -> PanelKind {
        match self {
            PanelId::Equity
            | PanelId::Sectors
            | PanelId::FixedIncome
            | PanelId::Currency
            | PanelId::Commodities
            | PanelId::Crypto
            | PanelId::Watchlist => PanelKind::Producer,
            PanelId::CentralBanks | PanelId::Economic | PanelId::News => {
                PanelKind::Informational
            }
            PanelId::Comparison => PanelKind::Comparison,
        }
    }
}

/// A selectable instrument with the parameters of its mock price path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub category: Category,
    /// Price (or yield) at the start of a generated window.
    pub level: f64,
    /// Annualized trend, e.g. 0.08 for +8% a year.
    pub annual_drift: f64,
    /// Daily shock range of the random walk.
    pub daily_volatility: f64,
}

impl Instrument {
    pub fn new(
        symbol: &str,
        name: &str,
        category: Category,
        level: f64,
        annual_drift: f64,
        daily_volatility: f64,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            category,
            level,
            annual_drift,
            daily_volatility,
        }
    }

    /// Selection entry for this instrument.
    pub fn to_selected(&self) -> SelectedTicker {
        SelectedTicker::new(self.symbol.clone(), self.name.clone(), self.category)
    }

    /// Random-walk parameters scaled to the window's step size.
    pub fn walk(&self, window: TimeWindow) -> RandomWalk {
        let (drift, volatility) = match window {
            TimeWindow::OneDay => (
                self.annual_drift / (365.0 * 24.0),
                self.daily_volatility / 24f64.sqrt(),
            ),
            _ => (self.annual_drift / 365.0, self.daily_volatility),
        };
        RandomWalk {
            start: self.level,
            drift,
            volatility,
        }
    }
}

/// Instruments offered by one producer panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPanel {
    pub panel: PanelId,
    pub instruments: Vec<Instrument>,
}

/// All producer panels and their instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub panels: Vec<CatalogPanel>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the catalog to TOML.
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Instruments listed by `panel`; empty for panels that list nothing.
    pub fn instruments(&self, panel: PanelId) -> &[Instrument] {
        self.panels
            .iter()
            .find(|p| p.panel == panel)
            .map(|p| p.instruments.as_slice())
            .unwrap_or(&[])
    }

    /// Look up an instrument by symbol across all panels.
    pub fn find(&self, symbol: &str) -> Option<&Instrument> {
        self.panels
            .iter()
            .flat_map(|p| p.instruments.iter())
            .find(|i| i.symbol == symbol)
    }

    pub fn instrument_count(&self) -> usize {
        self.panels.iter().map(|p| p.instruments.len()).sum()
    }

    /// Built-in catalog: global indices, sectors, rates, FX, commodities, crypto
    /// and a watchlist of single stocks.
    pub fn default_catalog() -> Self {
        use Category::*;

        let panels = vec![
            CatalogPanel {
                panel: PanelId::Equity,
                instruments: vec![
                    Instrument::new("SPX", "S&P 500", Equity, 3800.0, 0.12, 0.012),
                    Instrument::new("FTSE", "FTSE 100", Equity, 7200.0, 0.08, 0.010),
                    Instrument::new("CAC", "CAC 40", Equity, 6800.0, 0.09, 0.012),
                    Instrument::new("N225", "Nikkei 225", Equity, 30000.0, 0.06, 0.013),
                    Instrument::new("DAX", "DAX", Equity, 15000.0, 0.10, 0.012),
                ],
            },
            CatalogPanel {
                panel: PanelId::Sectors,
                instruments: vec![
                    Instrument::new("XLK", "Technology", Equity, 180.0, 0.15, 0.016),
                    Instrument::new("XLF", "Financials", Equity, 38.0, 0.08, 0.014),
                    Instrument::new("XLE", "Energy", Equity, 90.0, 0.05, 0.018),
                    Instrument::new("XLV", "Health Care", Equity, 135.0, 0.07, 0.010),
                    Instrument::new("XLY", "Consumer Discretionary", Equity, 175.0, 0.09, 0.015),
                    Instrument::new("XLI", "Industrials", Equity, 110.0, 0.08, 0.012),
                    Instrument::new("XLU", "Utilities", Equity, 65.0, 0.04, 0.009),
                ],
            },
            CatalogPanel {
                panel: PanelId::FixedIncome,
                instruments: vec![
                    Instrument::new("US2Y", "US 2Y Treasury", Bond, 4.65, -0.02, 0.010),
                    Instrument::new("US10Y", "US 10Y Treasury", Bond, 4.25, -0.01, 0.008),
                    Instrument::new("US30Y", "US 30Y Treasury", Bond, 4.40, 0.0, 0.007),
                    Instrument::new("DE10Y", "German 10Y Bund", Bond, 2.35, -0.01, 0.009),
                    Instrument::new("GB10Y", "UK 10Y Gilt", Bond, 4.10, -0.01, 0.009),
                    Instrument::new("JP10Y", "Japan 10Y JGB", Bond, 0.75, 0.05, 0.012),
                ],
            },
            CatalogPanel {
                panel: PanelId::Currency,
                instruments: vec![
                    Instrument::new("EURUSD", "Euro / US Dollar", Fx, 1.085, 0.01, 0.004),
                    Instrument::new("GBPUSD", "British Pound / US Dollar", Fx, 1.27, 0.0, 0.005),
                    Instrument::new("USDJPY", "US Dollar / Japanese Yen", Fx, 148.5, 0.03, 0.005),
                    Instrument::new("USDCHF", "US Dollar / Swiss Franc", Fx, 0.88, -0.01, 0.004),
                    Instrument::new("AUDUSD", "Australian Dollar / US Dollar", Fx, 0.66, 0.0, 0.006),
                    Instrument::new("USDCAD", "US Dollar / Canadian Dollar", Fx, 1.35, 0.0, 0.004),
                ],
            },
            CatalogPanel {
                panel: PanelId::Commodities,
                instruments: vec![
                    Instrument::new("CL", "Crude Oil", Commodity, 87.45, 0.03, 0.020),
                    Instrument::new("GC", "Gold", Commodity, 2048.30, 0.06, 0.009),
                    Instrument::new("SI", "Silver", Commodity, 24.67, 0.04, 0.016),
                    Instrument::new("NG", "Natural Gas", Commodity, 2.89, -0.05, 0.035),
                    Instrument::new("HG", "Copper", Commodity, 3.85, 0.04, 0.014),
                ],
            },
            CatalogPanel {
                panel: PanelId::Crypto,
                instruments: vec![
                    Instrument::new("BTC", "Bitcoin", Crypto, 43000.0, 0.40, 0.035),
                    Instrument::new("ETH", "Ethereum", Crypto, 2300.0, 0.35, 0.042),
                    Instrument::new("SOL", "Solana", Crypto, 98.0, 0.50, 0.060),
                ],
            },
            CatalogPanel {
                panel: PanelId::Watchlist,
                instruments: vec![
                    Instrument::new("AAPL", "Apple Inc.", Equity, 193.42, 0.12, 0.017),
                    Instrument::new("MSFT", "Microsoft", Equity, 378.85, 0.15, 0.016),
                    Instrument::new("NVDA", "NVIDIA", Equity, 875.28, 0.45, 0.032),
                    Instrument::new("GOOGL", "Alphabet", Equity, 141.68, 0.10, 0.018),
                    Instrument::new("TSLA", "Tesla", Equity, 248.92, 0.18, 0.036),
                ],
            },
        ];

        Self { panels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ids_roundtrip() {
        for panel in PanelId::ALL {
            assert_eq!(PanelId::from_id(panel.id()), Some(panel));
        }
        assert_eq!(PanelId::from_id("housing"), None);
    }

    #[test]
    fn panel_serde_matches_id() {
        for panel in PanelId::ALL {
            let json = serde_json::to_string(&panel).unwrap();
            assert_eq!(json, format!("\"{}\"", panel.id()));
        }
    }

    #[test]
    fn only_producers_list_instruments() {
        let catalog = Catalog::default_catalog();
        for panel in PanelId::ALL {
            let listed = !catalog.instruments(panel).is_empty();
            assert_eq!(listed, panel.kind() == PanelKind::Producer, "{panel:?}");
        }
    }

    #[test]
    fn symbols_are_unique() {
        let catalog = Catalog::default_catalog();
        let mut seen = std::collections::HashSet::new();
        for panel in &catalog.panels {
            for inst in &panel.instruments {
                assert!(seen.insert(inst.symbol.clone()), "duplicate {}", inst.symbol);
            }
        }
        assert_eq!(seen.len(), catalog.instrument_count());
    }

    #[test]
    fn watchlist_offers_single_stocks() {
        let catalog = Catalog::default_catalog();
        let symbols: Vec<&str> = catalog
            .instruments(PanelId::Watchlist)
            .iter()
            .map(|i| i.symbol.as_str())
            .collect();
        assert_eq!(symbols, ["AAPL", "MSFT", "NVDA", "GOOGL", "TSLA"]);
        assert_eq!(PanelId::Watchlist.kind(), PanelKind::Producer);

        let apple = catalog.find("AAPL").unwrap().to_selected();
        let microsoft = catalog.find("MSFT").unwrap().to_selected();
        assert_eq!(apple.category(), Category::Equity);
        assert_eq!(apple.color(), microsoft.color());
    }

    #[test]
    fn toml_roundtrip() {
        let catalog = Catalog::default_catalog();
        let text = catalog.to_toml().unwrap();
        let parsed = Catalog::from_toml(&text).unwrap();
        assert_eq!(parsed.instrument_count(), catalog.instrument_count());
        assert_eq!(parsed.find("GC").map(|i| i.category), Some(Category::Commodity));
    }

    #[test]
    fn find_and_select() {
        let catalog = Catalog::default_catalog();
        let eurusd = catalog.find("EURUSD").unwrap();
        let ticker = eurusd.to_selected();
        assert_eq!(ticker.symbol(), "EURUSD");
        assert_eq!(ticker.color(), Category::Fx.color());
    }

    #[test]
    fn intraday_walk_scales_down() {
        let spx = Catalog::default_catalog().find("SPX").cloned().unwrap();
        let daily = spx.walk(TimeWindow::OneYear);
        let hourly = spx.walk(TimeWindow::OneDay);
        assert!(hourly.volatility < daily.volatility);
        assert!(hourly.drift < daily.drift);
        assert_eq!(hourly.start, daily.start);
    }
}
