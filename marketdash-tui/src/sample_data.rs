//! Static tables for the informational panels.
//!
//! These panels never feed the comparison chart; their figures are fixed
//! literals rather than generated series.

#[derive(Debug, Clone, Copy)]
pub struct CentralBankRate {
    pub country: &'static str,
    pub bank: &'static str,
    pub rate: f64,
    pub change: f64,
    pub last_update: &'static str,
}

pub const CENTRAL_BANK_RATES: [CentralBankRate; 10] = [
    rate("United States", "Federal Reserve", 5.25, "2024-01-31"),
    rate("European Union", "ECB", 4.5, "2024-01-25"),
    rate("United Kingdom", "Bank of England", 5.25, "2024-02-01"),
    rate("Japan", "Bank of Japan", -0.1, "2024-01-23"),
    rate("Canada", "Bank of Canada", 5.0, "2024-01-24"),
    rate("Australia", "RBA", 4.35, "2024-02-06"),
    rate("Switzerland", "SNB", 1.75, "2024-01-15"),
    rate("Norway", "Norges Bank", 4.5, "2024-01-18"),
    rate("Sweden", "Riksbank", 4.0, "2024-02-07"),
    rate("South Korea", "Bank of Korea", 3.5, "2024-01-11"),
];

const fn rate(
    country: &'static str,
    bank: &'static str,
    rate: f64,
    last_update: &'static str,
) -> CentralBankRate {
    CentralBankRate {
        country,
        bank,
        rate,
        change: 0.0,
        last_update,
    }
}

/// Headline macro figures, all in percent.
#[derive(Debug, Clone, Copy)]
pub struct EconomicIndicator {
    pub country: &'static str,
    pub cpi: f64,
    pub ppi: f64,
    pub unemployment: f64,
    pub inflation: f64,
    pub gdp_growth: f64,
}

macro_rules! indicator {
    ($country:expr, $cpi:expr, $ppi:expr, $unemp:expr, $infl:expr, $gdp:expr) => {
        EconomicIndicator {
            country: $country,
            cpi: $cpi,
            ppi: $ppi,
            unemployment: $unemp,
            inflation: $infl,
            gdp_growth: $gdp,
        }
    };
}

pub const ECONOMIC_INDICATORS: [EconomicIndicator; 10] = [
    indicator!("United States", 3.2, 1.8, 3.7, 3.1, 2.4),
    indicator!("Germany", 3.8, -1.2, 5.9, 3.7, 0.3),
    indicator!("United Kingdom", 4.0, 0.5, 4.2, 3.9, 0.1),
    indicator!("France", 4.1, -2.1, 7.4, 4.0, 0.7),
    indicator!("Japan", 3.3, 0.8, 2.6, 3.1, 1.2),
    indicator!("Canada", 3.4, -0.5, 5.8, 3.3, 1.5),
    indicator!("Italy", 0.8, -3.4, 7.6, 0.7, 0.9),
    indicator!("Spain", 3.5, -1.8, 12.3, 3.4, 2.0),
    indicator!("Netherlands", 1.3, -8.1, 3.6, 1.2, 0.9),
    indicator!("Australia", 4.1, -1.1, 3.9, 4.0, 2.1),
];

/// Portfolio risk figures shown under the indicator table. Display literals,
/// not computed from any series.
pub const RISK_SUMMARY: [(&str, &str); 3] = [
    ("Sharpe", "1.18"),
    ("Beta", "0.82"),
    ("VaR 95% 1D", "-2.1%"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsTopic {
    Markets,
    Economy,
    CentralBanks,
    Commodities,
}

impl NewsTopic {
    pub fn label(self) -> &'static str {
        match self {
            NewsTopic::Markets => "MKT",
            NewsTopic::Economy => "ECO",
            NewsTopic::CentralBanks => "CB",
            NewsTopic::Commodities => "CMD",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NewsItem {
    pub title: &'static str,
    pub summary: &'static str,
    pub age: &'static str,
    pub source: &'static str,
    pub topic: NewsTopic,
}

pub const NEWS: [NewsItem; 6] = [
    NewsItem {
        title: "Federal Reserve Holds Rates Steady at 5.25-5.5%",
        summary: "The FOMC kept the federal funds rate in its current range, citing continued progress on inflation.",
        age: "2h",
        source: "Reuters",
        topic: NewsTopic::CentralBanks,
    },
    NewsItem {
        title: "European Equities Rise on Strong Earnings Beat",
        summary: "European stocks gained as several major companies reported better-than-expected quarterly earnings.",
        age: "4h",
        source: "Bloomberg",
        topic: NewsTopic::Markets,
    },
    NewsItem {
        title: "Gold Reaches New Weekly High Amid Dollar Weakness",
        summary: "Gold surged to a weekly high as the US dollar weakened following mixed economic data.",
        age: "6h",
        source: "MarketWatch",
        topic: NewsTopic::Commodities,
    },
    NewsItem {
        title: "EU Inflation Data Shows Continued Cooling Trend",
        summary: "Eurozone inflation fell to 2.8% year-over-year in the latest reading.",
        age: "8h",
        source: "Financial Times",
        topic: NewsTopic::Economy,
    },
    NewsItem {
        title: "Tech Sector Leads Market Rally Ahead of Earnings",
        summary: "Technology stocks outperformed broader markets as investors positioned ahead of major releases.",
        age: "10h",
        source: "CNBC",
        topic: NewsTopic::Markets,
    },
    NewsItem {
        title: "Bank of Japan Maintains Ultra-Low Interest Rates",
        summary: "The BoJ kept its benchmark rate at -0.1% and maintained yield curve control.",
        age: "12h",
        source: "Nikkei",
        topic: NewsTopic::CentralBanks,
    },
];
