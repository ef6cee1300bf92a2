//! Ticker categories and the selection entry type.

use serde::{Deserialize, Serialize};

/// Plain RGB triple. Kept UI-agnostic so the TUI maps it to its own color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Asset class of a tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Equity,
    Fx,
    Bond,
    Commodity,
    Crypto,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Equity,
        Category::Fx,
        Category::Bond,
        Category::Commodity,
        Category::Crypto,
    ];

    /// The fixed series color for this category.
    ///
    /// Every ticker of a category gets the same color, so two equities on the
    /// comparison chart are distinguishable only by their legend entry.
    pub fn color(self) -> Rgb {
        match self {
            Category::Equity => Rgb(0, 200, 255),
            Category::Fx => Rgb(255, 140, 0),
            Category::Bond => Rgb(147, 112, 219),
            Category::Commodity => Rgb(255, 215, 0),
            Category::Crypto => Rgb(0, 255, 128),
        }
    }

    /// Two-letter badge shown next to a symbol.
    pub fn badge(self) -> &'static str {
        match self {
            Category::Equity => "EQ",
            Category::Fx => "FX",
            Category::Bond => "FI",
            Category::Commodity => "CM",
            Category::Crypto => "CR",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Equity => "Equity",
            Category::Fx => "FX",
            Category::Bond => "Bond",
            Category::Commodity => "Commodity",
            Category::Crypto => "Crypto",
        }
    }
}

/// One entry of the Selection Store.
///
/// Entries are immutable once built: changing a ticker means removing it and
/// adding a new one. The color is always derived from the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTicker {
    symbol: String,
    name: String,
    category: Category,
    color: Rgb,
}

impl SelectedTicker {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            category,
            color: category.color(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Re-derive the color from the category.
    pub(crate) fn recolored(mut self) -> Self {
        self.color = self.category.color();
        self
    }
}
