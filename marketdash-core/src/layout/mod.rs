//! Per-breakpoint panel placements on a column grid.
//!
//! The persisted shape is
//! `{ "lg": [{ "i": "equity", "x": 0, "y": 0, "w": 6, "h": 3 }, ...], "md": [...], "sm": [...] }`.
//! There is no version field: a shape this parser rejects falls back to the
//! default arrangement.

pub mod grid;
pub mod store;

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::PanelId;
use crate::storage::StorageError;

pub use grid::Direction;
pub use store::LayoutStore;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("panel '{id}' has zero width or height at breakpoint {breakpoint}")]
    EmptyGeometry { breakpoint: Breakpoint, id: String },

    #[error("panel '{id}' lies outside the grid at breakpoint {breakpoint}")]
    OutOfBounds { breakpoint: Breakpoint, id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Named screen-width threshold with its own arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Lg,
    Md,
    Sm,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm];

    /// Pick the breakpoint for a terminal `width` in columns.
    pub fn for_width(width: u16) -> Self {
        match width {
            w if w >= 160 => Breakpoint::Lg,
            w if w >= 120 => Breakpoint::Md,
            _ => Breakpoint::Sm,
        }
    }

    /// Grid columns at this breakpoint.
    pub fn cols(self) -> u16 {
        match self {
            Breakpoint::Lg | Breakpoint::Md => 12,
            Breakpoint::Sm => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position and size of one panel, in grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "i")]
    pub id: String,
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Placement {
    pub fn new(panel: PanelId, x: u16, y: u16, w: u16, h: u16) -> Self {
        Self {
            id: panel.id().to_string(),
            x,
            y,
            w,
            h,
        }
    }

    /// The declared panel this placement refers to, if any.
    pub fn panel(&self) -> Option<PanelId> {
        PanelId::from_id(&self.id)
    }

    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.x.saturating_add(other.w)
            && other.x < self.x.saturating_add(self.w)
            && self.y < other.y.saturating_add(other.h)
            && other.y < self.y.saturating_add(self.h)
    }
}

/// Placements for every breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layouts(BTreeMap<Breakpoint, Vec<Placement>>);

impl Default for Layouts {
    fn default() -> Self {
        Self::default_layouts()
    }
}

impl Layouts {
    pub fn new(map: BTreeMap<Breakpoint, Vec<Placement>>) -> Self {
        Self(map)
    }

    /// Parse and validate a persisted arrangement.
    pub fn parse(json: &str) -> Result<Self, LayoutError> {
        let layouts: Layouts = serde_json::from_str(json)?;
        layouts.validate()?;
        Ok(layouts)
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        for (bp, placements) in &self.0 {
            for p in placements {
                let breakpoint = *bp;
                if p.w == 0 || p.h == 0 {
                    return Err(LayoutError::EmptyGeometry {
                        breakpoint,
                        id: p.id.clone(),
                    });
                }
                let bottom = p.y.checked_add(p.h);
                if p.x.checked_add(p.w).is_none()
                    || bottom.map_or(true, |b| b > grid::ROW_LIMIT)
                {
                    return Err(LayoutError::OutOfBounds {
                        breakpoint,
                        id: p.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Raw placements saved for `bp`, unknown ids included.
    pub fn get(&self, bp: Breakpoint) -> Option<&[Placement]> {
        self.0.get(&bp).map(Vec::as_slice)
    }

    pub fn set(&mut self, bp: Breakpoint, placements: Vec<Placement>) {
        self.0.insert(bp, placements);
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        self.0.keys().copied()
    }

    /// Placements to render at `bp`: known panels only, each exactly once,
    /// fitted into the grid and compacted.
    ///
    /// A breakpoint missing from the saved value uses the default list, and
    /// declared panels missing from the list are appended at the bottom.
    pub fn resolve(&self, bp: Breakpoint) -> Vec<Placement> {
        let cols = bp.cols();
        let defaults = Self::default_for(bp);
        let source = self.get(bp).unwrap_or(&defaults);

        let mut seen = HashSet::new();
        let mut out: Vec<Placement> = Vec::with_capacity(PanelId::ALL.len());
        for p in source {
            let Some(panel) = p.panel() else { continue };
            if !seen.insert(panel) {
                continue;
            }
            out.push(grid::fit(p.clone(), cols));
        }

        for panel in PanelId::ALL {
            if seen.contains(&panel) {
                continue;
            }
            let template = defaults
                .iter()
                .find(|d| d.panel() == Some(panel))
                .cloned()
                .unwrap_or_else(|| Placement::new(panel, 0, 0, cols, 2));
            let y = grid::bottom(&out);
            out.push(grid::fit(Placement { y, ..template }, cols));
        }

        grid::compact(&mut out, None);
        out
    }

    /// Move `panel` one step at `bp`. Returns `true` if anything changed.
    pub fn move_panel(&mut self, bp: Breakpoint, panel: PanelId, direction: Direction) -> bool {
        let mut resolved = self.resolve(bp);
        let changed = grid::move_panel(&mut resolved, bp.cols(), panel.id(), direction);
        if changed {
            self.replace_known(bp, resolved);
        }
        changed
    }

    /// Grow or shrink `panel` at `bp`. Returns `true` if anything changed.
    pub fn resize_panel(&mut self, bp: Breakpoint, panel: PanelId, dw: i16, dh: i16) -> bool {
        let mut resolved = self.resolve(bp);
        let changed = grid::resize_panel(&mut resolved, bp.cols(), panel.id(), dw, dh);
        if changed {
            self.replace_known(bp, resolved);
        }
        changed
    }

    /// Store `resolved` for `bp`, carrying unknown entries along untouched.
    fn replace_known(&mut self, bp: Breakpoint, mut resolved: Vec<Placement>) {
        if let Some(existing) = self.0.get(&bp) {
            resolved.extend(existing.iter().filter(|p| p.panel().is_none()).cloned());
        }
        self.0.insert(bp, resolved);
    }

    /// Built-in arrangement for every breakpoint.
    pub fn default_layouts() -> Self {
        let map = Breakpoint::ALL
            .into_iter()
            .map(|bp| (bp, Self::default_for(bp)))
            .collect();
        Self(map)
    }

    fn default_for(bp: Breakpoint) -> Vec<Placement> {
        use PanelId::*;

        let rows: &[(PanelId, u16, u16, u16, u16)] = match bp {
            Breakpoint::Lg => &[
                (Equity, 0, 0, 6, 3),
                (Sectors, 6, 0, 3, 3),
                (FixedIncome, 9, 0, 3, 3),
                (Comparison, 0, 3, 8, 4),
                (CentralBanks, 8, 3, 4, 4),
                (Currency, 0, 7, 3, 3),
                (Commodities, 3, 7, 3, 3),
                (Crypto, 6, 7, 3, 3),
                (Watchlist, 9, 7, 3, 3),
                (Economic, 0, 10, 6, 3),
                (News, 6, 10, 6, 3),
            ],
            Breakpoint::Md => &[
                (Equity, 0, 0, 6, 3),
                (Sectors, 6, 0, 6, 3),
                (Comparison, 0, 3, 12, 4),
                (FixedIncome, 0, 7, 6, 3),
                (CentralBanks, 6, 7, 6, 3),
                (Currency, 0, 10, 3, 3),
                (Commodities, 3, 10, 3, 3),
                (Crypto, 6, 10, 3, 3),
                (Watchlist, 9, 10, 3, 3),
                (Economic, 0, 13, 12, 2),
                (News, 0, 15, 12, 2),
            ],
            Breakpoint::Sm => &[
                (Equity, 0, 0, 6, 3),
                (Comparison, 0, 3, 6, 4),
                (Sectors, 0, 7, 6, 3),
                (FixedIncome, 0, 10, 6, 3),
                (Currency, 0, 13, 6, 3),
                (Commodities, 0, 16, 6, 3),
                (Crypto, 0, 19, 6, 3),
                (Watchlist, 0, 22, 6, 3),
                (CentralBanks, 0, 25, 6, 3),
                (Economic, 0, 28, 6, 2),
                (News, 0, 30, 6, 2),
            ],
        };

        rows.iter()
            .map(|&(panel, x, y, w, h)| Placement::new(panel, x, y, w, h))
            .collect()
    }
}
