//! MarketDash Core — shared dashboard state, layout persistence and mock data.
//!
//! This crate holds everything the panels agree on:
//! - Ticker categories and their fixed colors
//! - The Selection Store (cross-panel "selected tickers" scratchpad)
//! - The Layout Store (per-breakpoint panel placements, persisted as JSON)
//! - A vertical-compaction grid engine for moving and resizing panels
//! - The static instrument catalog the producer panels draw from
//! - Random-walk series generation with order-independent seeds
//! - `DashboardContext`, the explicitly provisioned owner of all of the above

pub mod catalog;
pub mod context;
pub mod layout;
pub mod rng;
pub mod selection;
pub mod series;
pub mod storage;
pub mod ticker;

pub use catalog::{Catalog, Instrument, PanelId, PanelKind};
pub use context::DashboardContext;
pub use layout::{Breakpoint, LayoutError, LayoutStore, Layouts, Placement};
pub use selection::{ChartMode, SelectionStore, TimeWindow};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use ticker::{Category, Rgb, SelectedTicker};
