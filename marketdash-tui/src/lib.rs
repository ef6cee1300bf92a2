//! MarketDash TUI - terminal front end for the market dashboard
//!
//! Provides:
//! - A breakpoint-aware grid of panels with keyboard focus and scrolling
//! - Producer panels that add instruments to the shared comparison
//! - A comparison chart in absolute or relative mode
//! - Arrange mode for moving and resizing panels, saved per gesture

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
