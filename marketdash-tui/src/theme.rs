//! Terminal palette and style helpers.
//!
//! Dark background with amber accents in the spirit of a market terminal:
//! - **Accent**: amber (titles, focus, selected rows)
//! - **Positive / Negative**: green / red price changes
//! - **Warning**: orange status messages and arrange mode
//! - **Muted**: grey secondary text

use marketdash_core::{Category, Rgb};
use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(12, 12, 14);
pub const ACCENT: Color = Color::Rgb(255, 176, 0);
pub const POSITIVE: Color = Color::Rgb(0, 220, 120);
pub const NEGATIVE: Color = Color::Rgb(255, 60, 80);
pub const WARNING: Color = Color::Rgb(255, 120, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(120, 120, 130);
pub const TEXT: Color = Color::Rgb(220, 220, 220);

/// Convert a core color to a terminal color.
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Series color for a ticker category.
pub fn category_color(category: Category) -> Color {
    rgb(category.color())
}

/// Green for gains, red for losses, grey for unchanged.
pub fn change_color(change: f64) -> Color {
    if change > 0.0 {
        POSITIVE
    } else if change < 0.0 {
        NEGATIVE
    } else {
        MUTED
    }
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn panel_border(focused: bool, arranging: bool) -> Style {
    match (focused, arranging) {
        (true, true) => warning().add_modifier(Modifier::BOLD),
        (true, false) => accent(),
        (false, _) => muted(),
    }
}

pub fn panel_title(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        text()
    }
}
