//! Producer panels: a checkbox list of catalog instruments.
//!
//! Each row shows selection state, symbol, name, last value and change over
//! the current window. When the panel has room, a sparkline of the cursor
//! row's series is drawn underneath.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Sparkline};
use ratatui::Frame;

use marketdash_core::series::SeriesPoint;
use marketdash_core::{Category, KeyValueStore, PanelId};

use crate::app::AppState;
use crate::theme;

const SPARKLINE_HEIGHT: u16 = 3;

pub fn render<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &mut AppState<S>, panel: PanelId) {
    let views = app.instrument_views(panel);
    let focused = app.focus == panel;
    let cursor = app.cursor(panel);
    let instruments = app.ctx.catalog.instruments(panel);

    if instruments.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No instruments configured.", theme::muted())),
            area,
        );
        return;
    }

    let rows = instruments.len() as u16;
    let (list_area, spark_area) = if area.height >= rows + SPARKLINE_HEIGHT {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(SPARKLINE_HEIGHT)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let name_width = usize::from(list_area.width).saturating_sub(34).min(24);
    let lines: Vec<Line> = instruments
        .iter()
        .zip(&views)
        .enumerate()
        .map(|(i, (instrument, view))| {
            let selected = app.ctx.selection.contains(&instrument.symbol);
            let check = if selected { "[x]" } else { "[ ]" };
            let mut spans = vec![
                Span::styled(
                    format!("{check} "),
                    if selected { theme::accent() } else { theme::muted() },
                ),
                Span::styled(
                    format!("{:<7}", instrument.symbol),
                    Style::default().fg(theme::category_color(instrument.category)),
                ),
            ];
            if name_width > 0 {
                spans.push(Span::styled(
                    format!(" {:<name_width$}", truncate(&instrument.name, name_width)),
                    theme::muted(),
                ));
            }
            if let Some(quote) = view.quote {
                spans.push(Span::styled(
                    format!(" {:>10}", format_level(instrument.category, quote.last)),
                    theme::text(),
                ));
                spans.push(Span::styled(
                    format!(" {:>+7.2}%", quote.change_pct),
                    Style::default().fg(theme::change_color(quote.change_pct)),
                ));
            }

            let line = Line::from(spans);
            if focused && i == cursor {
                line.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect();

    let offset = scroll_offset(cursor, list_area.height);
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), list_area);

    if let (Some(spark_area), Some(view), Some(instrument)) =
        (spark_area, views.get(cursor), instruments.get(cursor))
    {
        let data = sparkline_data(&view.points, usize::from(spark_area.width));
        let sparkline = Sparkline::default()
            .data(&data)
            .style(Style::default().fg(theme::category_color(instrument.category)));
        f.render_widget(sparkline, spark_area);
    }
}

/// First visible row so that `cursor` stays inside a list of `height` rows.
fn scroll_offset(cursor: usize, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    cursor.saturating_sub(height - 1) as u16
}

/// Prices with the precision their market quotes in.
pub fn format_level(category: Category, value: f64) -> String {
    match category {
        Category::Fx => format!("{value:.4}"),
        Category::Bond => format!("{value:.3}"),
        Category::Equity | Category::Commodity | Category::Crypto => format!("{value:.2}"),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

/// Downsample `points` to at most `width` bars scaled to 0..=100.
pub fn sparkline_data(points: &[SeriesPoint], width: usize) -> Vec<u64> {
    if points.is_empty() || width == 0 {
        return Vec::new();
    }
    let sampled: Vec<f64> = if points.len() <= width {
        points.iter().map(|p| p.value).collect()
    } else {
        (0..width)
            .map(|i| points[i * (points.len() - 1) / (width - 1).max(1)].value)
            .collect()
    };
    let lo = sampled.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = sampled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;
    sampled
        .iter()
        .map(|v| {
            if range > 0.0 {
                ((v - lo) / range * 100.0).round() as u64
            } else {
                50
            }
        })
        .collect()
}
