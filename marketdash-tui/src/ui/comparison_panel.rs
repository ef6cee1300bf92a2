//! Comparison chart: one line per selected ticker.

use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Wrap};
use ratatui::Frame;

use marketdash_core::series::ComparisonSeries;
use marketdash_core::{ChartMode, KeyValueStore, PanelId, TimeWindow};

use crate::app::AppState;
use crate::theme;

pub fn render<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &mut AppState<S>) {
    let focused = app.focus == PanelId::Comparison;
    let cursor = app.cursor(PanelId::Comparison);
    let series = app.comparison();

    if series.is_empty() {
        render_empty(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_legend(f, chunks[0], series, focused.then_some(cursor));
    render_chart(f, chunks[1], series);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("No tickers selected.", theme::muted())),
        Line::from(""),
        Line::from(Span::styled(
            "Focus a market panel and press Space to add its instrument here.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// Category badges with symbols; the cursor entry is reversed when focused.
fn render_legend(f: &mut Frame, area: Rect, series: &ComparisonSeries, cursor: Option<usize>) {
    let mut spans = Vec::new();
    for (i, line) in series.lines.iter().enumerate() {
        let mut style = Style::default().fg(theme::rgb(line.color));
        if cursor == Some(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(
            format!("[{}] {}", line.category.badge(), line.symbol),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_chart(f: &mut Frame, area: Rect, series: &ComparisonSeries) {
    let Some((lo, hi)) = series.value_bounds() else {
        return;
    };
    let padding = ((hi - lo).abs() * 0.05).max(0.01);
    let y_min = lo - padding;
    let y_max = hi + padding;

    let data: Vec<Vec<(f64, f64)>> = series
        .lines
        .iter()
        .map(|line| {
            line.points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.value))
                .collect()
        })
        .collect();
    let x_max = data.iter().map(Vec::len).max().unwrap_or(0).saturating_sub(1) as f64;

    let datasets: Vec<Dataset> = series
        .lines
        .iter()
        .zip(&data)
        .map(|(line, points)| {
            Dataset::default()
                .name(line.symbol.as_str())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(theme::rgb(line.color)))
                .graph_type(GraphType::Line)
                .data(points)
        })
        .collect();

    let (first, last) = time_span(series);
    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first, theme::muted()),
                    Span::styled(last, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format_value(series.mode, y_min), theme::muted()),
                    Span::styled(format_value(series.mode, y_max), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn time_span(series: &ComparisonSeries) -> (String, String) {
    let points = series.lines.first().map(|l| l.points.as_slice()).unwrap_or(&[]);
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => (
            format_time(series.window, first.time),
            format_time(series.window, last.time),
        ),
        _ => (String::new(), String::new()),
    }
}

/// Axis label for a timestamp at the window's resolution.
pub fn format_time(window: TimeWindow, time: NaiveDateTime) -> String {
    match window {
        TimeWindow::OneDay => time.format("%H:%M").to_string(),
        TimeWindow::OneWeek | TimeWindow::OneMonth => time.format("%d %b").to_string(),
        TimeWindow::OneYear | TimeWindow::FiveYears | TimeWindow::Max => {
            time.format("%b %Y").to_string()
        }
    }
}

/// Axis label for a value: percent change in Compare mode, level in Overlay.
pub fn format_value(mode: ChartMode, value: f64) -> String {
    match mode {
        ChartMode::Compare => format!("{value:+.1}%"),
        ChartMode::Overlay => format!("{value:.2}"),
    }
}
