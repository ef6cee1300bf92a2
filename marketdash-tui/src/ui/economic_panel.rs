//! Economic indicator table with a portfolio risk line underneath.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use marketdash_core::{KeyValueStore, PanelId};

use crate::app::AppState;
use crate::sample_data::{ECONOMIC_INDICATORS, RISK_SUMMARY};
use crate::theme;

pub fn render<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &AppState<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let header = Row::new(["Country", "CPI", "PPI", "Unemp", "Infl", "GDP"]).style(theme::muted());
    let rows = ECONOMIC_INDICATORS.iter().map(|e| {
        Row::new([
            Cell::from(e.country),
            figure(e.cpi, false),
            figure(e.ppi, false),
            figure(e.unemployment, true),
            figure(e.inflation, false),
            figure(e.gdp_growth, false),
        ])
        .style(theme::text())
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if app.focus == PanelId::Economic {
        state.select(Some(app.cursor(PanelId::Economic)));
    }
    f.render_stateful_widget(table, chunks[0], &mut state);

    let mut spans = Vec::new();
    for (label, value) in RISK_SUMMARY {
        spans.push(Span::styled(format!("{label} "), theme::muted()));
        spans.push(Span::styled(format!("{value}  "), theme::accent()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

/// A rise in unemployment reads as negative, a rise elsewhere as positive.
fn figure(value: f64, inverted: bool) -> Cell<'static> {
    let signed = if inverted { -value } else { value };
    Cell::from(Span::styled(
        format!("{value:.1}"),
        Style::default().fg(theme::change_color(signed)),
    ))
}
