//! Central bank policy rates.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row, Table, TableState};
use ratatui::Frame;

use marketdash_core::{KeyValueStore, PanelId};

use crate::app::AppState;
use crate::sample_data::CENTRAL_BANK_RATES;
use crate::theme;

pub fn render<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &AppState<S>) {
    let header = Row::new(["Country", "Bank", "Rate", "Chg", "Updated"]).style(theme::muted());

    let rows = CENTRAL_BANK_RATES.iter().map(|r| {
        Row::new([
            Cell::from(r.country),
            Cell::from(Span::styled(r.bank, theme::muted())),
            Cell::from(format!("{:.2}", r.rate)),
            Cell::from(Span::styled(
                format!("{:+.2}", r.change),
                Style::default().fg(theme::change_color(r.change)),
            )),
            Cell::from(Span::styled(r.last_update, theme::muted())),
        ])
        .style(theme::text())
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if app.focus == PanelId::CentralBanks {
        state.select(Some(app.cursor(PanelId::CentralBanks)));
    }
    f.render_stateful_widget(table, area, &mut state);
}
