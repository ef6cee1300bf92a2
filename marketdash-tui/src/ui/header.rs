//! Top header — title, window, chart mode, breakpoint.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use marketdash_core::{KeyValueStore, TimeWindow};

use crate::app::AppState;
use crate::theme;

pub fn render<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &AppState<S>) {
    let selection = &app.ctx.selection;
    let mut spans = vec![
        Span::styled(" MARKETDASH ", theme::accent_bold()),
        Span::raw(" "),
    ];

    for window in TimeWindow::ALL {
        let style = if window == selection.window() {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {} ", window.label()), style));
    }

    spans.push(Span::styled(" │ ", theme::muted()));
    spans.push(Span::styled(selection.mode().label(), theme::accent()));
    spans.push(Span::styled(" │ ", theme::muted()));
    spans.push(Span::styled(
        format!("{} selected", selection.len()),
        theme::text(),
    ));
    spans.push(Span::styled(" │ ", theme::muted()));
    spans.push(Span::styled(app.breakpoint().label(), theme::muted()));

    if app.arranging {
        spans.push(Span::styled(" │ ", theme::muted()));
        spans.push(Span::styled("ARRANGE", theme::warning()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
