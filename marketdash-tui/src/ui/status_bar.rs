//! Bottom status bar — key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use marketdash_core::KeyValueStore;

use crate::app::{AppState, StatusLevel};
use crate::theme;

const NORMAL_HINTS: &str = " Tab:focus Space:select m:mode [/]:window a:arrange ?:help q:quit";
const ARRANGE_HINTS: &str = " hjkl:move HJKL:resize Tab:focus Esc:done";

pub fn render<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &AppState<S>) {
    let mut spans: Vec<Span> = Vec::new();

    let hints = if app.arranging {
        ARRANGE_HINTS
    } else {
        NORMAL_HINTS
    };
    spans.push(Span::styled(hints, theme::muted()));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
