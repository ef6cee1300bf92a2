//! Macro news feed.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

use marketdash_core::{KeyValueStore, PanelId};

use crate::app::AppState;
use crate::sample_data::NEWS;
use crate::theme;

pub fn render<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &AppState<S>) {
    let items: Vec<ListItem> = NEWS
        .iter()
        .map(|item| {
            let text = Text::from(vec![
                Line::from(vec![
                    Span::styled(format!("[{}] ", item.topic.label()), theme::neutral()),
                    Span::styled(item.title, theme::text()),
                ]),
                Line::from(Span::styled(
                    format!("      {} · {} · {}", item.source, item.age, item.summary),
                    theme::muted(),
                )),
            ]);
            ListItem::new(text)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if app.focus == PanelId::News {
        state.select(Some(app.cursor(PanelId::News)));
    }
    f.render_stateful_widget(list, area, &mut state);
}
