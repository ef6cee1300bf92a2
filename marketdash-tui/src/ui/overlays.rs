//! Help overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 90, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys ")
        .title_style(theme::accent_bold());

    let mut lines = Vec::new();
    section(&mut lines, "Navigation");
    key(&mut lines, "Tab / Shift+Tab", "Focus next / previous panel");
    key(&mut lines, "j / k", "Move the cursor");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Comparison");
    key(&mut lines, "Space", "Add or remove the instrument under the cursor");
    key(&mut lines, "x", "Remove the ticker under the cursor (chart panel)");
    key(&mut lines, "c", "Clear all tickers");
    key(&mut lines, "m", "Toggle absolute / relative");
    key(&mut lines, "[ / ]", "Previous / next window");
    key(&mut lines, "1-6", "1D 1W 1M 1Y 5Y MAX");
    lines.push(Line::from(""));

    section(&mut lines, "Arrange mode");
    key(&mut lines, "a", "Enter / leave arrange mode");
    key(&mut lines, "h / j / k / l", "Move the focused panel");
    key(&mut lines, "H / L", "Narrower / wider");
    key(&mut lines, "J / K", "Taller / shorter");
    key(&mut lines, "R", "Reset the layout to default");
    key(&mut lines, "Esc", "Leave arrange mode");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>16}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
