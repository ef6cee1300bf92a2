//! Keyboard input dispatch — overlays → arrange mode → normal keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use marketdash_core::layout::Direction;
use marketdash_core::{KeyValueStore, TimeWindow};

use crate::app::{AppState, Overlay};

pub fn handle_key<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Keys shared by both modes.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Mode-specific keys.
    if app.arranging {
        handle_arrange_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
}

fn handle_normal_key<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_cursor_instrument(),
        KeyCode::Char('x') | KeyCode::Delete => app.remove_cursor_ticker(),
        KeyCode::Char('c') => app.clear_selection(),
        KeyCode::Char('m') => app.toggle_mode(),
        KeyCode::Char(']') => {
            let window = app.ctx.selection.window().next();
            app.set_window(window);
        }
        KeyCode::Char('[') => {
            let window = app.ctx.selection.window().prev();
            app.set_window(window);
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            app.set_window(TimeWindow::ALL[index]);
        }
        KeyCode::Char('a') => {
            app.arranging = true;
            app.set_status(format!(
                "Arranging {}: hjkl move, HJKL resize, Esc done",
                app.focus.label()
            ));
        }
        KeyCode::Char('R') => app.reset_layout(),
        _ => {}
    }
}

/// Each key here is one completed gesture and is saved immediately.
fn handle_arrange_key<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('a') => {
            app.arranging = false;
            app.set_status("Arrange mode off");
        }
        KeyCode::Char('h') | KeyCode::Left => app.move_focused(Direction::Left),
        KeyCode::Char('l') | KeyCode::Right => app.move_focused(Direction::Right),
        KeyCode::Char('k') | KeyCode::Up => app.move_focused(Direction::Up),
        KeyCode::Char('j') | KeyCode::Down => app.move_focused(Direction::Down),
        KeyCode::Char('H') => app.resize_focused(-1, 0),
        KeyCode::Char('L') => app.resize_focused(1, 0),
        KeyCode::Char('J') => app.resize_focused(0, 1),
        KeyCode::Char('K') => app.resize_focused(0, -1),
        KeyCode::Char('R') => app.reset_layout(),
        _ => {}
    }
}
