//! Maps terminal input to board gestures.
//!
//! Two sensors feed the same semantic events: mouse press/drag/release, and
//! a keyboard grab mode (space grabs, arrows re-target, space drops, escape
//! cancels).

use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),

        KeyCode::Esc => {
            if app.board().is_dragging() {
                app.cancel_drag();
            }
        }

        KeyCode::Up => app.move_cursor(0, -1),
        KeyCode::Down => app.move_cursor(0, 1),
        KeyCode::Left => app.move_cursor(-1, 0),
        KeyCode::Right => app.move_cursor(1, 0),

        // Grab / drop toggle.
        KeyCode::Char(' ') | KeyCode::Enter => {
            if app.board().is_dragging() {
                let target = app.selected_target();
                app.drop_on(target.as_ref());
            } else if let Some(article_id) = app.selected_article_id() {
                app.begin_drag(article_id);
            }
        }

        KeyCode::Char('x') => {
            if !app.board().is_dragging() {
                app.remove_selected();
            }
        }

        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let target = app.layout().target_at(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(crate::ui::layout::HitTarget::Article { id }) = target {
                app.begin_drag(id);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.board().is_dragging() {
                if let Some(target) = target {
                    app.hover(&target);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.board().is_dragging() {
                app.drop_on(target.as_ref());
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
