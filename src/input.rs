//! Terminal events → game signals.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

use crate::display::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Pointer now over this field-space x.
    PointerMoved(i32),
    /// Click, Space or Enter.
    Activate,
    Quit,
}

/// Translate one crossterm event. Events the game has no use for map to `None`.
pub fn translate(event: &Event, viewport: &Viewport) -> Option<Signal> {
    match event {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(Signal::PointerMoved(viewport.field_x(mouse.column)))
            }
            MouseEventKind::Down(MouseButton::Left) => Some(Signal::Activate),
            _ => None,
        },
        Event::Key(key) => translate_key(key),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Signal> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Signal::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Signal::Quit),
        // Repeats would restart a round the instant it ends.
        KeyCode::Char(' ') | KeyCode::Enter if key.kind == KeyEventKind::Press => Some(Signal::Activate),
        _ => None,
    }
}
