use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::input::{InputEvent, Key};

/// Approximate glyph width in pixels, used to express mouse drags as swipes.
pub const COLUMN_PIXELS: f32 = 8.0;

/// Approximate glyph height in pixels.
pub const ROW_PIXELS: f32 = 16.0;

/// Waits up to `timeout` for the next relevant terminal event.
///
/// Events the game has no use for (resizes, key releases, mouse moves)
/// come back as `Ok(None)`.
pub fn poll_event(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    Ok(match event::read()? {
        Event::Key(key) => translate_key(key).map(InputEvent::Key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    })
}

/// Maps a crossterm key press to a backend-independent key.
#[must_use]
pub fn translate_key(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Key::Interrupt);
    }

    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Enter => Some(Key::Enter),
        _ => None,
    }
}

/// Left-button press starts a touch, release ends it.
#[must_use]
pub fn translate_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    let x = f32::from(mouse.column) * COLUMN_PIXELS;
    let y = f32::from(mouse.row) * ROW_PIXELS;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::TouchStart { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::TouchEnd { x, y }),
        _ => None,
    }
}
