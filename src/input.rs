use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit velocity vector for this heading.
    #[must_use]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

/// Polls the terminal for one pending input event without blocking.
///
/// Returns `Ok(None)` when no relevant key is pending. Key release and
/// repeat events are ignored so held keys do not flood the session.
pub fn poll_input() -> io::Result<Option<GameInput>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}

/// Maps a key code onto a game input event.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Turn(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(GameInput::TogglePause),
        KeyCode::Char('r') => Some(GameInput::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
