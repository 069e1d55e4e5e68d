//! Game action definitions

use macroquad::prelude::KeyCode;

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Quit,
}

impl Action {
    /// Keys bound to this action
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::Left],
            Action::MoveRight => &[KeyCode::Right],
            Action::MoveUp => &[KeyCode::Up],
            Action::MoveDown => &[KeyCode::Down],
            Action::Quit => &[KeyCode::Q, KeyCode::Escape],
        }
    }
}
