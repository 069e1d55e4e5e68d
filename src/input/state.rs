//! Input state management
//!
//! Polls the keyboard (macroquad) once per frame and reduces it to a
//! `FrameInput`. Opposite directions do not cancel: left beats right and up
//! beats down, and a diagonal is scaled back to unit length.

use macroquad::prelude::*;
use super::Action;

/// What the game loop needs from one frame of input
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Direction intent, length <= 1
    pub movement: Vec2,
    pub quit: bool,
}

/// Which movement actions are held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldDirections {
    /// Reduce held keys to a movement intent
    pub fn intent(&self) -> Vec2 {
        let mut result = Vec2::ZERO;

        if self.left {
            result.x = -1.0;
        } else if self.right {
            result.x = 1.0;
        }

        if self.up {
            result.y = 1.0;
        } else if self.down {
            result.y = -1.0;
        }

        clamp_intent(result)
    }
}

/// Normalize if > 1 (diagonal keyboard input)
pub fn clamp_intent(intent: Vec2) -> Vec2 {
    if intent.length() > 1.0 {
        intent.normalize()
    } else {
        intent
    }
}

/// Keyboard poller
pub struct InputState;

impl InputState {
    /// Take over the window close button so the loop can shut down itself
    pub fn new() -> Self {
        prevent_quit();
        Self
    }

    /// Call once per frame before stepping the simulation
    pub fn poll(&self) -> FrameInput {
        let held = HeldDirections {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            up: self.action_down(Action::MoveUp),
            down: self.action_down(Action::MoveDown),
        };

        FrameInput {
            movement: held.intent(),
            quit: self.action_pressed(Action::Quit) || is_quit_requested(),
        }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        action.keys().iter().any(|key| is_key_down(*key))
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        action.keys().iter().any(|key| is_key_pressed(*key))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
