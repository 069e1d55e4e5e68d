//! Keyboard input
//!
//! Turns the keyboard into the two things the game loop consumes each
//! frame: a movement intent for the player and a quit request.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
