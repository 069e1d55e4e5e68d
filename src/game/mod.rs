//! Game Core
//!
//! The simulation: entities with AABB physics, the fixed-timestep driver,
//! and the game state that owns the level and decides when the game ends.
//!
//! Key concepts:
//! - Entity: one data layout for player, platforms, points and end screens
//! - Collision: axis-separated AABB resolution, vertical axis first
//! - FixedTimestep: constant 60 Hz steps regardless of frame rate
//! - GameState: sole owner of all entities, PLAYING / WON / LOST
//!
//! Nothing in here touches the window; drawing lives in `renderer`.

pub mod collision;
pub mod entity;
pub mod event;
pub mod level;
pub mod renderer;
pub mod state;
pub mod timestep;

// Re-export main types
pub use level::LevelTextures;
pub use renderer::draw_game;
pub use timestep::FixedTimestep;
