//! Level layout
//!
//! The one hardcoded level: a staircase of clouds across the bottom of the
//! screen, two floating clouds, a dove to collect, and the eagle dropping
//! in from the top right.

use macroquad::logging::info;
use macroquad::math::Vec3;
use crate::assets::TextureId;
use crate::config::PhysicsConfig;
use super::entity::{Entity, EntityKind};
use super::state::GameState;

/// Entities in the level list (platforms + the point in the last slot)
pub const PLATFORM_COUNT: usize = 13;

pub const PLATFORM_WIDTH: f32 = 0.8;
pub const PLATFORM_HEIGHT: f32 = 0.7;
pub const PLAYER_SIZE: f32 = 0.9;
pub const POINT_WIDTH: f32 = 0.4;

/// Textures used by the level
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelTextures {
    pub player: TextureId,
    pub platform: TextureId,
    pub point: TextureId,
    pub win: TextureId,
    pub lose: TextureId,
}

/// Height of the bottom-row cloud in column `i` (x = i - 5)
fn row_height(i: usize) -> f32 {
    match i {
        0..=1 => -1.0,
        2..=3 => -2.0,
        4..=6 => -2.5,
        7 => -2.0,
        _ => -1.0,
    }
}

fn platform(texture: TextureId, x: f32, y: f32) -> Entity {
    Entity::new(EntityKind::Platform, texture)
        .at(x, y)
        .with_size(PLATFORM_WIDTH, PLATFORM_HEIGHT)
}

/// The 13-entry level list: 10 bottom clouds, 2 floating clouds, 1 point
pub fn build_platforms(textures: &LevelTextures) -> Vec<Entity> {
    let mut platforms = Vec::with_capacity(PLATFORM_COUNT);

    for i in 0..PLATFORM_COUNT - 3 {
        platforms.push(platform(textures.platform, i as f32 - 5.0, row_height(i)));
    }

    platforms.push(platform(textures.platform, -0.9, 1.0));
    platforms.push(platform(textures.platform, 0.8, 0.0));

    platforms.push(
        Entity::new(EntityKind::Point, textures.point)
            .at(-1.5, -2.35)
            .with_size(POINT_WIDTH, 1.0),
    );

    debug_assert_eq!(platforms.len(), PLATFORM_COUNT);
    platforms
}

pub fn build_player(texture: TextureId, physics: &PhysicsConfig) -> Entity {
    let (x, y) = physics.player_start;
    Entity::new(EntityKind::Player, texture)
        .at(x, y)
        .with_size(PLAYER_SIZE, PLAYER_SIZE)
        .with_speed(physics.player_speed)
        .with_acceleration(Vec3::new(0.0, physics.gravity, 0.0))
}

/// Win screen in slot 0, lose screen in slot 1, both centred
pub fn build_end_scenes(textures: &LevelTextures) -> [Entity; 2] {
    [
        Entity::new(EntityKind::Scene, textures.win).at(0.0, 0.0),
        Entity::new(EntityKind::Scene, textures.lose).at(0.0, 0.0),
    ]
}

/// Assemble the complete starting state
pub fn build(textures: &LevelTextures, physics: &PhysicsConfig) -> GameState {
    let state = GameState::new(
        build_player(textures.player, physics),
        build_platforms(textures),
        build_end_scenes(textures),
    );
    info!(
        "Level built: {} level entities, {} end scenes, player at ({:.2}, {:.2})",
        state.platforms.len(),
        state.end_scenes.len(),
        state.player.position().x,
        state.player.position().y
    );
    state
}
