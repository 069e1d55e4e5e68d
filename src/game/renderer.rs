//! Sprite Renderer
//!
//! Draws every active entity as a textured unit quad transformed by the
//! entity's model matrix, under an orthographic camera that shows
//! x in [-5, 5] and y in [-3.75, 3.75] with y pointing up.

use macroquad::prelude::*;
use crate::assets::TextureStore;
use super::state::GameState;

pub const VIEW_HALF_WIDTH: f32 = 5.0;
pub const VIEW_HALF_HEIGHT: f32 = 3.75;

/// World camera. macroquad's screen camera is y-down, so y is negated.
pub fn world_camera() -> Camera2D {
    Camera2D {
        target: vec2(0.0, 0.0),
        zoom: vec2(1.0 / VIEW_HALF_WIDTH, -1.0 / VIEW_HALF_HEIGHT),
        ..Default::default()
    }
}

/// Draw one frame: player, level, then end screens on top
pub fn draw_game(state: &GameState, textures: &TextureStore, background: Color) {
    clear_background(background);
    set_camera(&world_camera());

    for (model, texture) in visible_sprites(state, textures) {
        draw_sprite(model, texture);
    }

    set_default_camera();
}

/// Model matrix and texture of every active entity, in draw order.
/// Every handle comes from the store, so a missing texture is a bug.
fn visible_sprites<'a>(
    state: &'a GameState,
    textures: &'a TextureStore,
) -> impl Iterator<Item = (&'a Mat4, &'a Texture2D)> {
    state.entities().filter(|e| e.is_active()).filter_map(move |entity| {
        let texture = textures.get(entity.texture);
        debug_assert!(
            texture.is_some(),
            "missing texture {:?} for {:?}",
            entity.texture,
            entity.kind()
        );
        texture.map(|texture| (entity.model_matrix(), texture))
    })
}

fn draw_sprite(model: &Mat4, texture: &Texture2D) {
    unsafe { get_internal_gl().quad_gl.push_model_matrix(*model) };
    draw_texture_ex(
        texture,
        -0.5,
        -0.5,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(1.0, 1.0)),
            // Image rows run top-down, world y runs bottom-up
            flip_y: true,
            ..Default::default()
        },
    );
    unsafe { get_internal_gl().quad_gl.pop_model_matrix() };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use crate::game::level::{self, LevelTextures};

    #[test]
    fn test_camera_is_y_up() {
        let camera = world_camera();
        assert_eq!(camera.zoom, vec2(0.2, -1.0 / 3.75));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "missing texture")]
    fn test_unknown_texture_handle_is_reported() {
        let state = level::build(&LevelTextures::default(), &PhysicsConfig::default());
        let textures = TextureStore::new();
        let _ = visible_sprites(&state, &textures).count();
    }
}
