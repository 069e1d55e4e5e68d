//! Cloudhop: a tiny 2D platformer
//!
//! An eagle drops onto a row of clouds. Arrow keys steer it (up/down
//! override gravity), there is a dove to pick up, and win/lose screens
//! that the game state can switch on. Q or Escape quits.
//!
//! Frame structure: poll input, run zero or more fixed 60 Hz physics
//! steps for the elapsed wall time, draw the latest state.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod game;
mod input;

use std::path::Path;
use macroquad::logging::{error, info};
use macroquad::prelude::*;
use assets::{AssetError, TextureStore};
use config::{AssetPaths, GameConfig, CONFIG_FILE};
use game::{draw_game, FixedTimestep, LevelTextures};
use input::InputState;

/// Window settings only; a broken file is reported once, from `main`
fn window_conf() -> Conf {
    let config = GameConfig::load(Path::new(CONFIG_FILE)).unwrap_or_default();
    Conf {
        window_title: format!("{} v{}", config.window.title, VERSION),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Load every sprite the level needs
async fn load_level_textures(
    store: &mut TextureStore,
    paths: &AssetPaths,
) -> Result<LevelTextures, AssetError> {
    Ok(LevelTextures {
        platform: store.load(&paths.platform).await?,
        point: store.load(&paths.point).await?,
        player: store.load(&paths.player).await?,
        win: store.load(&paths.win).await?,
        lose: store.load(&paths.lose).await?,
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let (config, source) = GameConfig::load_or_default(Path::new(CONFIG_FILE));
    info!(
        "=== Cloudhop v{} === config: {} ({}x{})",
        VERSION,
        source,
        config.window.width,
        config.window.height
    );

    // Missing or broken sprites are unrecoverable: no fallback texture
    let mut textures = TextureStore::new();
    let level_textures = match load_level_textures(&mut textures, &config.assets).await {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Unable to load image, make sure the path is correct: {}", e);
            std::process::exit(1);
        }
    };

    let mut state = game::level::build(&level_textures, &config.physics);
    let input = InputState::new();
    let mut driver = FixedTimestep::starting_at(get_time());
    let background = Color::from(config.window.background);

    loop {
        let frame = input.poll();
        if frame.quit {
            break;
        }
        state.set_player_movement(frame.movement);

        driver.advance(get_time(), |dt| state.step(dt));

        draw_game(&state, &textures, background);
        next_frame().await;
    }

    info!(
        "Shutting down: {:?}, {} point(s) collected, {} textures released",
        state.phase(),
        state.points_collected(),
        textures.len()
    );
}
