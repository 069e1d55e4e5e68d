//! Game State
//!
//! Single owner of every entity in play: the player, the level (platforms
//! plus the collectible point) and the two end-of-game screens. The phase
//! of the game is not stored separately; it is read off which end screen
//! is active, so the two can never disagree.

use macroquad::logging::{debug, info};
use macroquad::math::{Vec2, Vec3};
use super::entity::Entity;
use super::event::{Events, SceneActivatedEvent};

/// The two end-of-game screens, by slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndScene {
    Win,
    Lose,
}

impl EndScene {
    pub fn index(self) -> usize {
        match self {
            EndScene::Win => 0,
            EndScene::Lose => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_over(self) -> bool {
        self != Phase::Playing
    }
}

pub struct GameState {
    pub player: Entity,
    /// Platforms and collectibles the player can touch
    pub platforms: Vec<Entity>,
    /// Index 0 = win screen, index 1 = lose screen
    pub end_scenes: [Entity; 2],

    points_collected: u32,
    events: Events,
}

impl GameState {
    /// Take ownership of the level. End screens start hidden and every
    /// entity's model matrix is computed once so static entities can be
    /// drawn before the first step.
    pub fn new(player: Entity, platforms: Vec<Entity>, end_scenes: [Entity; 2]) -> Self {
        let mut state = Self {
            player,
            platforms,
            end_scenes,
            points_collected: 0,
            events: Events::new(),
        };

        for scene in &mut state.end_scenes {
            scene.deactivate();
        }

        let mut events = Events::new();
        for entity in state
            .platforms
            .iter_mut()
            .chain(state.end_scenes.iter_mut())
        {
            entity.update(0.0, &mut [], &mut events);
        }
        state.player.update(0.0, &mut [], &mut events);

        state
    }

    pub fn phase(&self) -> Phase {
        if self.end_scenes[EndScene::Win.index()].is_active() {
            Phase::Won
        } else if self.end_scenes[EndScene::Lose.index()].is_active() {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }

    pub fn points_collected(&self) -> u32 {
        self.points_collected
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Feed the input intent to the player. Ignored once the game is over.
    pub fn set_player_movement(&mut self, movement: Vec2) -> bool {
        if self.phase().is_over() {
            return false;
        }
        self.player.set_movement(Vec3::new(movement.x, movement.y, 0.0));
        true
    }

    /// Run one fixed simulation step
    pub fn step(&mut self, delta_time: f32) {
        self.player.update(delta_time, &mut self.platforms, &mut self.events);

        for event in self.events.point_collected.drain() {
            self.points_collected += 1;
            info!(
                "Point {} collected at ({:.2}, {:.2}), total {}",
                event.index, event.position.x, event.position.y, self.points_collected
            );
        }
        for event in self.events.scene_activated.drain() {
            debug!("Scene event {:?} consumed", event.scene);
        }
    }

    /// PLAYING -> WON. Returns false if the game was already over.
    pub fn win(&mut self) -> bool {
        self.activate_scene(EndScene::Win)
    }

    /// PLAYING -> LOST. Returns false if the game was already over.
    pub fn lose(&mut self) -> bool {
        self.activate_scene(EndScene::Lose)
    }

    fn activate_scene(&mut self, scene: EndScene) -> bool {
        if self.phase().is_over() {
            return false;
        }

        self.end_scenes[scene.index()].activate();
        self.player.set_movement(Vec3::ZERO);
        self.events.scene_activated.send(SceneActivatedEvent { scene });
        info!("Game over: {:?} screen shown", scene);
        true
    }

    /// Everything in draw order: player, level, end screens
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player)
            .chain(self.platforms.iter())
            .chain(self.end_scenes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TextureId;
    use crate::game::entity::EntityKind;
    use crate::game::timestep::FIXED_TIMESTEP;

    fn small_state() -> GameState {
        let player = Entity::new(EntityKind::Player, TextureId::default())
            .at(0.0, 0.0)
            .with_size(0.9, 0.9)
            .with_speed(1.0)
            .with_acceleration(Vec3::new(0.0, -0.4, 0.0));
        let platforms = vec![
            Entity::new(EntityKind::Platform, TextureId::default())
                .at(3.0, -3.0)
                .with_size(0.8, 0.7),
            Entity::new(EntityKind::Point, TextureId::default())
                .at(0.0, 0.0)
                .with_size(0.4, 1.0),
        ];
        let scenes = [
            Entity::new(EntityKind::Scene, TextureId::default()),
            Entity::new(EntityKind::Scene, TextureId::default()),
        ];
        GameState::new(player, platforms, scenes)
    }

    #[test]
    fn test_starts_playing_with_hidden_scenes() {
        let state = small_state();
        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.end_scenes.iter().all(|s| !s.is_active()));
    }

    #[test]
    fn test_win_is_terminal() {
        let mut state = small_state();

        assert!(state.win());
        assert_eq!(state.phase(), Phase::Won);
        assert!(state.end_scenes[0].is_active());
        assert!(!state.end_scenes[1].is_active());

        // No second transition
        assert!(!state.lose());
        assert!(!state.win());
        assert_eq!(state.phase(), Phase::Won);
        assert!(!state.end_scenes[1].is_active());
    }

    #[test]
    fn test_lose_activates_lose_scene() {
        let mut state = small_state();
        assert!(state.lose());
        assert_eq!(state.phase(), Phase::Lost);
        assert!(state.end_scenes[1].is_active());
        assert!(!state.end_scenes[0].is_active());
    }

    #[test]
    fn test_movement_ignored_after_game_over() {
        let mut state = small_state();
        assert!(state.set_player_movement(Vec2::new(1.0, 0.0)));
        assert_eq!(state.player.movement().x, 1.0);

        state.lose();
        assert_eq!(state.player.movement(), Vec3::ZERO);
        assert!(!state.set_player_movement(Vec2::new(-1.0, 0.0)));
        assert_eq!(state.player.movement(), Vec3::ZERO);
    }

    #[test]
    fn test_step_counts_point_once() {
        let mut state = small_state();

        state.step(FIXED_TIMESTEP);
        assert_eq!(state.points_collected(), 1);
        assert!(!state.platforms[1].is_active());
        assert!(state.events().point_collected.is_empty());

        state.step(FIXED_TIMESTEP);
        assert_eq!(state.points_collected(), 1);
        assert!(!state.platforms[1].is_active());
    }

    #[test]
    fn test_entities_draw_order() {
        let state = small_state();
        let kinds: Vec<EntityKind> = state.entities().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Player,
                EntityKind::Platform,
                EntityKind::Point,
                EntityKind::Scene,
                EntityKind::Scene,
            ]
        );
    }
}
