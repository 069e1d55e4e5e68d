//! Entities
//!
//! Every simulated object (player, cloud platform, collectible point, end
//! screen) is an `Entity`. They all share one data layout; what an entity
//! does during `update` is decided by its `EntityKind`.
//!
//! Only the player integrates physics. Everything else is immovable and its
//! update just refreshes the model matrix used for drawing.

use macroquad::math::{Mat4, Vec2, Vec3};
use crate::assets::TextureId;
use super::collision::{self, Aabb, Axis, Side};
use super::event::{Events, PointCollectedEvent};

/// Role of an entity in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    /// Solid, immovable; the player stands on these
    #[default]
    Platform,
    Player,
    /// One-shot collectible
    Point,
    /// Full-screen end-of-game image
    Scene,
    /// Reserved, no behaviour yet
    Enemy,
    /// Reserved, no behaviour yet
    Trap,
}

impl EntityKind {
    /// Does this kind stop the player?
    pub fn is_solid(self) -> bool {
        matches!(self, EntityKind::Platform)
    }
}

/// Directional contacts from the most recent update.
/// Reset at the start of every player update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    #[cfg(test)]
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    fn set(&mut self, side: Side) {
        match side {
            Side::Top => self.top = true,
            Side::Bottom => self.bottom = true,
            Side::Left => self.left = true,
            Side::Right => self.right = true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    kind: EntityKind,
    active: bool,

    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,

    speed: f32,
    /// Direction requested by input, zeroed every frame
    movement: Vec3,

    /// Full extents of the bounding box
    width: f32,
    height: f32,

    model_matrix: Mat4,

    pub is_jumping: bool,
    pub jump_power: f32,

    pub collisions: CollisionFlags,

    pub texture: TextureId,
}

impl Entity {
    pub fn new(kind: EntityKind, texture: TextureId) -> Self {
        Self {
            kind,
            active: true,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            speed: 0.0,
            movement: Vec3::ZERO,
            width: 1.0,
            height: 1.0,
            model_matrix: Mat4::IDENTITY,
            is_jumping: false,
            jump_power: 0.0,
            collisions: CollisionFlags::default(),
            texture,
        }
    }

    // =========================================================================
    // Builders (used while constructing the level)
    // =========================================================================

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.set_position(Vec3::new(x, y, 0.0));
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.set_width(width);
        self.set_height(height);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        debug_assert!(position.is_finite(), "non-finite position {:?}", position);
        self.position = position;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        debug_assert!(velocity.is_finite(), "non-finite velocity {:?}", velocity);
        self.velocity = velocity;
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn movement(&self) -> Vec3 {
        self.movement
    }

    pub fn set_movement(&mut self, movement: Vec3) {
        self.movement = movement;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Non-positive or non-finite widths are rejected and the old value kept
    pub fn set_width(&mut self, width: f32) {
        debug_assert!(width.is_finite() && width > 0.0, "invalid width {}", width);
        if width.is_finite() && width > 0.0 {
            self.width = width;
        }
    }

    pub fn set_height(&mut self, height: f32) {
        debug_assert!(height.is_finite() && height > 0.0, "invalid height {}", height);
        if height.is_finite() && height > 0.0 {
            self.height = height;
        }
    }

    /// Translation * scale, refreshed by `update`
    pub fn model_matrix(&self) -> &Mat4 {
        &self.model_matrix
    }

    /// Bounding box in world space
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(self.position.x, self.position.y),
            self.width,
            self.height,
        )
    }

    /// Request a jump. Only honoured while standing on something.
    pub fn jump(&mut self) -> bool {
        if self.collisions.bottom {
            self.is_jumping = true;
        }
        self.is_jumping
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Advance this entity by one fixed step.
    ///
    /// `collidables` is every entity the player can touch; points found in it
    /// are deactivated on contact and reported through `events`.
    pub fn update(&mut self, delta_time: f32, collidables: &mut [Entity], events: &mut Events) {
        if self.kind == EntityKind::Player {
            self.integrate(delta_time, collidables, events);
        }
        self.refresh_model_matrix();
    }

    fn integrate(&mut self, delta_time: f32, collidables: &mut [Entity], events: &mut Events) {
        self.collisions = CollisionFlags::default();

        // Horizontal speed comes straight from input; vertical input replaces gravity
        self.velocity.x = self.movement.x * self.speed;
        if self.movement.y != 0.0 {
            self.velocity.y = self.movement.y * self.speed;
        } else {
            self.velocity.y += self.acceleration.y * delta_time;
        }

        if self.is_jumping {
            self.is_jumping = false;
            self.velocity.y = self.jump_power;
        }

        for axis in Axis::ORDER {
            let step = axis.of(self.velocity) * delta_time;
            *axis.of_mut(&mut self.position) += step;
            self.resolve_collisions(axis, collidables, events);
        }

        debug_assert!(self.position.is_finite() && self.velocity.is_finite());
    }

    fn resolve_collisions(&mut self, axis: Axis, collidables: &mut [Entity], events: &mut Events) {
        for (index, other) in collidables.iter_mut().enumerate() {
            if !other.active {
                continue;
            }

            match other.kind {
                EntityKind::Point => {
                    if self.aabb().overlaps(&other.aabb()) {
                        other.deactivate();
                        events.point_collected.send(PointCollectedEvent {
                            index,
                            position: other.position,
                        });
                    }
                }
                kind if kind.is_solid() => {
                    let velocity = axis.of(self.velocity);
                    if let Some(contact) =
                        collision::resolve_axis(&self.aabb(), velocity, &other.aabb(), axis)
                    {
                        *axis.of_mut(&mut self.position) += contact.correction;
                        *axis.of_mut(&mut self.velocity) = 0.0;
                        self.collisions.set(contact.side);
                    }
                }
                _ => {}
            }
        }
    }

    fn refresh_model_matrix(&mut self) {
        self.model_matrix = Mat4::from_translation(self.position)
            * Mat4::from_scale(Vec3::new(self.width, self.height, 1.0));
    }
}
