//! Event System
//!
//! Things that happen during a simulation step are queued here instead of
//! being handled inline. The entity update only knows that it touched a
//! point; the game state drains the queue afterwards to keep score and log.

use macroquad::math::Vec3;
use super::state::EndScene;

/// A queue for events of a single type.
/// Events are collected during the step and drained by the game state.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
#[derive(Debug, Default)]
pub struct Events {
    /// A point entity was picked up by the player
    pub point_collected: EventQueue<PointCollectedEvent>,

    /// An end scene became active
    pub scene_activated: EventQueue<SceneActivatedEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// A point was collected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCollectedEvent {
    /// Index of the point in the collidable list it was found in
    pub index: usize,
    /// Where the point was (it is inactive from now on)
    pub position: Vec3,
}

/// An end scene was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneActivatedEvent {
    pub scene: EndScene,
}
