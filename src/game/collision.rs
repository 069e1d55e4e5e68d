//! Collision System
//!
//! Axis-aligned bounding boxes and single-axis penetration resolution.
//! Movement is applied one axis at a time and each axis is resolved before
//! the next one moves, so corner contacts are settled vertically first.
//!
//! Boxes that merely share an edge do not overlap: a separation of exactly
//! zero is treated as "not touching".

use macroquad::math::{Vec2, Vec3};

/// Axis being moved and resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Resolution order used by the player update
    pub const ORDER: [Axis; 2] = [Axis::Y, Axis::X];

    /// Read this axis from a vector
    pub fn of(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Mutable access to this axis of a vector
    pub fn of_mut(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }
}

/// Which face of the moving box made contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis-aligned bounding box stored as center + half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    /// Build a box from a center and full width/height
    pub fn from_center_size(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half_extents: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Signed gap between two boxes along each axis.
    /// Negative on both axes means the boxes overlap.
    pub fn separation(&self, other: &Aabb) -> Vec2 {
        let distance = (self.center - other.center).abs();
        distance - (self.half_extents + other.half_extents)
    }

    /// Strict overlap test (edge contact is not an overlap)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = self.separation(other);
        gap.x < 0.0 && gap.y < 0.0
    }
}

/// Result of resolving one axis against one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Signed offset to add to the mover's position on the resolved axis
    pub correction: f32,
    /// Face of the mover that hit the obstacle
    pub side: Side,
}

/// Resolve the overlap between a moving box and a static obstacle along one
/// axis. The direction of travel (`velocity` on that axis) decides which way
/// the mover is pushed out; a stationary mover is left where it is.
pub fn resolve_axis(mover: &Aabb, velocity: f32, obstacle: &Aabb, axis: Axis) -> Option<Contact> {
    if !mover.overlaps(obstacle) {
        return None;
    }

    let gap = mover.separation(obstacle);
    let penetration = match axis {
        Axis::X => gap.x.abs(),
        Axis::Y => gap.y.abs(),
    };

    let (correction, side) = match axis {
        Axis::Y if velocity > 0.0 => (-penetration, Side::Top),
        Axis::Y if velocity < 0.0 => (penetration, Side::Bottom),
        Axis::X if velocity > 0.0 => (-penetration, Side::Right),
        Axis::X if velocity < 0.0 => (penetration, Side::Left),
        _ => return None,
    };

    Some(Contact { correction, side })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(x: f32, y: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(x, y), 1.0, 1.0)
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let a = unit_box(0.0, 0.0);
        let b = unit_box(1.0, 0.0);
        assert!(!a.overlaps(&b));

        let c = unit_box(0.0, 1.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_partial_overlap() {
        let a = unit_box(0.0, 0.0);
        let b = unit_box(0.75, 0.5);
        assert!(a.overlaps(&b));

        let gap = a.separation(&b);
        assert!((gap.x + 0.25).abs() < 1e-6);
        assert!((gap.y + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_falling_onto_box_pushes_up() {
        let mover = unit_box(0.0, 0.75);
        let floor = unit_box(0.0, 0.0);

        let contact = resolve_axis(&mover, -1.0, &floor, Axis::Y).unwrap();
        assert_eq!(contact.side, Side::Bottom);
        assert!((contact.correction - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_rising_into_box_pushes_down() {
        let mover = unit_box(0.0, -0.75);
        let ceiling = unit_box(0.0, 0.0);

        let contact = resolve_axis(&mover, 1.0, &ceiling, Axis::Y).unwrap();
        assert_eq!(contact.side, Side::Top);
        assert!((contact.correction + 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_horizontal_sides() {
        let wall = unit_box(0.0, 0.0);

        let from_left = resolve_axis(&unit_box(-0.9, 0.0), 1.0, &wall, Axis::X).unwrap();
        assert_eq!(from_left.side, Side::Right);
        assert!(from_left.correction < 0.0);

        let from_right = resolve_axis(&unit_box(0.9, 0.0), -1.0, &wall, Axis::X).unwrap();
        assert_eq!(from_right.side, Side::Left);
        assert!(from_right.correction > 0.0);
    }

    #[test]
    fn test_stationary_mover_is_not_corrected() {
        let mover = unit_box(0.0, 0.5);
        let floor = unit_box(0.0, 0.0);
        assert!(resolve_axis(&mover, 0.0, &floor, Axis::Y).is_none());
    }

    #[test]
    fn test_axis_order_is_vertical_first() {
        assert_eq!(Axis::ORDER, [Axis::Y, Axis::X]);
    }
}
