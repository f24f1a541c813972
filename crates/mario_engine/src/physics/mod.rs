//! Collision helpers
//!
//! Box overlaps follow the usual platformer convention: the returned vector
//! holds the overlap along each axis and two boxes collide iff both
//! components are positive. The previous-frame overlap tells the resolver
//! which axis the contact came from.

use crate::ecs::components::{BoundingBox, BoundingConvex, Transform};
use crate::ecs::{EntityHandle, EntityManager};
use crate::foundation::math::{abs_vec, Vec2};

const AXIS_EPSILON: f32 = 1.0e-6;

/// Overlap of two axis-aligned boxes given by centre and half size
pub fn overlap(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, b_half: Vec2) -> Vec2 {
    a_half + b_half - abs_vec(a_pos - b_pos)
}

/// Whether an overlap vector describes a collision
pub fn is_colliding(overlap: Vec2) -> bool {
    overlap.x > 0.0 && overlap.y > 0.0
}

fn box_of(entities: &EntityManager, handle: EntityHandle) -> Option<(&Transform, &BoundingBox)> {
    Some((entities.get::<Transform>(handle)?, entities.get::<BoundingBox>(handle)?))
}

/// Overlap of two entities' bounding boxes at their current positions
///
/// `None` if either entity lacks a `Transform` or a `BoundingBox`.
pub fn current_overlap(entities: &EntityManager, a: EntityHandle, b: EntityHandle) -> Option<Vec2> {
    let (ta, ba) = box_of(entities, a)?;
    let (tb, bb) = box_of(entities, b)?;
    Some(overlap(ta.pos, ba.half_size, tb.pos, bb.half_size))
}

/// Overlap of two entities' bounding boxes at their previous positions
pub fn previous_overlap(entities: &EntityManager, a: EntityHandle, b: EntityHandle) -> Option<Vec2> {
    let (ta, ba) = box_of(entities, a)?;
    let (tb, bb) = box_of(entities, b)?;
    Some(overlap(ta.previous_pos, ba.half_size, tb.previous_pos, bb.half_size))
}

fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    points.iter().fold((f32::MAX, f32::MIN), |(min, max), p| {
        let d = axis.dot(p);
        (min.min(d), max.max(d))
    })
}

fn separates(a: &[Vec2], b: &[Vec2], axis: Vec2) -> bool {
    if axis.magnitude_squared() < AXIS_EPSILON {
        return false;
    }
    let (min_a, max_a) = project(a, axis);
    let (min_b, max_b) = project(b, axis);
    max_a <= min_b || max_b <= min_a
}

fn edge_normals(points: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    points.iter().enumerate().map(move |(i, p)| {
        let edge = points[(i + 1) % points.len()] - p;
        Vec2::new(-edge.y, edge.x)
    })
}

/// Separating-axis test for two convex polygons in world space
///
/// Touching polygons do not overlap. Empty polygons never overlap.
pub fn convex_overlap(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    !edge_normals(a)
        .chain(edge_normals(b))
        .any(|axis| separates(a, b, axis))
}

/// Convex overlap of two entities
///
/// `None` if either entity lacks a `Transform` or a `BoundingConvex`.
pub fn entities_convex_overlap(entities: &EntityManager, a: EntityHandle, b: EntityHandle) -> Option<bool> {
    let points_a = entities
        .get::<BoundingConvex>(a)?
        .world_points(entities.get::<Transform>(a)?.pos);
    let points_b = entities
        .get::<BoundingConvex>(b)?
        .world_points(entities.get::<Transform>(b)?.pos);
    Some(convex_overlap(&points_a, &points_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spawn_box(entities: &mut EntityManager, pos: Vec2, size: Vec2) -> EntityHandle {
        let handle = entities.add_entity("tile");
        entities.add(handle, Transform::new(pos));
        entities.add(handle, BoundingBox::new(size));
        handle
    }

    #[test]
    fn test_box_overlap() {
        let half = Vec2::new(32.0, 32.0);
        let o = overlap(Vec2::new(0.0, 0.0), half, Vec2::new(60.0, 10.0), half);
        assert_relative_eq!(o, Vec2::new(4.0, 54.0));
        assert!(is_colliding(o));

        let touching = overlap(Vec2::new(0.0, 0.0), half, Vec2::new(64.0, 0.0), half);
        assert_relative_eq!(touching.x, 0.0);
        assert!(!is_colliding(touching));
    }

    #[test]
    fn test_entity_overlaps() {
        let mut entities = EntityManager::new();
        let a = spawn_box(&mut entities, Vec2::new(0.0, 0.0), Vec2::new(64.0, 64.0));
        let b = spawn_box(&mut entities, Vec2::new(48.0, 0.0), Vec2::new(64.0, 64.0));
        let bare = entities.add_entity("dec");

        entities.get_mut::<Transform>(b).unwrap().previous_pos = Vec2::new(100.0, 0.0);

        assert_relative_eq!(current_overlap(&entities, a, b).unwrap(), Vec2::new(16.0, 64.0));
        assert_relative_eq!(previous_overlap(&entities, a, b).unwrap(), Vec2::new(-36.0, 64.0));
        assert_eq!(current_overlap(&entities, a, bare), None);
    }

    #[test]
    fn test_convex_overlap() {
        let square = BoundingConvex::from_box(Vec2::new(2.0, 2.0));
        let triangle = [Vec2::new(0.5, 0.5), Vec2::new(3.0, 0.5), Vec2::new(0.5, 3.0)];

        assert!(convex_overlap(&square.world_points(Vec2::zeros()), &triangle));
        assert!(!convex_overlap(&square.world_points(Vec2::new(-5.0, 0.0)), &triangle));
        assert!(!convex_overlap(&square.world_points(Vec2::new(2.0, 0.0)), &square.world_points(Vec2::zeros())));
        assert!(!convex_overlap(&[], &triangle));
    }

    #[test]
    fn test_convex_diagonal_gap() {
        // boxes overlap, triangles separated by the hypotenuse
        let a = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0)];
        let b = [Vec2::new(2.0, 2.0), Vec2::new(0.5, 2.0), Vec2::new(2.0, 0.5)];
        assert!(!convex_overlap(&a, &b));
    }

    #[test]
    fn test_entities_convex_overlap() {
        let mut entities = EntityManager::new();
        let a = entities.add_entity("a");
        entities.add(a, Transform::new(Vec2::zeros()));
        entities.add(a, BoundingConvex::from_box(Vec2::new(4.0, 4.0)));
        let b = entities.add_entity("b");
        entities.add(b, Transform::new(Vec2::new(3.0, 0.0)));
        entities.add(b, BoundingConvex::from_box(Vec2::new(4.0, 4.0)));

        assert_eq!(entities_convex_overlap(&entities, a, b), Some(true));
        entities.remove::<BoundingConvex>(b);
        assert_eq!(entities_convex_overlap(&entities, a, b), None);
    }
}
