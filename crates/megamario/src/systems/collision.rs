//! Collision detection and resolution
//!
//! Screen space has +y pointing down: a tile above the player has a
//! smaller y than the player.

use mario_engine::ecs::components::{BoundingBox, Gravity, Input, Jump, Transform};
use mario_engine::ecs::{EntityHandle, EntityManager};
use mario_engine::foundation::math::Vec2;
use mario_engine::physics::{current_overlap, is_colliding, previous_overlap};

/// Axis along which an overlap is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Push horizontally
    X,
    /// Push vertically
    Y,
}

/// Pick the resolution axis from the current and previous overlaps
///
/// If the boxes already overlapped on one axis last frame, the contact came
/// in along the other one. Otherwise (diagonal entry) the shallower overlap
/// wins.
pub fn resolution_axis(current: Vec2, previous: Vec2) -> Axis {
    if previous.x <= 0.0 && previous.y > 0.0 {
        Axis::X
    } else if previous.y <= 0.0 && previous.x > 0.0 {
        Axis::Y
    } else if current.x < current.y {
        Axis::X
    } else {
        Axis::Y
    }
}

/// A bullet and the tiles it touches this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletHit {
    /// The bullet
    pub bullet: EntityHandle,
    /// Every tile it overlaps
    pub tiles: Vec<EntityHandle>,
}

/// Find bullets overlapping solid tiles
pub fn bullet_tile_hits(entities: &EntityManager) -> Vec<BulletHit> {
    let tiles = entities.query_tagged::<BoundingBox>("tile");
    entities
        .query_tagged::<BoundingBox>("bullet")
        .into_iter()
        .filter_map(|bullet| {
            let hit: Vec<_> = tiles
                .iter()
                .copied()
                .filter(|&tile| current_overlap(entities, bullet, tile).is_some_and(is_colliding))
                .collect();
            (!hit.is_empty()).then_some(BulletHit { bullet, tiles: hit })
        })
        .collect()
}

/// Push the player out of every tile it overlaps
///
/// Landing on a tile re-arms the jump, zeroes gravity and vertical speed.
/// Returns the tiles the player hit from below, in order.
pub fn resolve_player_tiles(entities: &mut EntityManager, player: EntityHandle) -> Vec<EntityHandle> {
    let mut bumped = Vec::new();
    if !entities.is_alive(player) {
        return bumped;
    }

    for tile in entities.query_tagged::<BoundingBox>("tile") {
        let (Some(overlap), Some(previous)) = (
            current_overlap(entities, player, tile),
            previous_overlap(entities, player, tile),
        ) else {
            continue;
        };
        if !is_colliding(overlap) {
            continue;
        }

        let Some(tile_pos) = entities.get::<Transform>(tile).map(|t| t.pos) else {
            continue;
        };
        let Some(transform) = entities.get_mut::<Transform>(player) else {
            continue;
        };
        let delta = transform.pos - tile_pos;

        match resolution_axis(overlap, previous) {
            Axis::X if delta.x > 0.0 => transform.pos.x += overlap.x,
            Axis::X => transform.pos.x -= overlap.x,
            Axis::Y if delta.y > 0.0 => {
                transform.pos.y += overlap.y;
                transform.velocity.y = 0.0;
                bumped.push(tile);
            }
            Axis::Y => {
                transform.pos.y -= overlap.y;
                transform.velocity.y = 0.0;
                land(entities, player);
            }
        }
    }
    bumped
}

fn land(entities: &mut EntityManager, player: EntityHandle) {
    if let Some(input) = entities.get_mut::<Input>(player) {
        input.can_jump = true;
    }
    if let Some(gravity) = entities.get_mut::<Gravity>(player) {
        gravity.gravity = 0.0;
    }
    if let Some(jump) = entities.get_mut::<Jump>(player) {
        jump.jumping = false;
    }
}

/// Keep the player from walking off the left edge of the level
pub fn clamp_to_left_edge(entities: &mut EntityManager, player: EntityHandle) {
    let Some(half_width) = entities.get::<BoundingBox>(player).map(|b| b.half_size.x) else {
        return;
    };
    if let Some(transform) = entities.get_mut::<Transform>(player) {
        transform.pos.x = transform.pos.x.max(half_width);
    }
}
