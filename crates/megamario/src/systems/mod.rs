//! Gameplay systems of the play scene
//!
//! These operate on the player and the level entities directly. Anything
//! that needs assets or audio (sounds, new animations, spawned entities) is
//! reported back to the scene instead of done here.

pub mod controls;
pub mod collision;
pub mod player_state;

pub use controls::{apply_player_input, ControlOutcome};
pub use collision::{bullet_tile_hits, clamp_to_left_edge, resolve_player_tiles, resolution_axis, Axis, BulletHit};
pub use player_state::{animation_for_state, update_player_state};
