//! Player control
//!
//! Turns the player's [`Input`] flags into velocity, facing and jump state.
//! Runs before the generic movement integration.

use mario_engine::config::PlayerConfig;
use mario_engine::ecs::components::{Gravity, Input, Jump, Transform};
use mario_engine::ecs::{EntityHandle, EntityManager};

/// What the scene has to follow up on after the control step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlOutcome {
    /// The player took off this frame
    pub jumped: bool,
    /// The player fired this frame
    pub fired: bool,
}

/// Apply held input to the player
///
/// Horizontal speed is reset each frame and gravity restored, so landing
/// (which zeroes gravity) only lasts until the next frame.
pub fn apply_player_input(
    entities: &mut EntityManager,
    player: EntityHandle,
    tuning: &PlayerConfig,
    current_frame: u64,
) -> ControlOutcome {
    let mut outcome = ControlOutcome::default();
    if !entities.is_alive(player) {
        return outcome;
    }

    let (Some(mut input), Some(mut transform), Some(mut jump)) = (
        entities.get::<Input>(player).copied(),
        entities.get::<Transform>(player).copied(),
        entities.get::<Jump>(player).copied(),
    ) else {
        return outcome;
    };

    transform.velocity.x = 0.0;
    if let Some(gravity) = entities.get_mut::<Gravity>(player) {
        gravity.gravity = tuning.gravity;
    }

    if input.left {
        transform.velocity.x -= tuning.speed;
        transform.scale.x = -1.0;
    }
    if input.right {
        transform.velocity.x += tuning.speed;
        transform.scale.x = 1.0;
    }

    if input.up {
        if input.can_jump {
            transform.velocity.y = -jump.initial_strength;
            input.can_jump = false;
            jump.start(current_frame);
            outcome.jumped = true;
        } else if jump.is_boosting(current_frame) {
            transform.velocity.y -= jump.frame_strength;
        }
    }

    if input.shoot && input.can_shoot {
        input.can_shoot = false;
        outcome.fired = true;
    }

    entities.add(player, input);
    entities.add(player, transform);
    entities.add(player, jump);
    outcome
}
