//! Player animation state machine

use mario_engine::ecs::components::{Input, Jump, State, Transform};
use mario_engine::ecs::{EntityHandle, EntityManager};

const EPSILON: f32 = 0.1;

/// Animation shown in a player state
pub fn animation_for_state(state: &str) -> &'static str {
    match state {
        "idle_shoot" => "IdleShoot",
        "run" => "Run",
        "run_shoot" => "RunShoot",
        "air" => "Air",
        "air_shoot" => "AirShoot",
        _ => "Idle",
    }
}

fn classify(transform: &Transform, input: &Input, jump: &Jump) -> &'static str {
    let just_jumped = input.up && input.can_jump;
    let in_air = transform.velocity.y.abs() > EPSILON || !input.can_jump || just_jumped || jump.jumping;
    let moving = transform.velocity.x.abs() > EPSILON;

    match (in_air, moving, input.shoot) {
        (true, _, true) => "air_shoot",
        (true, _, false) => "air",
        (false, true, true) => "run_shoot",
        (false, true, false) => "run",
        (false, false, true) => "idle_shoot",
        (false, false, false) => "idle",
    }
}

/// Update the player's [`State`] from its motion and input
///
/// Returns the animation to switch to when the state changed this frame.
pub fn update_player_state(entities: &mut EntityManager, player: EntityHandle) -> Option<&'static str> {
    if !entities.is_alive(player) {
        return None;
    }

    let next = classify(
        entities.get::<Transform>(player)?,
        entities.get::<Input>(player)?,
        entities.get::<Jump>(player)?,
    );
    let state = entities.get_mut::<State>(player)?;
    state.transition_to(next);
    state.change_animation.then(|| animation_for_state(&state.state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mario_engine::foundation::math::Vec2;

    fn spawn_player(entities: &mut EntityManager) -> EntityHandle {
        let player = entities.add_entity("player");
        entities.add(player, Transform::new(Vec2::zeros()));
        entities.add(player, Input::new());
        entities.add(player, Jump::new(12.0, 15, 1.0));
        entities.add(player, State::new("idle"));
        entities.update();
        player
    }

    #[test]
    fn test_state_transitions() {
        let mut entities = EntityManager::new();
        let player = spawn_player(&mut entities);

        assert_eq!(update_player_state(&mut entities, player), None);

        entities.get_mut::<Transform>(player).unwrap().velocity.x = 5.0;
        assert_eq!(update_player_state(&mut entities, player), Some("Run"));
        assert_eq!(update_player_state(&mut entities, player), None);

        entities.get_mut::<Input>(player).unwrap().shoot = true;
        assert_eq!(update_player_state(&mut entities, player), Some("RunShoot"));

        entities.get_mut::<Input>(player).unwrap().can_jump = false;
        assert_eq!(update_player_state(&mut entities, player), Some("AirShoot"));
        assert_eq!(entities.get::<State>(player).unwrap().previous_state, "run_shoot");
    }

    #[test]
    fn test_unknown_state_maps_to_idle() {
        assert_eq!(animation_for_state("swimming"), "Idle");
        assert_eq!(animation_for_state("air"), "Air");
    }
}
