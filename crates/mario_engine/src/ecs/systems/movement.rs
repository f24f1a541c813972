//! Movement integration
//!
//! Applies gravity to entities carrying [`Gravity`] and moves every
//! [`Transform`] by its velocity.

use crate::ecs::components::{Gravity, Transform};
use crate::ecs::EntityManager;

/// Default cap on falling speed, in pixels per frame
pub const DEFAULT_MAX_FALL_SPEED: f32 = 20.0;

/// Velocity integration system
#[derive(Debug, Clone, Copy)]
pub struct MovementSystem {
    max_fall_speed: f32,
}

impl MovementSystem {
    /// Create a movement system with a falling speed cap
    pub fn new(max_fall_speed: f32) -> Self {
        Self { max_fall_speed }
    }

    /// Falling speed cap
    pub fn max_fall_speed(&self) -> f32 {
        self.max_fall_speed
    }

    /// Integrate one frame
    pub fn run(&self, entities: &mut EntityManager) {
        for entity in entities.query::<Transform>() {
            let gravity = entities.get::<Gravity>(entity).map(|g| g.gravity);
            if let Some(transform) = entities.get_mut::<Transform>(entity) {
                if let Some(gravity) = gravity {
                    transform.velocity.y = (transform.velocity.y + gravity).min(self.max_fall_speed);
                }
                transform.step();
            }
        }
    }
}

impl Default for MovementSystem {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FALL_SPEED)
    }
}
