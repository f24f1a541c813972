//! Lifespan expiry

use crate::ecs::components::LifeSpan;
use crate::ecs::{EntityHandle, EntityManager};

/// Destroys entities whose [`LifeSpan`] has run out
#[derive(Debug, Clone, Copy, Default)]
pub struct LifespanSystem;

impl LifespanSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Destroy every expired entity, returning the ones destroyed this call
    pub fn run(&self, entities: &mut EntityManager, current_frame: u64) -> Vec<EntityHandle> {
        let expired: Vec<_> = entities
            .query::<LifeSpan>()
            .into_iter()
            .filter(|&e| entities.get::<LifeSpan>(e).is_some_and(|ls| ls.is_expired(current_frame)))
            .collect();

        for &entity in &expired {
            entities.destroy(entity);
        }
        expired
    }
}
