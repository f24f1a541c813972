//! Animation playback

use crate::assets::AssetManager;
use crate::ecs::components::Animation;
use crate::ecs::EntityManager;

/// Advances animation cursors and removes finished one-shot animations
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationSystem;

impl AnimationSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Run one frame; returns how many entities were destroyed
    ///
    /// An entity whose non-repeating animation has played a full cycle is
    /// destroyed; every other animation advances by one frame.
    pub fn run(&self, entities: &mut EntityManager, assets: &AssetManager) -> usize {
        let mut destroyed = 0;
        for entity in entities.query::<Animation>() {
            let Some(anim) = entities.get_mut::<Animation>(entity) else {
                continue;
            };

            let ended = assets.animation(anim.handle).is_some_and(|def| anim.has_ended(def));
            if ended && !anim.repeat {
                entities.destroy(entity);
                destroyed += 1;
            } else {
                anim.advance();
            }
        }
        destroyed
    }
}
