//! Sound playback
//!
//! Starts unplayed [`Sound`] components on the audio backend and detaches
//! one-shot sounds once the backend reports them finished.

use crate::assets::AssetManager;
use crate::backend::AudioBackend;
use crate::ecs::components::Sound;
use crate::ecs::EntityManager;

/// Sound playback system
#[derive(Debug, Clone, Copy)]
pub struct SoundSystem {
    volume_scale: f32,
}

impl SoundSystem {
    /// Create the system; `volume_scale` multiplies every component volume
    pub fn new(volume_scale: f32) -> Self {
        Self { volume_scale }
    }

    /// Run one frame
    pub fn run(&self, entities: &mut EntityManager, assets: &AssetManager, audio: &mut dyn AudioBackend) {
        for entity in entities.query::<Sound>() {
            let Some(sound) = entities.get_mut::<Sound>(entity) else {
                continue;
            };

            if !sound.played {
                sound.played = true;
                let Some(def) = assets.sound(sound.handle) else {
                    log::warn!("Entity {} references an unregistered sound", entity.id());
                    entities.remove::<Sound>(entity);
                    continue;
                };

                match audio.play(def, sound.volume * self.volume_scale, sound.looped) {
                    Ok(playback) => sound.playback = Some(playback),
                    Err(e) => {
                        log::warn!("Could not play sound {}: {}", def.name, e);
                        entities.remove::<Sound>(entity);
                        continue;
                    }
                }
            }

            let finished = sound.playback.map_or(true, |id| !audio.is_playing(id));
            if !sound.looped && finished {
                entities.remove::<Sound>(entity);
            }
        }
    }
}

impl Default for SoundSystem {
    fn default() -> Self {
        Self::new(1.0)
    }
}
