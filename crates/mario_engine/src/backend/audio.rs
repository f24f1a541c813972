//! Audio backend abstraction
//!
//! Single-threaded: the game loop calls into the backend directly.

use super::BackendResult;
use crate::assets::SoundDef;

/// Identifies one started playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackId(pub u64);

/// Audio backend trait for platform abstraction
pub trait AudioBackend {
    /// Start playing a sound; volume is 0-100
    fn play(&mut self, sound: &SoundDef, volume: f32, looped: bool) -> BackendResult<PlaybackId>;

    /// Whether a playback is still running
    fn is_playing(&self, id: PlaybackId) -> bool;

    /// Stop a playback
    fn stop(&mut self, id: PlaybackId);

    /// Stop every playback
    fn stop_all(&mut self);

    /// Per-frame housekeeping (cleanup finished sounds, etc.)
    fn update(&mut self);
}
