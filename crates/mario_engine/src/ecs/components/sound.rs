//! Sound component

use crate::assets::SoundHandle;
use crate::backend::PlaybackId;

/// Request to play a shared sound buffer for this entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sound {
    /// Shared sound buffer
    pub handle: SoundHandle,

    /// Restart when finished
    pub looped: bool,

    /// Playback volume (0-100)
    pub volume: f32,

    /// Playback has been started
    pub played: bool,

    /// Backend playback started for this component
    pub playback: Option<PlaybackId>,
}

impl Sound {
    /// Create an unplayed sound
    pub fn new(handle: SoundHandle, looped: bool, volume: f32) -> Self {
        Self {
            handle,
            looped,
            volume,
            played: false,
            playback: None,
        }
    }
}
