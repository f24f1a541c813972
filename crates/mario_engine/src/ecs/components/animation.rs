//! Animation component
//!
//! Holds a non-owning handle to a shared [`AnimationDef`] plus the per-entity
//! playback cursor. The definition (frame count, speed, frame size) lives in
//! the asset manager.

use crate::assets::{AnimationDef, AnimationHandle};

/// Per-entity animation playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Shared definition
    pub handle: AnimationHandle,

    /// Loop forever instead of ending after one cycle
    pub repeat: bool,

    /// Number of game frames since playback started
    pub current_frame: u32,
}

impl Animation {
    /// Start playing `handle` from its first frame
    pub fn new(handle: AnimationHandle, repeat: bool) -> Self {
        Self {
            handle,
            repeat,
            current_frame: 0,
        }
    }

    /// Advance the cursor by one game frame
    pub fn advance(&mut self) {
        self.current_frame = self.current_frame.saturating_add(1);
    }

    /// Restart from the first frame
    pub fn reset(&mut self) {
        self.current_frame = 0;
    }

    /// Index of the sprite frame to draw
    pub fn sprite_frame(&self, def: &AnimationDef) -> u32 {
        (self.current_frame / def.speed) % def.frame_count
    }

    /// Whether one full cycle has been played
    pub fn has_ended(&self, def: &AnimationDef) -> bool {
        self.current_frame >= def.frame_count.saturating_mul(def.speed)
    }
}
