//! Jump component
//!
//! Models a jump as an initial impulse followed by a per-frame boost that
//! lasts while the jump key is held, up to `max_duration` frames.

/// Non-instantaneous jump impulse state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Jump {
    /// Upward speed applied on take-off
    pub initial_strength: f32,

    /// Frames during which holding jump keeps boosting
    pub max_duration: u64,

    /// Extra upward speed per boosted frame
    pub frame_strength: f32,

    /// A jump is in progress
    pub jumping: bool,

    /// Frame of the last take-off
    pub start_frame: u64,
}

impl Jump {
    /// Create a jump component
    pub fn new(initial_strength: f32, max_duration: u64, frame_strength: f32) -> Self {
        Self {
            initial_strength,
            max_duration,
            frame_strength,
            jumping: false,
            start_frame: 0,
        }
    }

    /// Record a take-off at `frame`
    pub fn start(&mut self, frame: u64) {
        self.jumping = true;
        self.start_frame = frame;
    }

    /// Whether holding jump at `current_frame` still adds upward speed
    pub fn is_boosting(&self, current_frame: u64) -> bool {
        self.jumping && current_frame.saturating_sub(self.start_frame) < self.max_duration
    }
}
