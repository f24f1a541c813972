//! Gravity component

/// Downward acceleration applied to the entity every frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gravity {
    /// Acceleration added to `velocity.y` per frame
    pub gravity: f32,
}

impl Gravity {
    /// Create a gravity component
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }
}
