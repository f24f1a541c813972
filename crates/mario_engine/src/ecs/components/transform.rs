//! Transform component
//!
//! Position, velocity, scale and rotation of an entity in screen space.
//! The previous position is kept so collision code can tell which axis an
//! overlap came from.

use crate::foundation::math::Vec2;

/// Spatial state of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Current position (entity centre)
    pub pos: Vec2,

    /// Position before the last movement step
    pub previous_pos: Vec2,

    /// Displacement applied per frame
    pub velocity: Vec2,

    /// Scale factors; a negative x flips the sprite horizontally
    pub scale: Vec2,

    /// Rotation angle in radians
    pub angle: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            pos: Vec2::zeros(),
            previous_pos: Vec2::zeros(),
            velocity: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            angle: 0.0,
        }
    }
}

impl Transform {
    /// Create a transform at rest at `pos`
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            previous_pos: pos,
            ..Default::default()
        }
    }

    /// Builder pattern: Set velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder pattern: Set scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Builder pattern: Set rotation angle
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Apply one frame of velocity, remembering where we came from
    pub fn step(&mut self) {
        self.previous_pos = self.pos;
        self.pos += self.velocity;
    }

    /// Horizontal facing derived from the sign of `scale.x`
    pub fn facing(&self) -> f32 {
        if self.scale.x < 0.0 { -1.0 } else { 1.0 }
    }
}
