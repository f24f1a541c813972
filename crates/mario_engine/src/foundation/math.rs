//! Math utilities and types
//!
//! Provides the 2D math types used by components and gameplay code.
//! Screen space follows the usual 2D convention: +x right, +y down.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D integer vector type
pub type IVec2 = Vector2<i32>;

/// Component-wise absolute value
pub fn abs_vec(v: Vec2) -> Vec2 {
    v.abs()
}

/// RGBA colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a colour with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Math utility functions
pub mod utils {
    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Format a float with a fixed number of decimals
    pub fn float_to_string(value: f32, precision: usize) -> String {
        format!("{value:.precision$}")
    }
}
