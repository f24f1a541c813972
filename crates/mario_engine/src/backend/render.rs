//! # Render Backend Abstraction
//!
//! Defines the `RenderBackend` trait a window/graphics layer implements.
//! Coordinates are screen pixels with +y pointing down; sprites are drawn
//! centred on their position.

use super::BackendResult;
use crate::assets::{AnimationDef, FontHandle};
use crate::foundation::math::{Color, Vec2};

/// One animation frame to draw
#[derive(Debug, Clone, Copy)]
pub struct SpriteDraw<'a> {
    /// Animation sheet
    pub animation: &'a AnimationDef,
    /// Frame index within the sheet
    pub frame: u32,
    /// Centre position
    pub pos: Vec2,
    /// Scale; negative x mirrors
    pub scale: Vec2,
    /// Rotation in radians
    pub angle: f32,
}

/// A line of text to draw
#[derive(Debug, Clone, Copy)]
pub struct TextDraw<'a> {
    /// Text content
    pub text: &'a str,
    /// Font, or the backend default
    pub font: Option<FontHandle>,
    /// Character size in pixels
    pub size: u32,
    /// Top-left position
    pub pos: Vec2,
    /// Fill colour
    pub color: Color,
}

/// # Render Backend Trait
///
/// Frame-oriented drawing interface. Calls between `begin_frame` and
/// `end_frame` belong to one frame.
pub trait RenderBackend {
    /// Start a frame, clearing to `clear_color`
    fn begin_frame(&mut self, clear_color: Color) -> BackendResult<()>;

    /// Centre the camera on `center`
    fn set_view_center(&mut self, center: Vec2);

    /// Draw one sprite frame
    fn draw_sprite(&mut self, sprite: &SpriteDraw<'_>);

    /// Draw an unfilled rectangle centred on `center`
    fn draw_rect_outline(&mut self, center: Vec2, size: Vec2, color: Color);

    /// Draw a line segment
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// Draw text
    fn draw_text(&mut self, text: &TextDraw<'_>);

    /// Present the frame
    fn end_frame(&mut self) -> BackendResult<()>;
}
