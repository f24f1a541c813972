//! Headless backends
//!
//! Record what would have been drawn or played without touching a window or
//! an audio device. Used by the game binary when no display is attached and
//! by tests.

use super::audio::{AudioBackend, PlaybackId};
use super::render::{RenderBackend, SpriteDraw, TextDraw};
use super::{BackendError, BackendResult};
use crate::assets::SoundDef;
use crate::foundation::math::{Color, Vec2};
use std::collections::HashMap;

/// Draw calls issued during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Sprites drawn
    pub sprites: usize,
    /// Rectangle outlines drawn
    pub rects: usize,
    /// Lines drawn
    pub lines: usize,
    /// Text items drawn
    pub texts: usize,
}

/// Renderer that counts draw calls
#[derive(Debug)]
pub struct HeadlessRenderer {
    in_frame: bool,
    current: FrameStats,
    last_frame: FrameStats,
    frames: u64,
    clear_color: Color,
    view_center: Vec2,
    texts: Vec<String>,
}

impl HeadlessRenderer {
    /// Create a renderer
    pub fn new() -> Self {
        Self {
            in_frame: false,
            current: FrameStats::default(),
            last_frame: FrameStats::default(),
            frames: 0,
            clear_color: Color::BLACK,
            view_center: Vec2::zeros(),
            texts: Vec::new(),
        }
    }

    /// Draw calls of the last completed frame
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Completed frames
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Clear colour of the last frame
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Camera centre
    pub fn view_center(&self) -> Vec2 {
        self.view_center
    }

    /// Text drawn in the current or last frame
    pub fn texts(&self) -> &[String] {
        &self.texts
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for HeadlessRenderer {
    fn begin_frame(&mut self, clear_color: Color) -> BackendResult<()> {
        if self.in_frame {
            return Err(BackendError::Render("begin_frame called twice".to_string()));
        }
        self.in_frame = true;
        self.current = FrameStats::default();
        self.clear_color = clear_color;
        self.texts.clear();
        Ok(())
    }

    fn set_view_center(&mut self, center: Vec2) {
        self.view_center = center;
    }

    fn draw_sprite(&mut self, sprite: &SpriteDraw<'_>) {
        log::trace!("sprite {}[{}] at ({}, {})", sprite.animation.name, sprite.frame, sprite.pos.x, sprite.pos.y);
        self.current.sprites += 1;
    }

    fn draw_rect_outline(&mut self, _center: Vec2, _size: Vec2, _color: Color) {
        self.current.rects += 1;
    }

    fn draw_line(&mut self, _from: Vec2, _to: Vec2, _color: Color) {
        self.current.lines += 1;
    }

    fn draw_text(&mut self, text: &TextDraw<'_>) {
        self.current.texts += 1;
        self.texts.push(text.text.to_string());
    }

    fn end_frame(&mut self) -> BackendResult<()> {
        if !self.in_frame {
            return Err(BackendError::Render("end_frame without begin_frame".to_string()));
        }
        self.in_frame = false;
        self.last_frame = self.current;
        self.frames += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Voice {
    remaining: u32,
    looped: bool,
}

/// Audio backend where one-shot sounds last a fixed number of updates
#[derive(Debug)]
pub struct HeadlessAudio {
    duration: u32,
    next_id: u64,
    voices: HashMap<PlaybackId, Voice>,
    started: usize,
}

impl HeadlessAudio {
    /// Create a backend whose sounds finish after `duration` updates
    pub fn new(duration: u32) -> Self {
        Self {
            duration: duration.max(1),
            next_id: 0,
            voices: HashMap::new(),
            started: 0,
        }
    }

    /// Total playbacks started
    pub fn started(&self) -> usize {
        self.started
    }

    /// Playbacks currently running
    pub fn playing(&self) -> usize {
        self.voices.len()
    }
}

impl Default for HeadlessAudio {
    fn default() -> Self {
        Self::new(30)
    }
}

impl AudioBackend for HeadlessAudio {
    fn play(&mut self, sound: &SoundDef, volume: f32, looped: bool) -> BackendResult<PlaybackId> {
        if !(0.0..=100.0).contains(&volume) {
            return Err(BackendError::Audio(format!("volume {volume} out of range for {}", sound.name)));
        }

        let id = PlaybackId(self.next_id);
        self.next_id += 1;
        self.started += 1;
        self.voices.insert(id, Voice { remaining: self.duration, looped });
        log::trace!("Playing {} (volume {}, looped {})", sound.name, volume, looped);
        Ok(id)
    }

    fn is_playing(&self, id: PlaybackId) -> bool {
        self.voices.contains_key(&id)
    }

    fn stop(&mut self, id: PlaybackId) {
        self.voices.remove(&id);
    }

    fn stop_all(&mut self) {
        self.voices.clear();
    }

    fn update(&mut self) {
        self.voices.retain(|_, voice| {
            if voice.looped {
                return true;
            }
            voice.remaining = voice.remaining.saturating_sub(1);
            voice.remaining > 0
        });
    }
}
