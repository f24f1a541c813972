//! # Backend Module
//!
//! Render and audio driver abstractions. Scenes draw through
//! [`RenderBackend`] after the entity sync and play sounds through
//! [`AudioBackend`]; both only read component data.
//!
//! ## Organization
//!
//! - **Render**: sprite, shape and text submission
//! - **Audio**: sound effect playback
//! - **Headless**: in-memory implementations for tests and tooling

pub mod render;
pub mod audio;
pub mod headless;

pub use render::{RenderBackend, SpriteDraw, TextDraw};
pub use audio::{AudioBackend, PlaybackId};
pub use headless::{FrameStats, HeadlessAudio, HeadlessRenderer};

use thiserror::Error;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Backend errors
#[derive(Error, Debug)]
pub enum BackendError {
    /// Rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// Audio playback failed
    #[error("Audio error: {0}")]
    Audio(String),
}
