//! # MegaMario
//!
//! A side-scrolling platformer built on `mario_engine`: a level-select
//! menu, a play scene with running, jumping and shooting, breakable
//! bricks and question blocks that pop coins.
//!
//! The binary runs headless by default and is driven by scripted key
//! events, which makes whole play sessions reproducible from the
//! command line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod level;
pub mod scenes;
pub mod systems;

use mario_engine::config::ConfigError;
use mario_engine::input::InputError;
use mario_engine::scene::SceneError;
use mario_engine::EngineError;
use thiserror::Error;

pub use cli::{run, Cli};

/// Top-level game errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Engine failure
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Config could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scripted input could not be parsed
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// A scene failed to build
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// `--level` names no configured level
    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    /// Entity snapshot could not be serialized
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] ron::Error),
}
