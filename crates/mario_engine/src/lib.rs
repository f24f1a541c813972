//! # Mario Engine
//!
//! A small 2D platform-game engine built around an entity-component core.
//!
//! ## Features
//!
//! - **Entity-Component Core**: generational entity handles, per-kind
//!   component storage, tag index and deferred creation/destruction
//! - **Scenes**: action-mapped input, per-frame systems and a read-only
//!   render pass
//! - **Asset Registry**: textures, animations, sounds, fonts and music by name
//! - **Backends**: render, audio and input drivers behind traits, with
//!   headless implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use mario_engine::prelude::*;
//!
//! let mut entities = EntityManager::new();
//! let player = entities.add_entity("player");
//! entities.add(player, Transform::new(Vec2::new(64.0, 64.0)));
//!
//! // Nothing is visible until the sync point
//! assert!(entities.query_by_tag("player").is_empty());
//! entities.update();
//! assert_eq!(entities.query::<Transform>(), vec![player]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod ecs;
pub mod assets;
pub mod config;
pub mod input;
pub mod physics;
pub mod scene;
pub mod backend;

mod engine;

pub use engine::{Backends, EngineCommand, EngineContext, EngineError, EngineSettings, GameEngine};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Backends, EngineContext, EngineError, EngineSettings, GameEngine,
        foundation::{
            math::{Color, Vec2},
            time::{FrameLimiter, Stopwatch},
        },
        ecs::{
            Component, ComponentKind, EntityHandle, EntityManager, Query,
            components::{
                Animation, BoundingBox, BoundingConvex, Gravity, Input, Jump, LifeSpan, Sound,
                State, Transform,
            },
            systems::{AnimationSystem, LifespanSystem, MovementSystem, SoundSystem},
        },
        assets::{AnimationHandle, AssetError, AssetManager},
        config::{Config, ConfigError, GameConfig},
        input::{Action, ActionMap, ActionPhase, InputEvent, KeyCode},
        scene::{Scene, SceneBase, SceneError},
        backend::{AudioBackend, RenderBackend, SpriteDraw, TextDraw},
    };
}
