//! Scenes
//!
//! A scene owns one [`EntityManager`] and the key bindings that drive it.
//! The engine feeds it input events, runs one [`Scene::update`] per frame
//! and then a read-only [`Scene::render`] pass.
//!
//! Scenes may keep handles to entities they own (the player, say) but must
//! revalidate them with [`EntityManager::is_alive`] or `contains` after any
//! sync point at which the entity could have been destroyed.

use crate::assets::AssetError;
use crate::backend::{BackendError, RenderBackend};
use crate::ecs::EntityManager;
use crate::engine::EngineContext;
use crate::foundation::math::Color;
use crate::input::{Action, ActionMap, InputEvent, KeyCode};
use thiserror::Error;

/// Scene errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// Missing or invalid asset
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Render or audio backend failure
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Scene could not be built
    #[error("Scene setup failed: {0}")]
    Setup(String),
}

/// State shared by every scene
#[derive(Default)]
pub struct SceneBase {
    /// The scene's entities
    pub entities: EntityManager,
    /// Key bindings
    pub action_map: ActionMap,
    /// Frames simulated so far
    pub current_frame: u64,
    /// Systems are suspended
    pub paused: bool,
    /// The scene has finished and is waiting to be replaced
    pub has_ended: bool,
}

impl SceneBase {
    /// Create an empty scene state
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to the action `name`
    pub fn register_action(&mut self, key: KeyCode, name: &str) {
        self.action_map.register(key, name);
    }
}

/// A game scene
pub trait Scene {
    /// Simulate one frame; ends with exactly one entity sync
    fn update(&mut self, ctx: &mut EngineContext) -> Result<(), SceneError>;

    /// React to a named action
    fn do_action(&mut self, action: &Action, ctx: &mut EngineContext) -> Result<(), SceneError>;

    /// Draw the scene; the engine has already begun the frame
    fn render(&self, ctx: &EngineContext, renderer: &mut dyn RenderBackend) -> Result<(), SceneError>;

    /// Shared scene state
    fn base(&self) -> &SceneBase;

    /// Mutable shared scene state
    fn base_mut(&mut self) -> &mut SceneBase;

    /// Called once when the scene ends
    fn on_end(&mut self, _ctx: &mut EngineContext) {
        self.base_mut().has_ended = true;
    }

    /// Colour the frame is cleared to
    fn clear_color(&self, ctx: &EngineContext) -> Color {
        ctx.config.window.clear_color()
    }

    /// Translate a key event through the action map and dispatch it
    fn handle_event(&mut self, event: &InputEvent, ctx: &mut EngineContext) -> Result<(), SceneError> {
        match self.action_map().translate(event) {
            Some(action) => {
                log::trace!("Action {action}");
                self.do_action(&action, ctx)
            }
            None => Ok(()),
        }
    }

    /// Run `frames` updates back to back
    fn simulate(&mut self, ctx: &mut EngineContext, frames: u64) -> Result<(), SceneError> {
        for _ in 0..frames {
            self.update(ctx)?;
        }
        Ok(())
    }

    /// The scene's entities
    fn entities(&self) -> &EntityManager {
        &self.base().entities
    }

    /// Whether systems are suspended
    fn is_paused(&self) -> bool {
        self.base().paused
    }

    /// Suspend or resume systems
    fn set_paused(&mut self, paused: bool) {
        self.base_mut().paused = paused;
    }

    /// Whether the scene has ended
    fn has_ended(&self) -> bool {
        self.base().has_ended
    }

    /// Frames simulated so far
    fn current_frame(&self) -> u64 {
        self.base().current_frame
    }

    /// Key bindings
    fn action_map(&self) -> &ActionMap {
        &self.base().action_map
    }
}
