//! Core engine implementation
//!
//! [`GameEngine`] owns the backends and the named scenes and drives the
//! frame loop. Scenes talk back to it through [`EngineContext`]: shared
//! resources plus a command queue the engine drains after each phase of the
//! frame, so a scene is never replaced while one of its methods is running.

use crate::assets::{AssetError, AssetManager};
use crate::backend::{AudioBackend, BackendError, HeadlessAudio, HeadlessRenderer, RenderBackend};
use crate::config::{ConfigError, GameConfig};
use crate::foundation::math::Vec2;
use crate::foundation::time::FrameLimiter;
use crate::input::{InputDriver, InputEvent, NoInput};
use crate::scene::{Scene, SceneError};
use std::collections::HashMap;
use thiserror::Error;

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Asset registration failed
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// A scene failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// A backend failed
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// `run` was called before any scene was set
    #[error("No scene to run")]
    NoScene,
}

/// Runtime settings adjustable by scenes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Music volume (0-100)
    pub music_volume: f32,
    /// Sound effect volume (0-100)
    pub sound_volume: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            music_volume: 10.0,
            sound_volume: 10.0,
        }
    }
}

/// Request queued by a scene, applied by the engine
pub enum EngineCommand {
    /// Switch to the scene registered as `name`
    ChangeScene {
        /// Scene name
        name: String,
        /// Scene to store under `name`
        scene: Box<dyn Scene>,
        /// Drop the current scene
        end_current: bool,
    },
    /// Stop the engine
    Quit,
}

/// Resources shared with scenes
pub struct EngineContext {
    /// Game configuration
    pub config: GameConfig,
    /// Registered assets
    pub assets: AssetManager,
    /// Audio output
    pub audio: Box<dyn AudioBackend>,
    /// Volume settings
    pub settings: EngineSettings,
    commands: Vec<EngineCommand>,
}

impl EngineContext {
    /// Create a context with the given resources
    pub fn new(config: GameConfig, assets: AssetManager, audio: Box<dyn AudioBackend>) -> Self {
        Self {
            config,
            assets,
            audio,
            settings: EngineSettings::default(),
            commands: Vec::new(),
        }
    }

    /// Context with default config, no assets and headless audio
    pub fn headless() -> Self {
        Self::new(GameConfig::default(), AssetManager::new(), Box::new(HeadlessAudio::default()))
    }

    /// Register every font, texture, animation, sound and music track
    /// listed in the config
    pub fn register_assets(&mut self) -> Result<(), AssetError> {
        for font in self.config.fonts() {
            log::info!("Adding font {}", font.name);
            self.assets.add_font(&font.name, &font.path);
        }

        for texture in self.config.textures() {
            log::info!("Adding texture {}", texture.name);
            self.assets.add_texture(&texture.name, &texture.path, texture.size())?;
        }

        for animation in self.config.animations() {
            log::info!("Adding animation {}", animation.name);
            self.assets
                .add_animation(&animation.name, &animation.texture, animation.frames, animation.speed)?;
        }

        for sound in self.config.sounds() {
            log::info!("Adding sound {}", sound.name);
            self.assets.add_sound(&sound.name, &sound.path);
        }

        for music in self.config.music_tracks() {
            log::info!("Adding music {}", music.name);
            self.assets.add_music(&music.name, &music.path);
        }

        Ok(())
    }

    /// Window size in pixels
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.config.window.width as f32, self.config.window.height as f32)
    }

    /// Ask the engine to switch scenes after the current phase
    pub fn change_scene(&mut self, name: impl Into<String>, scene: Box<dyn Scene>, end_current: bool) {
        self.commands.push(EngineCommand::ChangeScene {
            name: name.into(),
            scene,
            end_current,
        });
    }

    /// Ask the engine to stop
    pub fn quit(&mut self) {
        self.commands.push(EngineCommand::Quit);
    }

    /// Number of queued commands
    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Drain queued commands
    pub fn take_commands(&mut self) -> Vec<EngineCommand> {
        std::mem::take(&mut self.commands)
    }
}

/// Platform drivers used by the engine
pub struct Backends {
    /// Render output
    pub renderer: Box<dyn RenderBackend>,
    /// Audio output
    pub audio: Box<dyn AudioBackend>,
    /// Event source
    pub input: Box<dyn InputDriver>,
}

impl Backends {
    /// In-memory drivers with no input
    pub fn headless() -> Self {
        Self {
            renderer: Box::new(HeadlessRenderer::new()),
            audio: Box::new(HeadlessAudio::default()),
            input: Box::new(NoInput),
        }
    }

    /// Builder pattern: Replace the input driver
    pub fn with_input(mut self, input: impl InputDriver + 'static) -> Self {
        self.input = Box::new(input);
        self
    }
}

/// Main engine struct
pub struct GameEngine {
    context: EngineContext,
    renderer: Box<dyn RenderBackend>,
    input: Box<dyn InputDriver>,
    scenes: HashMap<String, Box<dyn Scene>>,
    current_scene: String,
    limiter: FrameLimiter,
    frame: u64,
    running: bool,
}

impl GameEngine {
    /// Create the engine and register the configured assets
    pub fn new(config: GameConfig, backends: Backends) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");

        let limiter = FrameLimiter::new(config.window.framerate);
        let mut context = EngineContext::new(config, AssetManager::new(), backends.audio);
        context.register_assets()?;

        Ok(Self {
            context,
            renderer: backends.renderer,
            input: backends.input,
            scenes: HashMap::new(),
            current_scene: String::new(),
            limiter,
            frame: 0,
            running: true,
        })
    }

    /// Store `scene` under `name` and make it current
    ///
    /// With `end_current` the previously current scene is dropped.
    pub fn change_scene(&mut self, name: impl Into<String>, scene: Box<dyn Scene>, end_current: bool) {
        let name = name.into();
        log::info!("Changing scene from {} to {}", self.current_scene, name);

        if end_current && self.scenes.remove(&self.current_scene).is_some() {
            log::debug!("Dropped scene {}", self.current_scene);
        }
        self.scenes.insert(name.clone(), scene);
        self.current_scene = name;
    }

    /// Run until a scene or the window asks to quit
    pub fn run(&mut self) -> Result<(), EngineError> {
        if self.scenes.is_empty() {
            return Err(EngineError::NoScene);
        }

        log::info!("Starting main loop...");
        while self.running {
            self.step()?;
        }
        log::info!("Engine shutdown complete after {} frames", self.frame);
        Ok(())
    }

    /// Run at most `frames` frames; returns how many ran
    pub fn run_frames(&mut self, frames: u64) -> Result<u64, EngineError> {
        if self.scenes.is_empty() {
            return Err(EngineError::NoScene);
        }

        let mut ran = 0;
        while ran < frames && self.running {
            self.step()?;
            ran += 1;
        }
        Ok(ran)
    }

    /// Run a single frame
    pub fn step(&mut self) -> Result<(), EngineError> {
        for event in self.input.poll(self.frame) {
            if event == InputEvent::Closed {
                self.quit();
                continue;
            }
            if let Some(scene) = self.scenes.get_mut(&self.current_scene) {
                scene.handle_event(&event, &mut self.context)?;
            }
        }
        self.apply_commands();

        if let Some(scene) = self.scenes.get_mut(&self.current_scene) {
            scene.update(&mut self.context)?;
        }
        self.apply_commands();

        if let Some(scene) = self.scenes.get(&self.current_scene) {
            self.renderer.begin_frame(scene.clear_color(&self.context))?;
            scene.render(&self.context, self.renderer.as_mut())?;
            self.renderer.end_frame()?;
        }

        self.context.audio.update();
        self.limiter.end_frame();
        self.frame += 1;
        Ok(())
    }

    fn apply_commands(&mut self) {
        for command in self.context.take_commands() {
            match command {
                EngineCommand::ChangeScene {
                    name,
                    scene,
                    end_current,
                } => self.change_scene(name, scene, end_current),
                EngineCommand::Quit => self.quit(),
            }
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
        self.context.audio.stop_all();
    }

    /// Whether the loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Name of the current scene
    pub fn current_scene_name(&self) -> &str {
        &self.current_scene
    }

    /// The current scene
    pub fn current_scene(&self) -> Option<&dyn Scene> {
        self.scenes.get(&self.current_scene).map(|scene| &**scene)
    }

    /// Whether a scene is stored under `name`
    pub fn has_scene(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Shared resources
    pub fn context(&self) -> &EngineContext {
        &self.context
    }

    /// Mutable shared resources
    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Action, KeyCode, ScriptedInput};
    use crate::scene::SceneBase;

    struct Counter {
        base: SceneBase,
        quit_after: u64,
        next: Option<&'static str>,
    }

    impl Counter {
        fn new(quit_after: u64) -> Self {
            let mut base = SceneBase::new();
            base.register_action(KeyCode::Enter, "NEXT");
            Self {
                base,
                quit_after,
                next: None,
            }
        }
    }

    impl Scene for Counter {
        fn update(&mut self, ctx: &mut EngineContext) -> Result<(), SceneError> {
            self.base.entities.update();
            self.base.current_frame += 1;
            if self.base.current_frame == self.quit_after {
                ctx.quit();
            }
            Ok(())
        }

        fn do_action(&mut self, action: &Action, ctx: &mut EngineContext) -> Result<(), SceneError> {
            if action.is_start("NEXT") {
                if let Some(name) = self.next {
                    ctx.change_scene(name, Box::new(Self::new(u64::MAX)), true);
                }
            }
            Ok(())
        }

        fn render(&self, _ctx: &EngineContext, _renderer: &mut dyn RenderBackend) -> Result<(), SceneError> {
            Ok(())
        }

        fn base(&self) -> &SceneBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut SceneBase {
            &mut self.base
        }
    }

    fn headless_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.window.framerate = 0;
        config
    }

    #[test]
    fn test_run_without_scene_fails() {
        let mut engine = GameEngine::new(headless_config(), Backends::headless()).unwrap();
        assert!(matches!(engine.run(), Err(EngineError::NoScene)));
    }

    #[test]
    fn test_scene_quit_stops_run() {
        let mut engine = GameEngine::new(headless_config(), Backends::headless()).unwrap();
        engine.change_scene("MENU", Box::new(Counter::new(3)), true);

        engine.run().unwrap();
        assert!(!engine.is_running());
        assert_eq!(engine.frame(), 3);
        assert_eq!(engine.current_scene().map(|scene| scene.current_frame()), Some(3));
    }

    #[test]
    fn test_run_frames_is_bounded() {
        let mut engine = GameEngine::new(headless_config(), Backends::headless()).unwrap();
        engine.change_scene("MENU", Box::new(Counter::new(u64::MAX)), false);

        assert_eq!(engine.run_frames(10).unwrap(), 10);
        assert!(engine.is_running());
    }

    #[test]
    fn test_change_scene_keeps_or_drops_current() {
        let mut engine = GameEngine::new(headless_config(), Backends::headless()).unwrap();
        engine.change_scene("MENU", Box::new(Counter::new(u64::MAX)), true);
        engine.change_scene("PLAY", Box::new(Counter::new(u64::MAX)), false);
        assert!(engine.has_scene("MENU"));
        assert_eq!(engine.current_scene_name(), "PLAY");

        engine.change_scene("MENU", Box::new(Counter::new(u64::MAX)), true);
        assert!(!engine.has_scene("PLAY"));
        assert_eq!(engine.current_scene_name(), "MENU");
    }

    #[test]
    fn test_input_routes_to_current_scene() {
        let input = ScriptedInput::parse(&["1:press:Enter", "4:press:Space"]).unwrap();
        let mut engine = GameEngine::new(headless_config(), Backends::headless().with_input(input)).unwrap();
        let mut menu = Counter::new(u64::MAX);
        menu.next = Some("PLAY");
        engine.change_scene("MENU", Box::new(menu), true);

        engine.run_frames(3).unwrap();
        assert_eq!(engine.current_scene_name(), "PLAY");
        assert!(!engine.has_scene("MENU"));
        // new scene was updated once on frame 1 and again on frame 2
        assert_eq!(engine.current_scene().map(|scene| scene.current_frame()), Some(2));
    }

    #[test]
    fn test_close_event_quits() {
        let input = ScriptedInput::new(vec![(2, InputEvent::Closed)]);
        let mut engine = GameEngine::new(headless_config(), Backends::headless().with_input(input)).unwrap();
        engine.change_scene("MENU", Box::new(Counter::new(u64::MAX)), true);

        assert_eq!(engine.run_frames(100).unwrap(), 3);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_context_commands_are_queued() {
        let mut ctx = EngineContext::headless();
        ctx.quit();
        ctx.change_scene("PLAY", Box::new(Counter::new(1)), false);
        assert_eq!(ctx.pending_commands(), 2);
        assert_eq!(ctx.take_commands().len(), 2);
        assert_eq!(ctx.pending_commands(), 0);
    }

    #[test]
    fn test_window_size_from_config() {
        let ctx = EngineContext::headless();
        approx::assert_relative_eq!(ctx.window_size(), Vec2::new(1280.0, 768.0));
    }
}
