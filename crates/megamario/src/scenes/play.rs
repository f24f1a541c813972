//! Play scene
//!
//! Runs one level: player control, bullets, tile collisions and the
//! animation state machine. System order per frame is movement, sound,
//! lifespan, collision, animation, then the entity sync.

use super::menu::MenuScene;
use crate::level::{self, grid_to_mid_pixel, LevelError, GRID_SIZE};
use crate::systems::{
    apply_player_input, bullet_tile_hits, clamp_to_left_edge, resolve_player_tiles, update_player_state,
};
use mario_engine::assets::{AssetManager, FontHandle};
use mario_engine::backend::{RenderBackend, SpriteDraw, TextDraw};
use mario_engine::ecs::components::{
    Animation, BoundingBox, Gravity, Input, Jump, LifeSpan, Sound, State, Transform,
};
use mario_engine::ecs::systems::{AnimationSystem, LifespanSystem, MovementSystem, SoundSystem};
use mario_engine::ecs::{EntityHandle, EntityManager};
use mario_engine::foundation::math::{Color, Vec2};
use mario_engine::input::{Action, ActionPhase, KeyCode};
use mario_engine::scene::{Scene, SceneBase, SceneError};
use mario_engine::EngineContext;
use std::path::Path;

/// Age at which the newest bullet lets the player fire again
pub const SHOT_REARM_FRAMES: u64 = 15;

const DEBRIS_LIFESPAN: u64 = 15;
const COIN_LIFESPAN: u64 = 30;
const GUN_OFFSET: f32 = 24.0;
const PLAYER_SIZE: (f32, f32) = (48.0, 64.0);
const RUN_COLOR: Color = Color::rgb(100, 100, 255);
const PAUSE_COLOR: Color = Color::rgb(50, 50, 150);
const GRID_TEXT_SIZE: u32 = 12;

/// Systems that can be switched off for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemToggles {
    /// React to actions
    pub action: bool,
    /// Player control and velocity integration
    pub movement: bool,
    /// Sound playback
    pub sound: bool,
    /// Lifespan expiry and shot re-arming
    pub lifespan: bool,
    /// Collision detection and resolution
    pub collision: bool,
    /// Animation state machine and playback
    pub animation: bool,
    /// Drawing
    pub render: bool,
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self {
            action: true,
            movement: true,
            sound: true,
            lifespan: true,
            collision: true,
            animation: true,
            render: true,
        }
    }
}

/// Render layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawToggles {
    /// Sprites
    pub textures: bool,
    /// Bounding box outlines
    pub collision: bool,
    /// Grid lines and cell labels
    pub grid: bool,
}

impl Default for DrawToggles {
    fn default() -> Self {
        Self {
            textures: true,
            collision: false,
            grid: false,
        }
    }
}

/// A level being played
pub struct PlayScene {
    base: SceneBase,
    level_name: String,
    player: EntityHandle,
    bullet_count: usize,
    font: Option<FontHandle>,
    /// Enabled systems
    pub systems: SystemToggles,
    /// Enabled render layers
    pub draw: DrawToggles,
}

fn animation_name<'a>(entities: &EntityManager, assets: &'a AssetManager, entity: EntityHandle) -> Option<&'a str> {
    let handle = entities.get::<Animation>(entity)?.handle;
    assets.animation(handle).map(|def| def.name.as_str())
}

fn attach_sound(entities: &mut EntityManager, ctx: &EngineContext, entity: EntityHandle, name: &str) {
    match ctx.assets.sound_handle(name) {
        Ok(sound) => {
            entities.add(entity, Sound::new(sound, false, ctx.settings.sound_volume));
        }
        Err(e) => log::warn!("{e}"),
    }
}

fn player_start(ctx: &EngineContext) -> Result<Vec2, SceneError> {
    let idle = ctx.assets.animation_handle("Idle")?;
    let frame_size = ctx
        .assets
        .animation(idle)
        .map_or_else(|| Vec2::new(PLAYER_SIZE.0, PLAYER_SIZE.1), |def| def.frame_size);
    let conf = &ctx.config.player;
    Ok(grid_to_mid_pixel(Vec2::new(conf.x, conf.y), frame_size, ctx.window_size().y))
}

fn spawn_player(entities: &mut EntityManager, ctx: &EngineContext) -> Result<EntityHandle, SceneError> {
    let conf = &ctx.config.player;
    let idle = ctx.assets.animation_handle("Idle")?;
    let start = player_start(ctx)?;

    let player = entities.add_entity("player");
    entities
        .entity_mut(player)
        .add(Animation::new(idle, true))
        .add(Transform::new(start))
        .add(BoundingBox::new(Vec2::new(PLAYER_SIZE.0, PLAYER_SIZE.1)))
        .add(Input::new())
        .add(Gravity::new(conf.gravity))
        .add(State::new("idle"))
        .add(Jump::new(conf.jump, 15, 1.0));
    Ok(player)
}

impl PlayScene {
    /// Load the level file at `path`
    pub fn new(ctx: &EngineContext, path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loading level {}", path.display());
        Self::from_source(ctx, &path.display().to_string(), &source)
    }

    /// Build a level from its text
    pub fn from_source(ctx: &EngineContext, name: &str, source: &str) -> Result<Self, SceneError> {
        let mut base = SceneBase::new();

        base.register_action(KeyCode::Up, "JUMP");
        base.register_action(KeyCode::Left, "LEFT");
        base.register_action(KeyCode::Right, "RIGHT");
        base.register_action(KeyCode::Space, "SHOOT");
        base.register_action(KeyCode::W, "JUMP");
        base.register_action(KeyCode::A, "LEFT");
        base.register_action(KeyCode::D, "RIGHT");

        base.register_action(KeyCode::P, "PAUSE");
        base.register_action(KeyCode::Escape, "QUIT");
        base.register_action(KeyCode::T, "TOGGLE_TEXTURE");
        base.register_action(KeyCode::C, "TOGGLE_COLLISION");
        base.register_action(KeyCode::G, "TOGGLE_GRID");

        level::load_level(source, &mut base.entities, &ctx.assets, ctx.window_size().y);
        let player = spawn_player(&mut base.entities, ctx)?;
        base.entities.update();

        Ok(Self {
            base,
            level_name: name.to_string(),
            player,
            bullet_count: 0,
            font: ctx.assets.font_handle("Consolas").ok(),
            systems: SystemToggles::default(),
            draw: DrawToggles::default(),
        })
    }

    /// Level file the scene was built from
    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    /// The player entity, while it exists
    pub fn player(&self) -> Option<EntityHandle> {
        self.base.entities.is_alive(self.player).then_some(self.player)
    }

    /// Bullets in flight
    pub fn bullet_count(&self) -> usize {
        self.bullet_count
    }

    fn movement(&mut self, ctx: &EngineContext) -> Result<(), SceneError> {
        let frame = self.base.current_frame;
        let outcome = apply_player_input(&mut self.base.entities, self.player, &ctx.config.player, frame);

        if outcome.jumped {
            attach_sound(&mut self.base.entities, ctx, self.player, "Jump");
        }
        if outcome.fired {
            self.spawn_bullet(ctx)?;
        }

        MovementSystem::new(ctx.config.player.max_speed).run(&mut self.base.entities);
        Ok(())
    }

    fn spawn_bullet(&mut self, ctx: &EngineContext) -> Result<(), SceneError> {
        let Some(shooter) = self.base.entities.get::<Transform>(self.player).copied() else {
            return Ok(());
        };
        let buster = ctx.assets.animation_handle("Buster")?;
        let conf = &ctx.config.bullet;
        let facing = shooter.scale.x;

        let entities = &mut self.base.entities;
        let bullet = entities.add_entity("bullet");
        entities
            .entity_mut(bullet)
            .add(
                Transform::new(shooter.pos + Vec2::new(GUN_OFFSET * facing, 0.0))
                    .with_velocity(Vec2::new(conf.speed * facing, 0.0))
                    .with_scale(shooter.scale),
            )
            .add(Animation::new(buster, true))
            .add(BoundingBox::new(Vec2::new(conf.radius, conf.radius)))
            .add(LifeSpan::new(conf.lifespan, self.base.current_frame));

        attach_sound(entities, ctx, self.player, "Shoot");
        self.bullet_count += 1;
        Ok(())
    }

    fn lifespan(&mut self) {
        let frame = self.base.current_frame;
        let entities = &mut self.base.entities;

        let rearm = self.bullet_count == 0
            || entities
                .query_tagged::<LifeSpan>("bullet")
                .into_iter()
                .any(|b| entities.get::<LifeSpan>(b).is_some_and(|ls| ls.age(frame) == SHOT_REARM_FRAMES));
        if rearm && entities.is_alive(self.player) {
            if let Some(input) = entities.get_mut::<Input>(self.player) {
                input.can_shoot = true;
            }
        }

        for expired in LifespanSystem::new().run(entities, frame) {
            if entities.tag(expired) == "bullet" {
                self.bullet_count = self.bullet_count.saturating_sub(1);
            }
        }
    }

    fn collision(&mut self, ctx: &EngineContext) -> Result<(), SceneError> {
        for hit in bullet_tile_hits(&self.base.entities) {
            for tile in hit.tiles {
                if animation_name(&self.base.entities, &ctx.assets, tile) == Some("Brick") {
                    self.spawn_explosion(ctx, tile)?;
                }
            }
            self.base.entities.destroy(hit.bullet);
            self.bullet_count = self.bullet_count.saturating_sub(1);
        }

        for tile in resolve_player_tiles(&mut self.base.entities, self.player) {
            match animation_name(&self.base.entities, &ctx.assets, tile) {
                Some("Brick") => self.spawn_debris(ctx, tile)?,
                Some("Question") => {
                    let hit = ctx.assets.animation_handle("QuestionHit")?;
                    self.base.entities.add(tile, Animation::new(hit, true));
                    self.spawn_coin(ctx, tile)?;
                }
                _ => {}
            }
        }

        if self.player().is_none() {
            return Ok(());
        }
        clamp_to_left_edge(&mut self.base.entities, self.player);

        let fell = self
            .base
            .entities
            .get::<Transform>(self.player)
            .is_some_and(|t| t.pos.y > ctx.window_size().y);
        if fell {
            let start = player_start(ctx)?;
            if let Some(transform) = self.base.entities.get_mut::<Transform>(self.player) {
                transform.pos = start;
            }
        }
        Ok(())
    }

    fn spawn_explosion(&mut self, ctx: &EngineContext, tile: EntityHandle) -> Result<(), SceneError> {
        let explosion = ctx.assets.animation_handle("Explosion")?;
        let entities = &mut self.base.entities;
        entities.add(tile, Animation::new(explosion, false));
        entities.remove::<BoundingBox>(tile);
        attach_sound(entities, ctx, tile, "Explosion");
        Ok(())
    }

    fn spawn_debris(&mut self, ctx: &EngineContext, tile: EntityHandle) -> Result<(), SceneError> {
        let debris = ctx.assets.animation_handle("BrickDebris")?;
        let frame = self.base.current_frame;
        let entities = &mut self.base.entities;
        entities.add(tile, Animation::new(debris, true));
        entities.remove::<BoundingBox>(tile);
        entities.add(tile, LifeSpan::new(DEBRIS_LIFESPAN, frame));
        attach_sound(entities, ctx, tile, "Debris");
        Ok(())
    }

    fn spawn_coin(&mut self, ctx: &EngineContext, tile: EntityHandle) -> Result<(), SceneError> {
        let spin = ctx.assets.animation_handle("CoinSpin")?;
        let frame = self.base.current_frame;
        let entities = &mut self.base.entities;
        let Some(tile_pos) = entities.get::<Transform>(tile).map(|t| t.pos) else {
            return Ok(());
        };

        let coin = entities.add_entity("coin");
        entities
            .entity_mut(coin)
            .add(Animation::new(spin, true))
            .add(Transform::new(tile_pos - Vec2::new(0.0, GRID_SIZE)))
            .add(LifeSpan::new(COIN_LIFESPAN, frame));
        attach_sound(entities, ctx, coin, "Coin");
        Ok(())
    }

    fn animation(&mut self, ctx: &EngineContext) -> Result<(), SceneError> {
        if let Some(name) = update_player_state(&mut self.base.entities, self.player) {
            let handle = ctx.assets.animation_handle(name)?;
            self.base.entities.add(self.player, Animation::new(handle, true));
        }
        AnimationSystem::new().run(&mut self.base.entities, &ctx.assets);
        Ok(())
    }

    fn set_input(&mut self, name: &str, pressed: bool) {
        if self.player().is_none() {
            return;
        }
        let Some(input) = self.base.entities.get_mut::<Input>(self.player) else {
            return;
        };
        match name {
            "JUMP" => input.up = pressed && input.can_jump,
            "LEFT" => input.left = pressed,
            "RIGHT" => input.right = pressed,
            "SHOOT" => input.shoot = pressed,
            _ => {}
        }
    }

    fn render_grid(&self, ctx: &EngineContext, view_center: Vec2, renderer: &mut dyn RenderBackend) {
        let size = ctx.window_size();
        let left_x = view_center.x - 0.5 * size.x;
        let right_x = left_x + size.x + GRID_SIZE;
        let first_x = left_x - (left_x as i32 % GRID_SIZE as i32) as f32;

        let columns: Vec<f32> = std::iter::successors(Some(first_x), |x| Some(x + GRID_SIZE))
            .take_while(|&x| x < right_x)
            .collect();
        let rows = std::iter::successors(Some(0.0_f32), |y| Some(y + GRID_SIZE)).take_while(|&y| y < size.y);

        for &x in &columns {
            renderer.draw_line(Vec2::new(x, 0.0), Vec2::new(x, size.y), Color::WHITE);
        }

        for y in rows {
            renderer.draw_line(Vec2::new(left_x, size.y - y), Vec2::new(right_x, size.y - y), Color::WHITE);

            for &x in &columns {
                let label = format!("({},{})", x as i32 / GRID_SIZE as i32, y as i32 / GRID_SIZE as i32);
                renderer.draw_text(&TextDraw {
                    text: &label,
                    font: self.font,
                    size: GRID_TEXT_SIZE,
                    pos: Vec2::new(x + 3.0, size.y - y - GRID_SIZE + 2.0),
                    color: Color::WHITE,
                });
            }
        }
    }
}

impl Scene for PlayScene {
    fn update(&mut self, ctx: &mut EngineContext) -> Result<(), SceneError> {
        if !self.base.paused {
            if self.systems.movement {
                self.movement(ctx)?;
            }
            if self.systems.sound {
                SoundSystem::default().run(&mut self.base.entities, &ctx.assets, ctx.audio.as_mut());
            }
            if self.systems.lifespan {
                self.lifespan();
            }
            if self.systems.collision {
                self.collision(ctx)?;
            }
            if self.systems.animation {
                self.animation(ctx)?;
            }
        }

        self.base.entities.update();
        if !self.base.paused {
            self.base.current_frame += 1;
        }
        Ok(())
    }

    fn do_action(&mut self, action: &Action, ctx: &mut EngineContext) -> Result<(), SceneError> {
        if !self.systems.action {
            return Ok(());
        }

        let pressed = action.phase == ActionPhase::Start;
        match action.name.as_str() {
            "TOGGLE_TEXTURE" if pressed => self.draw.textures = !self.draw.textures,
            "TOGGLE_COLLISION" if pressed => self.draw.collision = !self.draw.collision,
            "TOGGLE_GRID" if pressed => self.draw.grid = !self.draw.grid,
            "PAUSE" if pressed => {
                let paused = self.is_paused();
                self.set_paused(!paused);
            }
            "QUIT" if pressed => self.on_end(ctx),
            name @ ("JUMP" | "LEFT" | "RIGHT" | "SHOOT") => self.set_input(name, pressed),
            _ => {}
        }
        Ok(())
    }

    fn on_end(&mut self, ctx: &mut EngineContext) {
        self.base.has_ended = true;
        let menu = MenuScene::new(ctx);
        ctx.change_scene("MENU", Box::new(menu), true);
    }

    fn clear_color(&self, _ctx: &EngineContext) -> Color {
        if self.base.paused {
            PAUSE_COLOR
        } else {
            RUN_COLOR
        }
    }

    fn render(&self, ctx: &EngineContext, renderer: &mut dyn RenderBackend) -> Result<(), SceneError> {
        if !self.systems.render {
            return Ok(());
        }

        let entities = &self.base.entities;
        let size = ctx.window_size();
        let player_x = self
            .player()
            .and_then(|p| entities.get::<Transform>(p))
            .map_or(0.0, |t| t.pos.x);
        let view_center = Vec2::new((0.5 * size.x).max(player_x), 0.5 * size.y);
        renderer.set_view_center(view_center);

        if self.draw.textures {
            for entity in entities.query::<(Transform, Animation)>() {
                let (Some(transform), Some(anim)) = (entities.get::<Transform>(entity), entities.get::<Animation>(entity))
                else {
                    continue;
                };
                let Some(def) = ctx.assets.animation(anim.handle) else {
                    continue;
                };
                renderer.draw_sprite(&SpriteDraw {
                    animation: def,
                    frame: anim.sprite_frame(def),
                    pos: transform.pos,
                    scale: transform.scale,
                    angle: transform.angle,
                });
            }
        }

        if self.draw.collision {
            for entity in entities.query::<(Transform, BoundingBox)>() {
                if let (Some(transform), Some(bbox)) = (entities.get::<Transform>(entity), entities.get::<BoundingBox>(entity)) {
                    renderer.draw_rect_outline(transform.pos, bbox.size - Vec2::new(1.0, 1.0), Color::WHITE);
                }
            }
        }

        if self.draw.grid {
            self.render_grid(ctx, view_center, renderer);
        }
        Ok(())
    }

    fn base(&self) -> &SceneBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::test_support::test_context;
    use approx::assert_relative_eq;
    use mario_engine::backend::HeadlessRenderer;

    const GROUND: &str = "Tile Ground 0 0\nTile Ground 1 0\nTile Ground 2 0\n";

    fn scene(ctx: &EngineContext, extra: &str) -> PlayScene {
        PlayScene::from_source(ctx, "test", &format!("{GROUND}{extra}")).unwrap()
    }

    fn player_pos(scene: &PlayScene) -> Vec2 {
        let player = scene.player().unwrap();
        scene.entities().get::<Transform>(player).unwrap().pos
    }

    #[test]
    fn test_level_and_player_are_live_before_first_frame() {
        let ctx = test_context();
        let scene = scene(&ctx, "");

        assert_eq!(scene.entities().query_by_tag("tile").len(), 3);
        assert_eq!(scene.entities().query_by_tag("player").len(), 1);
        assert_relative_eq!(player_pos(&scene), Vec2::new(96.0, 672.0));
    }

    #[test]
    fn test_player_rests_on_ground() {
        let mut ctx = test_context();
        let mut scene = scene(&ctx, "");

        scene.simulate(&mut ctx, 10).unwrap();

        let player = scene.player().unwrap();
        assert_relative_eq!(player_pos(&scene).y, 672.0);
        assert!(scene.entities().get::<Input>(player).unwrap().can_jump);
        assert!(scene.entities().get::<State>(player).unwrap().is("idle"));
        assert_eq!(scene.current_frame(), 10);
    }

    #[test]
    fn test_holding_shoot_rearms_after_fifteen_frames() {
        let mut ctx = test_context();
        let mut scene = scene(&ctx, "");

        scene.do_action(&Action::start("SHOOT"), &mut ctx).unwrap();
        scene.simulate(&mut ctx, 1).unwrap();
        assert_eq!(scene.entities().query_by_tag("bullet").len(), 1);

        scene.simulate(&mut ctx, 15).unwrap();
        assert_eq!(scene.entities().query_by_tag("bullet").len(), 1);

        scene.simulate(&mut ctx, 1).unwrap();
        assert_eq!(scene.entities().query_by_tag("bullet").len(), 2);
        assert_eq!(scene.bullet_count(), 2);

        let player = scene.player().unwrap();
        assert!(scene.entities().get::<State>(player).unwrap().is("idle_shoot"));
    }

    #[test]
    fn test_bullet_explodes_brick() {
        let mut ctx = test_context();
        let mut scene = scene(&ctx, "Tile Brick 4 1\n");
        assert_eq!(scene.entities().query_by_tag("tile").len(), 4);

        scene.do_action(&Action::start("SHOOT"), &mut ctx).unwrap();
        scene.simulate(&mut ctx, 1).unwrap();
        scene.do_action(&Action::end("SHOOT"), &mut ctx).unwrap();
        scene.simulate(&mut ctx, 19).unwrap();

        assert!(scene.entities().query_by_tag("bullet").is_empty());
        assert_eq!(scene.bullet_count(), 0);
        assert_eq!(scene.entities().query_by_tag("tile").len(), 3);
    }

    #[test]
    fn test_head_bump_on_question_spawns_coin() {
        let mut ctx = test_context();
        let mut scene = scene(&ctx, "Tile Question 1 3\n");

        scene.do_action(&Action::start("JUMP"), &mut ctx).unwrap();
        scene.simulate(&mut ctx, 8).unwrap();

        let coins = scene.entities().query_by_tag("coin");
        assert_eq!(coins.len(), 1);
        assert_relative_eq!(scene.entities().get::<Transform>(coins[0]).unwrap().pos, Vec2::new(96.0, 480.0));

        let question = scene
            .entities()
            .query_by_tag("tile")
            .into_iter()
            .find(|&t| scene.entities().get::<Transform>(t).unwrap().pos.y < 600.0)
            .unwrap();
        assert_eq!(animation_name(scene.entities(), &ctx.assets, question), Some("QuestionHit"));
    }

    #[test]
    fn test_falling_out_respawns_at_start() {
        let mut ctx = test_context();
        let mut scene = PlayScene::from_source(&ctx, "empty", "").unwrap();

        let mut respawned = false;
        let mut last_y = player_pos(&scene).y;
        for _ in 0..100 {
            scene.simulate(&mut ctx, 1).unwrap();
            let y = player_pos(&scene).y;
            assert!(y <= 768.0);
            respawned |= y < last_y;
            last_y = y;
        }
        assert!(respawned);
    }

    #[test]
    fn test_pause_only_syncs() {
        let mut ctx = test_context();
        let mut scene = scene(&ctx, "");

        scene.do_action(&Action::start("PAUSE"), &mut ctx).unwrap();
        scene.do_action(&Action::start("RIGHT"), &mut ctx).unwrap();
        scene.simulate(&mut ctx, 5).unwrap();

        assert!(scene.is_paused());
        assert_eq!(scene.current_frame(), 0);
        assert_relative_eq!(player_pos(&scene), Vec2::new(96.0, 672.0));
        assert_eq!(scene.clear_color(&ctx), PAUSE_COLOR);
    }

    #[test]
    fn test_disabled_actions_are_ignored() {
        let mut ctx = test_context();
        let mut scene = scene(&ctx, "");
        scene.systems.action = false;

        scene.do_action(&Action::start("PAUSE"), &mut ctx).unwrap();
        assert!(!scene.is_paused());
    }

    #[test]
    fn test_quit_returns_to_menu() {
        let mut ctx = test_context();
        let mut scene = scene(&ctx, "");

        scene.do_action(&Action::start("QUIT"), &mut ctx).unwrap();
        assert!(scene.has_ended());
        assert_eq!(ctx.pending_commands(), 1);
    }

    #[test]
    fn test_render_layers() {
        let ctx = test_context();
        let mut scene = scene(&ctx, "");
        let mut renderer = HeadlessRenderer::new();

        let mut frame = |scene: &PlayScene| {
            renderer.begin_frame(scene.clear_color(&ctx)).unwrap();
            scene.render(&ctx, &mut renderer).unwrap();
            renderer.end_frame().unwrap();
            renderer.last_frame()
        };

        let stats = frame(&scene);
        assert_eq!(stats.sprites, 4);
        assert_eq!(stats.rects, 0);

        scene.draw.collision = true;
        scene.draw.grid = true;
        let stats = frame(&scene);
        assert_eq!(stats.rects, 4);
        assert_eq!(stats.lines, 33);
        assert_eq!(stats.texts, 252);

        scene.systems.render = false;
        assert_eq!(frame(&scene).sprites, 0);
    }

    #[test]
    fn test_missing_level_file() {
        let ctx = test_context();
        assert!(matches!(PlayScene::new(&ctx, "missing/level.txt"), Err(SceneError::Setup(_))));
    }
}
