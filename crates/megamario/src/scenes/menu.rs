//! Menu scene: level selection

use super::play::PlayScene;
use mario_engine::assets::FontHandle;
use mario_engine::backend::{RenderBackend, TextDraw};
use mario_engine::foundation::math::{Color, Vec2};
use mario_engine::input::{Action, ActionPhase, KeyCode};
use mario_engine::scene::{Scene, SceneBase, SceneError};
use mario_engine::EngineContext;

const TITLE: &str = "MegaMario";
const HELP: &str = "MOVE: ARROWS | PLAY: ENTER | QUIT/MENU: ESCAPE";
const QUIT_ITEM: &str = "Quit";

/// Level selection menu
pub struct MenuScene {
    base: SceneBase,
    items: Vec<String>,
    level_paths: Vec<String>,
    selected: usize,
    font: Option<FontHandle>,
}

impl MenuScene {
    /// Build the menu from the configured levels
    pub fn new(ctx: &EngineContext) -> Self {
        let mut base = SceneBase::new();
        base.register_action(KeyCode::Escape, "QUIT");
        base.register_action(KeyCode::Down, "DOWN");
        base.register_action(KeyCode::Up, "UP");
        base.register_action(KeyCode::Enter, "PLAY");
        base.register_action(KeyCode::R, "REFRESH");

        let levels = ctx.config.levels();
        let mut items: Vec<String> = levels.iter().map(|level| level.name.clone()).collect();
        items.push(QUIT_ITEM.to_string());

        Self {
            base,
            items,
            level_paths: levels.iter().map(|level| level.path.clone()).collect(),
            selected: 0,
            font: ctx.assets.font_handle("Consolas").ok(),
        }
    }

    /// Menu entries, levels first and "Quit" last
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Index of the highlighted entry
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn play_selected(&mut self, ctx: &mut EngineContext) {
        let Some(path) = self.level_paths.get(self.selected) else {
            self.on_end(ctx);
            return;
        };

        match PlayScene::new(ctx, path) {
            Ok(scene) => ctx.change_scene("PLAY", Box::new(scene), false),
            Err(e) => log::error!("Could not start {}: {}", self.items[self.selected], e),
        }
    }
}

impl Scene for MenuScene {
    fn update(&mut self, _ctx: &mut EngineContext) -> Result<(), SceneError> {
        self.base.entities.update();
        self.base.current_frame += 1;
        Ok(())
    }

    fn do_action(&mut self, action: &Action, ctx: &mut EngineContext) -> Result<(), SceneError> {
        if action.phase != ActionPhase::Start {
            return Ok(());
        }

        match action.name.as_str() {
            "QUIT" => self.on_end(ctx),
            "DOWN" => self.selected = (self.selected + 1).min(self.items.len() - 1),
            "UP" => self.selected = self.selected.saturating_sub(1),
            "PLAY" => self.play_selected(ctx),
            "REFRESH" => {
                let menu = Self::new(ctx);
                ctx.change_scene("MENU", Box::new(menu), false);
            }
            _ => {}
        }
        Ok(())
    }

    fn on_end(&mut self, ctx: &mut EngineContext) {
        self.base.has_ended = true;
        ctx.quit();
    }

    fn render(&self, ctx: &EngineContext, renderer: &mut dyn RenderBackend) -> Result<(), SceneError> {
        let size = ctx.window_size();
        renderer.set_view_center(size * 0.5);

        renderer.draw_text(&TextDraw {
            text: TITLE,
            font: self.font,
            size: 48,
            pos: Vec2::new(144.0, 48.0),
            color: Color::WHITE,
        });

        for (i, item) in self.items.iter().enumerate() {
            renderer.draw_text(&TextDraw {
                text: item,
                font: self.font,
                size: 36,
                pos: Vec2::new(92.0, 148.0 + 108.0 * i as f32),
                color: if i == self.selected { Color::WHITE } else { Color::BLACK },
            });
        }

        renderer.draw_text(&TextDraw {
            text: HELP,
            font: self.font,
            size: 24,
            pos: Vec2::new(24.0, size.y * 0.5 + 0.75 * size.y * 0.5),
            color: Color::WHITE,
        });
        Ok(())
    }

    fn base(&self) -> &SceneBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }
}
