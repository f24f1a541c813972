//! Game scenes

pub mod menu;
pub mod play;

pub use menu::MenuScene;
pub use play::{DrawToggles, PlayScene, SystemToggles};

#[cfg(test)]
pub(crate) mod test_support {
    use mario_engine::assets::AssetManager;
    use mario_engine::backend::HeadlessAudio;
    use mario_engine::config::{GameConfig, LevelConfig};
    use mario_engine::EngineContext;

    /// Context with every animation and sound the scenes use
    pub(crate) fn test_context() -> EngineContext {
        let mut config = GameConfig::default();
        config.window.framerate = 0;
        config.player.x = 1.0;
        config.player.y = 1.0;
        config.player.speed = 5.0;
        config.player.jump = 12.0;
        config.player.gravity = 0.75;
        config.bullet.speed = 10.0;
        config.bullet.radius = 8.0;
        config.bullet.lifespan = 60;
        for (key, name) in [("a", "Level 1"), ("b", "Level 2")] {
            config.level.insert(
                key.to_string(),
                LevelConfig {
                    name: name.to_string(),
                    path: format!("missing/{key}.txt"),
                },
            );
        }

        let mut assets = AssetManager::new();
        assets.add_texture("Tiles", "tiles.png", Some((64, 64))).unwrap();
        assets.add_texture("Strip", "strip.png", Some((256, 64))).unwrap();
        for name in [
            "Idle", "IdleShoot", "Run", "RunShoot", "Air", "AirShoot", "Buster", "Ground", "Brick", "Question",
            "QuestionHit", "BrickDebris", "CoinSpin",
        ] {
            assets.add_animation(name, "Tiles", 1, 1).unwrap();
        }
        assets.add_animation("Explosion", "Strip", 4, 1).unwrap();
        for name in ["Jump", "Shoot", "Explosion", "Debris", "Coin"] {
            assets.add_sound(name, format!("{name}.wav"));
        }

        EngineContext::new(config, assets, Box::new(HeadlessAudio::default()))
    }
}
