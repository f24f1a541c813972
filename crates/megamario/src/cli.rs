//! Command line front end

use crate::scenes::{MenuScene, PlayScene};
use crate::GameError;
use clap::Parser;
use mario_engine::config::GameConfig;
use mario_engine::foundation::time::Stopwatch;
use mario_engine::input::ScriptedInput;
use mario_engine::{Backends, GameEngine};
use ron::ser::PrettyConfig;
use std::path::PathBuf;

/// MegaMario, a headless-capable platformer
#[derive(Parser, Debug)]
#[command(version, about = "MegaMario: run the menu or a level, driven by scripted key events")]
pub struct Cli {
    /// Game config file (.toml or .ron)
    #[arg(long, value_name = "PATH", default_value = "resources/config.toml")]
    pub config: PathBuf,

    /// Stop after this many frames instead of waiting for a quit
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,

    /// Start straight in the named level instead of the menu
    #[arg(long, value_name = "NAME")]
    pub level: Option<String>,

    /// Scripted key event, e.g. `30:press:Right`; may be repeated
    #[arg(long = "input", value_name = "FRAME:press|release:KEY")]
    pub inputs: Vec<String>,

    /// Log the current scene's entities when the run ends
    #[arg(long)]
    pub dump_entities: bool,
}

/// Load the config, build the engine and run it
pub fn run(cli: &Cli) -> Result<(), GameError> {
    let stopwatch = Stopwatch::start_new();

    let config = GameConfig::load(&cli.config)?;
    let level = match &cli.level {
        Some(name) => Some(
            config
                .level_by_name(name)
                .cloned()
                .ok_or_else(|| GameError::UnknownLevel(name.clone()))?,
        ),
        None => None,
    };

    let input = ScriptedInput::parse(cli.inputs.as_slice())?;
    let mut engine = GameEngine::new(config, Backends::headless().with_input(input))?;

    let menu = MenuScene::new(engine.context());
    engine.change_scene("MENU", Box::new(menu), true);
    if let Some(level) = level {
        let play = PlayScene::new(engine.context(), &level.path)?;
        engine.change_scene("PLAY", Box::new(play), false);
    }

    match cli.frames {
        Some(frames) => {
            let ran = engine.run_frames(frames)?;
            log::info!("Ran {ran} frames");
        }
        None => engine.run()?,
    }

    if cli.dump_entities {
        if let Some(scene) = engine.current_scene() {
            let dump = ron::ser::to_string_pretty(&scene.entities().snapshot(), PrettyConfig::default())?;
            log::info!("Entities in {}:\n{dump}", engine.current_scene_name());
        }
    }

    log::info!("Finished in {:.1} ms", stopwatch.elapsed_millis());
    Ok(())
}
