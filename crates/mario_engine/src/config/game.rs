//! Game configuration sections

use super::{Config, ConfigError, ConfigFormat};
use crate::foundation::math::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// Target frames per second, 0 for unlimited
    pub framerate: u32,
    /// Clear colour as RGBA
    pub color: [u8; 4],
}

impl WindowConfig {
    /// Clear colour
    pub fn clear_color(&self) -> Color {
        Color::from(self.color)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 768,
            title: "MegaMario".to_string(),
            framerate: 60,
            color: [0, 0, 0, 255],
        }
    }
}

/// Player tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn column on the level grid
    pub x: f32,
    /// Spawn row on the level grid
    pub y: f32,
    /// Horizontal speed
    pub speed: f32,
    /// Initial jump strength
    pub jump: f32,
    /// Gravity per frame
    pub gravity: f32,
    /// Maximum falling speed
    pub max_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            speed: 0.0,
            jump: 0.0,
            gravity: 0.0,
            max_speed: 20.0,
        }
    }
}

/// Bullet tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Horizontal speed
    pub speed: f32,
    /// Collision radius
    pub radius: f32,
    /// Lifetime in frames
    pub lifespan: u64,
}

/// A level file entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Name shown in the menu
    pub name: String,
    /// Path of the level file
    pub path: String,
}

/// A font entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font name
    pub name: String,
    /// Font file path
    pub path: String,
}

/// A texture entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    /// Texture name
    pub name: String,
    /// Image file path
    pub path: String,
    /// Width in pixels; read from the image when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels; read from the image when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl TextureConfig {
    /// Explicit size, if both dimensions are given
    pub fn size(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }
}

/// An animation entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Animation name
    pub name: String,
    /// Name of the texture it slices
    pub texture: String,
    /// Number of frames laid out horizontally
    pub frames: u32,
    /// Game frames per sprite frame
    pub speed: u32,
}

/// A sound effect entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Sound name
    pub name: String,
    /// Audio file path
    pub path: String,
}

/// A music track entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    /// Track name
    pub name: String,
    /// Audio file path
    pub path: String,
}

/// Complete game configuration
///
/// Every section is optional. Subsection tables such as `[texture.mario]`
/// are keyed by an arbitrary string and returned ordered by that key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Player tuning
    pub player: PlayerConfig,
    /// Bullet tuning
    pub bullet: BulletConfig,
    /// Levels
    pub level: BTreeMap<String, LevelConfig>,
    /// Fonts
    pub font: BTreeMap<String, FontConfig>,
    /// Textures
    pub texture: BTreeMap<String, TextureConfig>,
    /// Animations
    pub animation: BTreeMap<String, AnimationConfig>,
    /// Sound effects
    pub sound: BTreeMap<String, SoundConfig>,
    /// Music tracks
    pub music: BTreeMap<String, MusicConfig>,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Top-level section names
    pub const SECTIONS: [&'static str; 9] = [
        "window",
        "player",
        "bullet",
        "level",
        "font",
        "texture",
        "animation",
        "sound",
        "music",
    ];

    /// Load from a `.toml` or `.ron` file, warning about missing sections
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        log::info!("Loading config from {}", path.display());
        match format {
            ConfigFormat::Toml => Self::from_toml_str(&contents),
            ConfigFormat::Ron => Self::from_str_as(&contents, format),
        }
    }

    /// Parse TOML text, warning about missing sections
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))?;
        for section in Self::missing_sections(&table) {
            log::warn!("Could not find {section} section in the config file");
        }
        Self::from_str_as(contents, ConfigFormat::Toml)
    }

    fn missing_sections(table: &toml::Table) -> impl Iterator<Item = &'static str> + '_ {
        Self::SECTIONS
            .into_iter()
            .filter(|section| !table.contains_key(*section))
    }

    /// Levels ordered by key
    pub fn levels(&self) -> Vec<&LevelConfig> {
        self.level.values().collect()
    }

    /// Fonts ordered by key
    pub fn fonts(&self) -> Vec<&FontConfig> {
        self.font.values().collect()
    }

    /// Textures ordered by key
    pub fn textures(&self) -> Vec<&TextureConfig> {
        self.texture.values().collect()
    }

    /// Animations ordered by key
    pub fn animations(&self) -> Vec<&AnimationConfig> {
        self.animation.values().collect()
    }

    /// Sound effects ordered by key
    pub fn sounds(&self) -> Vec<&SoundConfig> {
        self.sound.values().collect()
    }

    /// Music tracks ordered by key
    pub fn music_tracks(&self) -> Vec<&MusicConfig> {
        self.music.values().collect()
    }

    /// Find a level by its display name
    pub fn level_by_name(&self, name: &str) -> Option<&LevelConfig> {
        self.level.values().find(|level| level.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = r#"
[window]
width = 1280
height = 768
title = "MegaMario"
framerate = 60
color = [10, 20, 30, 255]

[player]
x = 3
y = 7
speed = 5.0
jump = 12.5
gravity = 0.75

[bullet]
speed = 10.0
radius = 8.0
lifespan = 60

[level.b]
name = "Level 2"
path = "levels/level2.txt"

[level.a]
name = "Level 1"
path = "levels/level1.txt"

[texture.ground]
name = "Ground"
path = "textures/ground.png"
width = 64
height = 64

[animation.run]
name = "Run"
texture = "MarioRun"
frames = 3
speed = 6
"#;

    #[test]
    fn test_parse_sections() {
        let config = GameConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.clear_color(), Color::rgba(10, 20, 30, 255));
        assert_relative_eq!(config.player.x, 3.0);
        assert_relative_eq!(config.player.gravity, 0.75);
        assert_relative_eq!(config.player.max_speed, 20.0);
        assert_eq!(config.bullet.lifespan, 60);

        assert_eq!(config.textures()[0].size(), Some((64, 64)));
        assert_eq!(config.animations()[0].frames, 3);
        assert!(config.fonts().is_empty());
    }

    #[test]
    fn test_subsections_are_ordered_by_key() {
        let config = GameConfig::from_toml_str(SAMPLE).unwrap();
        let names: Vec<_> = config.levels().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Level 1", "Level 2"]);
        assert_eq!(config.level_by_name("Level 2").map(|l| l.path.as_str()), Some("levels/level2.txt"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = GameConfig::from_toml_str("[bullet]\nspeed = 4.0\n").unwrap();
        assert_eq!(config.window, WindowConfig::default());
        assert_relative_eq!(config.bullet.speed, 4.0);
        assert_eq!(config.bullet.lifespan, 0);

        let table: toml::Table = "[bullet]\n".parse().unwrap();
        let missing: Vec<_> = GameConfig::missing_sections(&table).collect();
        assert_eq!(missing.len(), 8);
        assert!(!missing.contains(&"bullet"));
    }

    #[test]
    fn test_texture_without_size() {
        let texture = TextureConfig {
            name: "t".into(),
            path: "t.png".into(),
            width: Some(32),
            height: None,
        };
        assert_eq!(texture.size(), None);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(GameConfig::from_toml_str("[window"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unsupported_format() {
        let err = GameConfig::load("config.ini").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
