//! Asset management system
//!
//! The asset provider: registers named fonts, textures, animations, sounds
//! and music, and hands out copyable handles. Components store those handles
//! and never own or free the assets behind them. Decoding pixel and audio
//! data is left to the render and audio backends; this module only keeps the
//! metadata gameplay code needs (frame counts, frame sizes, paths).

use crate::foundation::collections::{HandleMap, TypedHandle};
use crate::foundation::math::Vec2;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Handle to a registered texture
pub type TextureHandle = TypedHandle<TextureDef>;

/// Handle to a registered animation
pub type AnimationHandle = TypedHandle<AnimationDef>;

/// Handle to a registered sound effect
pub type SoundHandle = TypedHandle<SoundDef>;

/// Handle to a registered font
pub type FontHandle = TypedHandle<FontDef>;

/// Handle to a registered music track
pub type MusicHandle = TypedHandle<MusicDef>;

/// Texture metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDef {
    /// Logical name
    pub name: String,
    /// Image file
    pub path: PathBuf,
    /// Width and height in pixels
    pub size: (u32, u32),
}

/// Sprite-sheet animation laid out horizontally in one texture
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Logical name
    pub name: String,
    /// Sprite sheet
    pub texture: TextureHandle,
    /// Number of frames in the sheet (never 0)
    pub frame_count: u32,
    /// Game frames per animation frame (never 0)
    pub speed: u32,
    /// Size of one frame in pixels
    pub frame_size: Vec2,
}

/// Sound effect metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundDef {
    /// Logical name
    pub name: String,
    /// Audio file
    pub path: PathBuf,
}

/// Font metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDef {
    /// Logical name
    pub name: String,
    /// Font file
    pub path: PathBuf,
}

/// Music track metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicDef {
    /// Logical name
    pub name: String,
    /// Audio file
    pub path: PathBuf,
}

/// Asset categories, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Texture
    Texture,
    /// Animation
    Animation,
    /// Sound effect
    Sound,
    /// Font
    Font,
    /// Music track
    Music,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Texture => "texture",
            Self::Animation => "animation",
            Self::Sound => "sound",
            Self::Font => "font",
            Self::Music => "music",
        };
        f.write_str(name)
    }
}

/// Asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// No asset of this kind is registered under the name
    #[error("Unknown {kind}: {name}")]
    NotFound {
        /// Asset category
        kind: AssetKind,
        /// Requested name
        name: String,
    },

    /// Image metadata could not be read
    #[error("Image error: {0}")]
    Image(String),

    /// Animation parameters are unusable
    #[error("Invalid animation: {0}")]
    InvalidAnimation(String),
}

/// One registry per asset kind: storage plus a name index
struct Registry<T> {
    items: HandleMap<T>,
    names: HashMap<String, TypedHandle<T>>,
    kind: AssetKind,
}

impl<T> Registry<T> {
    fn new(kind: AssetKind) -> Self {
        Self {
            items: HandleMap::new(),
            names: HashMap::new(),
            kind,
        }
    }

    /// Register `value` under `name`, replacing any previous entry in place
    fn insert(&mut self, name: &str, value: T) -> TypedHandle<T> {
        if let Some(&handle) = self.names.get(name) {
            self.items.replace(handle, value);
            return handle;
        }
        let handle = self.items.insert(value);
        self.names.insert(name.to_string(), handle);
        handle
    }

    fn handle(&self, name: &str) -> Result<TypedHandle<T>, AssetError> {
        self.names.get(name).copied().ok_or_else(|| AssetError::NotFound {
            kind: self.kind,
            name: name.to_string(),
        })
    }

    fn get(&self, handle: TypedHandle<T>) -> Option<&T> {
        self.items.get(handle)
    }
}

/// Asset management system
pub struct AssetManager {
    textures: Registry<TextureDef>,
    animations: Registry<AnimationDef>,
    sounds: Registry<SoundDef>,
    fonts: Registry<FontDef>,
    music: Registry<MusicDef>,
}

impl AssetManager {
    /// Create an empty asset manager
    pub fn new() -> Self {
        Self {
            textures: Registry::new(AssetKind::Texture),
            animations: Registry::new(AssetKind::Animation),
            sounds: Registry::new(AssetKind::Sound),
            fonts: Registry::new(AssetKind::Font),
            music: Registry::new(AssetKind::Music),
        }
    }

    /// Register a texture
    ///
    /// When `size` is `None` the dimensions are read from the image header.
    pub fn add_texture(
        &mut self,
        name: &str,
        path: impl AsRef<Path>,
        size: Option<(u32, u32)>,
    ) -> Result<TextureHandle, AssetError> {
        let path = path.as_ref();
        let size = match size {
            Some(size) => size,
            None => image::image_dimensions(path)
                .map_err(|e| AssetError::Image(format!("{}: {}", path.display(), e)))?,
        };

        log::debug!("Texture {} is {}x{}", name, size.0, size.1);
        Ok(self.textures.insert(
            name,
            TextureDef {
                name: name.to_string(),
                path: path.to_path_buf(),
                size,
            },
        ))
    }

    /// Register an animation over a previously registered texture
    ///
    /// A speed of 0 is treated as 1.
    pub fn add_animation(
        &mut self,
        name: &str,
        texture_name: &str,
        frame_count: u32,
        speed: u32,
    ) -> Result<AnimationHandle, AssetError> {
        if frame_count == 0 {
            return Err(AssetError::InvalidAnimation(format!("{name} has no frames")));
        }

        let texture = self.textures.handle(texture_name)?;
        let (width, height) = self
            .textures
            .get(texture)
            .map(|t| t.size)
            .ok_or_else(|| AssetError::NotFound {
                kind: AssetKind::Texture,
                name: texture_name.to_string(),
            })?;

        let def = AnimationDef {
            name: name.to_string(),
            texture,
            frame_count,
            speed: speed.max(1),
            frame_size: Vec2::new((width / frame_count) as f32, height as f32),
        };
        Ok(self.animations.insert(name, def))
    }

    /// Register a sound effect
    pub fn add_sound(&mut self, name: &str, path: impl AsRef<Path>) -> SoundHandle {
        self.sounds.insert(
            name,
            SoundDef {
                name: name.to_string(),
                path: path.as_ref().to_path_buf(),
            },
        )
    }

    /// Register a font
    pub fn add_font(&mut self, name: &str, path: impl AsRef<Path>) -> FontHandle {
        self.fonts.insert(
            name,
            FontDef {
                name: name.to_string(),
                path: path.as_ref().to_path_buf(),
            },
        )
    }

    /// Register a music track
    pub fn add_music(&mut self, name: &str, path: impl AsRef<Path>) -> MusicHandle {
        self.music.insert(
            name,
            MusicDef {
                name: name.to_string(),
                path: path.as_ref().to_path_buf(),
            },
        )
    }

    /// Look up a texture by name
    pub fn texture_handle(&self, name: &str) -> Result<TextureHandle, AssetError> {
        self.textures.handle(name)
    }

    /// Look up an animation by name
    pub fn animation_handle(&self, name: &str) -> Result<AnimationHandle, AssetError> {
        self.animations.handle(name)
    }

    /// Look up a sound by name
    pub fn sound_handle(&self, name: &str) -> Result<SoundHandle, AssetError> {
        self.sounds.handle(name)
    }

    /// Look up a font by name
    pub fn font_handle(&self, name: &str) -> Result<FontHandle, AssetError> {
        self.fonts.handle(name)
    }

    /// Look up a music track by name
    pub fn music_handle(&self, name: &str) -> Result<MusicHandle, AssetError> {
        self.music.handle(name)
    }

    /// Texture metadata
    pub fn texture(&self, handle: TextureHandle) -> Option<&TextureDef> {
        self.textures.get(handle)
    }

    /// Animation definition
    pub fn animation(&self, handle: AnimationHandle) -> Option<&AnimationDef> {
        self.animations.get(handle)
    }

    /// Sound metadata
    pub fn sound(&self, handle: SoundHandle) -> Option<&SoundDef> {
        self.sounds.get(handle)
    }

    /// Font metadata
    pub fn font(&self, handle: FontHandle) -> Option<&FontDef> {
        self.fonts.get(handle)
    }

    /// Music metadata
    pub fn music(&self, handle: MusicHandle) -> Option<&MusicDef> {
        self.music.get(handle)
    }

    /// Number of registered animations
    pub fn animation_count(&self) -> usize {
        self.animations.items.len()
    }
}

impl Default for AssetManager {
    fn default() -> Self {
        Self::new()
    }
}
