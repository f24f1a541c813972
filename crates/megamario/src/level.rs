//! Level files
//!
//! One element per line: `Tile|Dec AnimationName X Y`, with X and Y in grid
//! cells counted from the bottom-left corner. Blank lines and lines
//! starting with `#` are ignored. Malformed lines are reported and skipped.

use mario_engine::assets::AssetManager;
use mario_engine::ecs::components::{Animation, BoundingBox, Transform};
use mario_engine::ecs::EntityManager;
use mario_engine::foundation::math::Vec2;
use mario_engine::scene::SceneError;
use std::path::Path;
use thiserror::Error;

/// Side of one grid cell in pixels
pub const GRID_SIZE: f32 = 64.0;

/// Level loading errors
#[derive(Error, Debug)]
pub enum LevelError {
    /// The level file could not be read
    #[error("Could not open level file {path}: {source}")]
    Io {
        /// Level file path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A line was rejected
    #[error("Error line {line}: {reason}")]
    Line {
        /// 1-based line number
        line: usize,
        /// What was wrong
        reason: String,
    },
}

impl From<LevelError> for SceneError {
    fn from(e: LevelError) -> Self {
        Self::Setup(e.to_string())
    }
}

/// Kind of level element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Solid tile with a bounding box
    Tile,
    /// Decoration without collision
    Dec,
}

impl ElementKind {
    /// Entity tag used for this kind
    pub fn tag(self) -> &'static str {
        match self {
            Self::Tile => "tile",
            Self::Dec => "dec",
        }
    }
}

/// Counts of what a level load produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Tiles spawned
    pub tiles: usize,
    /// Decorations spawned
    pub decorations: usize,
    /// Lines rejected
    pub skipped: usize,
}

/// Pixel position of the centre of an element placed at grid cell `grid`
///
/// `frame_size` offsets the element so its bottom-left corner sits on the
/// cell corner. The y axis is flipped so row 0 is the bottom of the window.
pub fn grid_to_mid_pixel(grid: Vec2, frame_size: Vec2, window_height: f32) -> Vec2 {
    let mut pos = grid * GRID_SIZE + frame_size * 0.5;
    pos.y = window_height - pos.y;
    pos
}

struct Element<'a> {
    kind: ElementKind,
    animation: &'a str,
    grid: Vec2,
}

fn parse_line(line: &str) -> Result<Option<Element<'_>>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let &[kind, animation, x, y] = words.as_slice() else {
        return Err("incorrect number of elements".to_string());
    };

    let kind = match kind {
        "Tile" => ElementKind::Tile,
        "Dec" => ElementKind::Dec,
        _ => return Err("element must be Tile or Dec".to_string()),
    };
    let coord = |s: &str| s.parse::<f32>().map_err(|e| format!("invalid coordinate {s}: {e}"));

    Ok(Some(Element {
        kind,
        animation,
        grid: Vec2::new(coord(x)?, coord(y)?),
    }))
}

/// Spawn the elements described by `source` into `entities`
///
/// Rejected lines are logged with their line number and skipped; no entity
/// is created for them.
pub fn load_level(source: &str, entities: &mut EntityManager, assets: &AssetManager, window_height: f32) -> LevelStats {
    let mut stats = LevelStats::default();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let spawned = parse_line(line).and_then(|element| match element {
            Some(element) => spawn_element(&element, entities, assets, window_height).map(Some),
            None => Ok(None),
        });

        match spawned {
            Ok(Some(ElementKind::Tile)) => stats.tiles += 1,
            Ok(Some(ElementKind::Dec)) => stats.decorations += 1,
            Ok(None) => {}
            Err(reason) => {
                log::warn!("{}", LevelError::Line { line: line_number, reason });
                stats.skipped += 1;
            }
        }
    }

    log::debug!(
        "Level loaded: {} tiles, {} decorations, {} lines skipped",
        stats.tiles,
        stats.decorations,
        stats.skipped
    );
    stats
}

fn spawn_element(
    element: &Element<'_>,
    entities: &mut EntityManager,
    assets: &AssetManager,
    window_height: f32,
) -> Result<ElementKind, String> {
    let handle = assets.animation_handle(element.animation).map_err(|e| e.to_string())?;
    let frame_size = assets
        .animation(handle)
        .map(|def| def.frame_size)
        .ok_or_else(|| format!("animation {} has no definition", element.animation))?;

    let entity = entities.add_entity(element.kind.tag());
    entities.add(entity, Animation::new(handle, true));
    entities.add(entity, Transform::new(grid_to_mid_pixel(element.grid, frame_size, window_height)));
    if element.kind == ElementKind::Tile {
        entities.add(entity, BoundingBox::new(frame_size));
    }
    Ok(element.kind)
}

/// Read and spawn a level file
pub fn load_level_file(
    path: impl AsRef<Path>,
    entities: &mut EntityManager,
    assets: &AssetManager,
    window_height: f32,
) -> Result<LevelStats, LevelError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Loading level {}", path.display());
    Ok(load_level(&source, entities, assets, window_height))
}
