//! Bounding shape components used for collision tests

use crate::foundation::math::Vec2;

/// Axis-aligned box centred on the entity position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Full size
    pub size: Vec2,

    /// Half of `size`, cached for overlap tests
    pub half_size: Vec2,
}

impl BoundingBox {
    /// Create a bounding box of the given size
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            half_size: size * 0.5,
        }
    }
}

/// Convex polygon, points relative to the entity position
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundingConvex {
    /// Polygon vertices in winding order
    pub points: Vec<Vec2>,
}

impl BoundingConvex {
    /// Create a polygon from its vertices
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Polygon matching an axis-aligned box of the given size
    pub fn from_box(size: Vec2) -> Self {
        let h = size * 0.5;
        Self::new(vec![
            Vec2::new(-h.x, -h.y),
            Vec2::new(h.x, -h.y),
            Vec2::new(h.x, h.y),
            Vec2::new(-h.x, h.y),
        ])
    }

    /// Vertices translated to `pos`
    pub fn world_points(&self, pos: Vec2) -> Vec<Vec2> {
        self.points.iter().map(|p| p + pos).collect()
    }

    /// Smallest bounding box enclosing the polygon
    pub fn aabb(&self) -> BoundingBox {
        if self.points.is_empty() {
            return BoundingBox::new(Vec2::zeros());
        }

        let mut min = Vec2::new(f32::MAX, f32::MAX);
        let mut max = Vec2::new(f32::MIN, f32::MIN);
        for p in &self.points {
            min = min.inf(p);
            max = max.sup(p);
        }
        BoundingBox::new(max - min)
    }
}
