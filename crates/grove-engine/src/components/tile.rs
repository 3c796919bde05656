//! Static map tiles.

use glam::Vec2;

use crate::components::rect::Rect;
use crate::components::sprite::Image;

/// Tile category. Decides whether a tile is drawn and whether it blocks movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Invisible collision-only cell (map edges, water, cliffs).
    Boundary,
    /// Bush/grass variant picked at random.
    Grass,
    /// Tree, rock or statue selected by cell code.
    Object,
}

impl TileKind {
    pub fn is_visible(self) -> bool {
        !matches!(self, TileKind::Boundary)
    }

    /// Every current category blocks movement.
    pub fn is_solid(self) -> bool {
        true
    }
}

/// A static map entity. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Grid-aligned world position of the cell's top-left corner.
    pub pos: Vec2,
    pub kind: TileKind,
    /// Render box.
    pub rect: Rect,
    /// Collision box, centered in `rect` and shorter by the hitbox inset.
    pub hitbox: Rect,
    /// None for invisible tiles.
    pub image: Option<Image>,
}

impl Tile {
    /// Invisible, solid-only cell of `tile_size`.
    pub fn boundary(pos: Vec2, tile_size: f32, inset: f32) -> Self {
        let rect = Rect::from_top_left(pos, Vec2::splat(tile_size));
        Self {
            pos,
            kind: TileKind::Boundary,
            rect,
            hitbox: rect.inflate(0.0, -inset),
            image: None,
        }
    }

    /// Visible tile. Images taller than a cell stand on the cell: the render box
    /// bottom sits on the cell bottom and overhangs upward.
    pub fn visible(pos: Vec2, kind: TileKind, image: Image, tile_size: f32, inset: f32) -> Self {
        let overhang = (image.height() - tile_size).max(0.0);
        let rect = image.rect_at(Vec2::new(pos.x, pos.y - overhang));
        Self {
            pos,
            kind,
            rect,
            hitbox: rect.inflate(0.0, -inset),
            image: Some(image),
        }
    }
}
