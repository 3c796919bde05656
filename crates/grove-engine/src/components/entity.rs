use crate::api::types::EntityId;
use crate::components::rect::Rect;
use crate::components::sprite::Image;
use crate::components::tile::{Tile, TileKind};

/// What an entity in the render group stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Tile(TileKind),
    Player,
    Weapon,
}

/// Fat entity: one struct for anything drawn in the world.
/// Game logic owns the authoritative state and syncs it in here by id.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    pub kind: EntityKind,
    /// Whether this entity is active (inactive entities are skipped when drawing).
    pub active: bool,
    /// Render box in world space.
    pub rect: Rect,
    /// Collision box in world space.
    pub hitbox: Rect,
    /// Current image (entities without one are not drawn).
    pub image: Option<Image>,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            active: true,
            rect: Rect::default(),
            hitbox: Rect::default(),
            image: None,
        }
    }

    /// Visible entity for a map tile.
    pub fn from_tile(id: EntityId, tile: &Tile) -> Self {
        Self {
            id,
            kind: EntityKind::Tile(tile.kind),
            active: true,
            rect: tile.rect,
            hitbox: tile.hitbox,
            image: tile.image,
        }
    }

    // -- Builder pattern --

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_hitbox(mut self, hitbox: Rect) -> Self {
        self.hitbox = hitbox;
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }
}
