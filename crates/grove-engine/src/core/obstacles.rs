use crate::api::types::EntityId;
use crate::components::rect::Rect;

/// A solid collision box registered at map-build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: EntityId,
    pub hitbox: Rect,
}

/// Every collision box that blocks movement, in insertion order.
/// The player reads it during collision; nothing writes to it mid-frame.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: EntityId, hitbox: Rect) {
        self.obstacles.push(Obstacle { id, hitbox });
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.obstacles.iter().any(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
