//! Transient weapon sprite shown next to the player while an attack lasts.

use glam::Vec2;

use crate::assets::registry::AssetLibrary;
use crate::components::player::Player;
use crate::components::rect::Rect;
use crate::components::sprite::Image;
use crate::components::status::Facing;
use crate::error::LevelError;

/// Hand offset for side-facing swings (weapon sits a little below center).
const SIDE_OFFSET: Vec2 = Vec2::new(0.0, 16.0);
/// Hand offset for up/down swings (weapon sits a little left of center).
const VERTICAL_OFFSET: Vec2 = Vec2::new(-10.0, 0.0);

/// One weapon image per facing, loaded from `"weapon/<facing>"`.
#[derive(Debug, Clone)]
pub struct WeaponImages {
    by_facing: [Image; 4],
}

impl WeaponImages {
    pub fn from_library(library: &AssetLibrary) -> Result<Self, LevelError> {
        let pick = |facing: Facing| -> Result<Image, LevelError> {
            Ok(library.require(&format!("weapon/{}", facing.name()))?[0])
        };
        Ok(Self {
            by_facing: [
                pick(Facing::Up)?,
                pick(Facing::Down)?,
                pick(Facing::Left)?,
                pick(Facing::Right)?,
            ],
        })
    }

    pub fn get(&self, facing: Facing) -> Image {
        self.by_facing[facing as usize]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub facing: Facing,
    pub image: Image,
    pub rect: Rect,
}

impl Weapon {
    /// Weapon held on the side of `player` it faces.
    pub fn attached_to(player: &Player, images: &WeaponImages) -> Self {
        let facing = player.facing();
        let image = images.get(facing);
        let size = image.size;
        let body = player.rect;
        let top_left = match facing {
            // mid-left of the weapon on the player's mid-right
            Facing::Right => body.mid_right() + SIDE_OFFSET - Vec2::new(0.0, size.y / 2.0),
            // mid-right on mid-left
            Facing::Left => body.mid_left() + SIDE_OFFSET - Vec2::new(size.x, size.y / 2.0),
            // mid-top on mid-bottom
            Facing::Down => body.mid_bottom() + VERTICAL_OFFSET - Vec2::new(size.x / 2.0, 0.0),
            // mid-bottom on mid-top
            Facing::Up => body.mid_top() + VERTICAL_OFFSET - Vec2::new(size.x / 2.0, size.y),
        };
        Self {
            facing,
            image,
            rect: image.rect_at(top_left),
        }
    }
}
