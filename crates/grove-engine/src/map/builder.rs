//! Turns layered grids and image collections into tiles and a player.
//!
//! Everything is validated before the first tile is placed, so a build either
//! produces a complete map or an error, never a partial one.

use crate::api::config::LevelConfig;
use crate::api::types::{EntityId, IdAllocator};
use crate::assets::registry::AssetLibrary;
use crate::components::animation::AnimationSet;
use crate::components::entity::{Entity, EntityKind};
use crate::components::player::Player;
use crate::components::sprite::Image;
use crate::components::tile::{Tile, TileKind};
use crate::components::weapon::WeaponImages;
use crate::core::obstacles::ObstacleSet;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::error::LevelError;
use crate::map::layout::{
    cell_to_world, LayoutGrid, MapData, BOUNDARY_LAYER, GRASS_LAYER, OBJECT_LAYER,
};

/// Image collection for grass variants.
pub const GRASS_IMAGES: &str = "grass";
/// Image collection indexed by object codes.
pub const OBJECT_IMAGES: &str = "objects";
/// Prefix of the per-status player animation collections.
pub const PLAYER_ANIMATION_PREFIX: &str = "player/";

/// Result of a build: both groups, populated, plus the player.
pub struct BuiltMap {
    pub scene: Scene,
    pub obstacles: ObstacleSet,
    pub player: Player,
    pub player_id: EntityId,
    pub weapon_images: WeaponImages,
    pub ids: IdAllocator,
}

struct Validated<'a> {
    boundary: &'a LayoutGrid,
    grass: &'a LayoutGrid,
    object: &'a LayoutGrid,
    grass_images: &'a [Image],
    object_images: &'a [Image],
    animations: AnimationSet,
    weapon_images: WeaponImages,
}

pub struct MapBuilder<'a> {
    config: &'a LevelConfig,
    assets: &'a AssetLibrary,
    rng: Rng,
    ids: IdAllocator,
    scene: Scene,
    obstacles: ObstacleSet,
}

impl<'a> MapBuilder<'a> {
    pub fn new(config: &'a LevelConfig, assets: &'a AssetLibrary) -> Self {
        let rng = match config.grass_seed {
            Some(seed) => Rng::new(seed),
            None => Rng::from_time(),
        };
        Self {
            config,
            assets,
            rng,
            ids: IdAllocator::new(),
            scene: Scene::new(),
            obstacles: ObstacleSet::new(),
        }
    }

    /// Build every layer (boundary, grass, object; rows then columns), then
    /// spawn the player.
    pub fn build(mut self, map: &MapData) -> Result<BuiltMap, LevelError> {
        let v = self.validate(map)?;

        let boundary = self.place_boundary(v.boundary);
        let grass = self.place_grass(v.grass, v.grass_images)?;
        let objects = self.place_objects(v.object, v.object_images)?;
        log::info!(
            "map built: {} boundary, {} grass, {} object tiles",
            boundary,
            grass,
            objects
        );

        let player_id = self.ids.next_id();
        let player = Player::new(self.config.spawn(), &self.config.player, v.animations);
        self.scene.spawn(
            Entity::new(player_id, EntityKind::Player)
                .with_rect(player.rect)
                .with_hitbox(player.hitbox)
                .with_image(player.image),
        );
        log::info!("player spawned at {:?}", self.config.spawn());

        Ok(BuiltMap {
            scene: self.scene,
            obstacles: self.obstacles,
            player,
            player_id,
            weapon_images: v.weapon_images,
            ids: self.ids,
        })
    }

    fn validate<'m>(&self, map: &'m MapData) -> Result<Validated<'m>, LevelError>
    where
        'a: 'm,
    {
        Ok(Validated {
            boundary: map.require(BOUNDARY_LAYER)?,
            grass: map.require(GRASS_LAYER)?,
            object: map.require(OBJECT_LAYER)?,
            grass_images: self.assets.require(GRASS_IMAGES)?,
            object_images: self.assets.require(OBJECT_IMAGES)?,
            animations: AnimationSet::from_library(self.assets, PLAYER_ANIMATION_PREFIX)?,
            weapon_images: WeaponImages::from_library(self.assets)?,
        })
    }

    fn place_boundary(&mut self, grid: &LayoutGrid) -> usize {
        let mut placed = 0;
        for (row, col, _) in grid.occupied() {
            let pos = cell_to_world(col, row, self.config.tile_size);
            self.place_tile(Tile::boundary(
                pos,
                self.config.tile_size,
                self.config.tile_hitbox_inset,
            ));
            placed += 1;
        }
        placed
    }

    fn place_grass(&mut self, grid: &LayoutGrid, images: &[Image]) -> Result<usize, LevelError> {
        let mut placed = 0;
        for (row, col, _) in grid.occupied() {
            let image = *self
                .rng
                .pick(images)
                .ok_or_else(|| LevelError::MissingAsset(GRASS_IMAGES.to_string()))?;
            self.place_visible(col, row, TileKind::Grass, image);
            placed += 1;
        }
        Ok(placed)
    }

    fn place_objects(&mut self, grid: &LayoutGrid, images: &[Image]) -> Result<usize, LevelError> {
        let mut placed = 0;
        for (row, col, code) in grid.occupied() {
            let index: usize = code.parse().map_err(|_| LevelError::InvalidCell {
                layer: OBJECT_LAYER.to_string(),
                row,
                col,
                code: code.to_string(),
            })?;
            let image = *images.get(index).ok_or(LevelError::IndexOutOfRange {
                code: index,
                len: images.len(),
                row,
                col,
            })?;
            self.place_visible(col, row, TileKind::Object, image);
            placed += 1;
        }
        Ok(placed)
    }

    fn place_visible(&mut self, col: usize, row: usize, kind: TileKind, image: Image) {
        let size = self.config.tile_size;
        let pos = cell_to_world(col, row, size);
        self.place_tile(Tile::visible(pos, kind, image, size, self.config.tile_hitbox_inset));
    }

    /// Register a tile under a fresh id: in the scene if its kind is visible,
    /// in the obstacle set if its kind is solid.
    fn place_tile(&mut self, tile: Tile) {
        let id = self.ids.next_id();
        if tile.kind.is_visible() {
            self.scene.spawn(Entity::from_tile(id, &tile));
        }
        if tile.kind.is_solid() {
            self.obstacles.insert(id, tile.hitbox);
        }
    }
}

/// Build `map` with `assets` under `config`.
pub fn build_map(
    config: &LevelConfig,
    map: &MapData,
    assets: &AssetLibrary,
) -> Result<BuiltMap, LevelError> {
    MapBuilder::new(config, assets).build(map)
}
