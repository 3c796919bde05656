//! The level: owns both groups and the player, and drives one frame at a time.

use glam::Vec2;

use crate::api::config::LevelConfig;
use crate::api::types::{EntityId, IdAllocator};
use crate::assets::registry::AssetLibrary;
use crate::components::entity::{Entity, EntityKind};
use crate::components::player::Player;
use crate::components::weapon::{Weapon, WeaponImages};
use crate::core::obstacles::ObstacleSet;
use crate::core::scene::Scene;
use crate::core::time::Clock;
use crate::error::LevelError;
use crate::input::keys::KeyState;
use crate::map::builder::build_map;
use crate::map::layout::MapData;
use crate::renderer::camera::FollowCamera;
use crate::renderer::instance::DrawList;
use crate::renderer::traits::Surface;
use crate::systems::render::{build_draw_list, present, Floor};

/// Image collection holding the ground picture drawn under everything.
pub const FLOOR_IMAGE: &str = "floor";

/// Where the debug overlay text goes, in screen pixels.
const DEBUG_TEXT_POS: Vec2 = Vec2::new(10.0, 10.0);

pub struct Level {
    config: LevelConfig,
    scene: Scene,
    obstacles: ObstacleSet,
    player: Player,
    player_id: EntityId,
    weapon_images: WeaponImages,
    weapon: Option<EntityId>,
    ids: IdAllocator,
    camera: FollowCamera,
    floor: Floor,
    draw_list: DrawList,
}

impl Level {
    /// Build the map once. Any missing layer or image aborts construction.
    pub fn new(
        config: LevelConfig,
        map: &MapData,
        assets: &AssetLibrary,
    ) -> Result<Self, LevelError> {
        let floor = Floor {
            image: assets.require(FLOOR_IMAGE)?[0],
            pos: Vec2::ZERO,
        };
        let built = build_map(&config, map, assets)?;
        let camera = FollowCamera::new(config.half_viewport());
        let draw_list = DrawList::with_capacity(built.scene.len() + 1);

        Ok(Self {
            config,
            scene: built.scene,
            obstacles: built.obstacles,
            player: built.player,
            player_id: built.player_id,
            weapon_images: built.weapon_images,
            weapon: None,
            ids: built.ids,
            camera,
            floor,
            draw_list,
        })
    }

    /// One frame: sample the clock once, update, then draw.
    pub fn run(&mut self, input: &dyn KeyState, clock: &dyn Clock, surface: &mut dyn Surface) {
        let now = clock.ticks_ms();
        self.update(input, now);
        self.draw(surface);
    }

    /// Advance the simulation by one frame at time `now` (milliseconds).
    pub fn update(&mut self, input: &dyn KeyState, now: u64) {
        let images = &self.weapon_images;
        let mut swing: Option<Weapon> = None;
        self.player.update(input, now, &self.obstacles, &mut |player| {
            swing = Some(Weapon::attached_to(player, images));
        });

        if let Some(weapon) = swing {
            self.spawn_weapon(weapon);
        } else if !self.player.is_attacking() {
            self.despawn_weapon();
        }

        self.sync_player();
    }

    /// Center the camera on the player and draw the floor, then every visible
    /// entity back to front.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        self.camera.look_at(self.player.rect.center());
        build_draw_list(self.scene.iter(), Some(&self.floor), &self.camera, &mut self.draw_list);
        present(&self.draw_list, surface);

        if self.config.debug_overlay {
            surface.debug_text(&self.player.status().key(), DEBUG_TEXT_POS);
        }
    }

    fn spawn_weapon(&mut self, weapon: Weapon) {
        self.despawn_weapon();
        let id = self.ids.next_id();
        self.scene.spawn(
            Entity::new(id, EntityKind::Weapon)
                .with_rect(weapon.rect)
                .with_image(weapon.image),
        );
        self.weapon = Some(id);
        log::debug!("weapon {:?} spawned facing {:?}", id, weapon.facing);
    }

    fn despawn_weapon(&mut self) {
        if let Some(id) = self.weapon.take() {
            self.scene.despawn(id);
            log::debug!("weapon {:?} despawned", id);
        }
    }

    /// Copy the player's body into its render entity.
    fn sync_player(&mut self) {
        if let Some(entity) = self.scene.get_mut(self.player_id) {
            entity.rect = self.player.rect;
            entity.hitbox = self.player.hitbox;
            entity.image = Some(self.player.image);
        }
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_id(&self) -> EntityId {
        self.player_id
    }

    /// The render group.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    /// Draw list from the most recent `draw`.
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Render entity of the weapon currently out, if any.
    pub fn weapon(&self) -> Option<&Entity> {
        self.weapon.and_then(|id| self.scene.get(id))
    }
}
