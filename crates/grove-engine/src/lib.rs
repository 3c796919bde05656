pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod level;
pub mod map;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{LevelConfig, PlayerTuning};
pub use api::types::{EntityId, IdAllocator};
pub use assets::manifest::{AssetManifest, ImageDescriptor};
pub use assets::registry::AssetLibrary;
pub use components::animation::{AnimationSet, Animator};
pub use components::entity::{Entity, EntityKind};
pub use components::player::Player;
pub use components::rect::Rect;
pub use components::sprite::{Image, TextureId};
pub use components::status::{Facing, Modifier, Status};
pub use components::tile::{Tile, TileKind};
pub use components::weapon::{Weapon, WeaponImages};
pub use core::obstacles::{Obstacle, ObstacleSet};
pub use core::scene::Scene;
pub use core::time::{Clock, Cooldown, ManualClock, SystemClock};
pub use error::LevelError;
pub use input::keys::{Key, KeySnapshot, KeyState};
pub use level::{Level, FLOOR_IMAGE};
pub use map::builder::{
    build_map, BuiltMap, MapBuilder, GRASS_IMAGES, OBJECT_IMAGES, PLAYER_ANIMATION_PREFIX,
};
pub use map::layout::{LayoutGrid, MapData, BOUNDARY_LAYER, EMPTY_CELL, GRASS_LAYER, OBJECT_LAYER};
pub use renderer::camera::FollowCamera;
pub use renderer::instance::{DrawInstance, DrawList};
pub use renderer::traits::Surface;
pub use systems::collision::{resolve_axis, Axis};
pub use systems::render::{build_draw_list, present, Floor};
