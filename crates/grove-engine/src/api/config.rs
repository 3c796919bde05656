use glam::Vec2;
use serde::Deserialize;

use crate::error::LevelError;

/// Level configuration, provided by the game.
///
/// Every field has a default, so a JSON config only needs to list overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Edge length of one map cell in world units (default: 64).
    pub tile_size: f32,
    /// Viewport width in pixels (default: 1280).
    pub viewport_width: u32,
    /// Viewport height in pixels (default: 720).
    pub viewport_height: u32,
    /// Top-left of the player's render box at spawn.
    pub player_spawn: [f32; 2],
    /// Vertical shrink from a tile's render box to its hitbox (default: 10).
    pub tile_hitbox_inset: f32,
    /// Seed for picking grass variants. `None` seeds from the system time.
    pub grass_seed: Option<u64>,
    /// Draw the player's status key in the top-left corner.
    pub debug_overlay: bool,
    /// Player tuning.
    pub player: PlayerTuning,
}

/// Movement, animation and cooldown constants for the player.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Displacement per frame in world units (default: 7).
    pub speed: f32,
    /// Frames advanced per update (default: 0.15).
    pub animation_speed: f32,
    /// Attack lock-out in milliseconds (default: 400).
    pub attack_cooldown_ms: u64,
    /// Spell lock-out in milliseconds (default: 400).
    pub cast_cooldown_ms: u64,
    /// Vertical shrink from the player's render box to its hitbox (default: 26).
    pub hitbox_inset: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            tile_size: 64.0,
            viewport_width: 1280,
            viewport_height: 720,
            player_spawn: [2000.0, 1430.0],
            tile_hitbox_inset: 10.0,
            grass_seed: None,
            debug_overlay: true,
            player: PlayerTuning::default(),
        }
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 7.0,
            animation_speed: 0.15,
            attack_cooldown_ms: 400,
            cast_cooldown_ms: 400,
            hitbox_inset: 26.0,
        }
    }
}

impl LevelConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(LevelError::Config)
    }

    pub fn spawn(&self) -> Vec2 {
        Vec2::from(self.player_spawn)
    }

    /// Half the viewport, floored to whole pixels.
    pub fn half_viewport(&self) -> Vec2 {
        Vec2::new(
            (self.viewport_width / 2) as f32,
            (self.viewport_height / 2) as f32,
        )
    }
}
