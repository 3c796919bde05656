use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Asset manifest describing every image collection a level draws from.
/// Loaded from a JSON file by the platform, which owns the actual textures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named, ordered image collections: "grass", "objects", "floor",
    /// "player/<status>", "weapon/<facing>".
    #[serde(default)]
    pub collections: HashMap<String, Vec<ImageDescriptor>>,
}

/// Describes one image inside a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Platform texture handle.
    pub texture: u32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Source file, for the platform's loader. The engine ignores it.
    #[serde(default)]
    pub path: Option<String>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(LevelError::Manifest)
    }
}
