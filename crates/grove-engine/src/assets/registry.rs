use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{Image, TextureId};
use crate::error::LevelError;

/// Named, ordered image collections, addressed by index or picked at random.
pub struct AssetLibrary {
    collections: HashMap<String, Vec<Image>>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self {
            collections: HashMap::new(),
        }
    }

    /// Build a library from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut collections = HashMap::with_capacity(manifest.collections.len());
        for (name, descs) in &manifest.collections {
            let images = descs
                .iter()
                .map(|d| Image::new(TextureId(d.texture), d.width, d.height))
                .collect();
            collections.insert(name.clone(), images);
        }
        Self { collections }
    }

    /// Add or replace a collection.
    pub fn insert(&mut self, name: impl Into<String>, images: Vec<Image>) {
        self.collections.insert(name.into(), images);
    }

    /// Builder-style `insert`.
    pub fn with(mut self, name: impl Into<String>, images: Vec<Image>) -> Self {
        self.insert(name, images);
        self
    }

    /// Look up a collection. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&[Image]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// Look up a collection that must exist and hold at least one image.
    pub fn require(&self, name: &str) -> Result<&[Image], LevelError> {
        match self.get(name) {
            Some(images) if !images.is_empty() => Ok(images),
            _ => Err(LevelError::MissingAsset(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }
}

impl Default for AssetLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_manifest() {
        let json = r#"{
            "collections": {
                "objects": [
                    { "texture": 10, "width": 64, "height": 64 },
                    { "texture": 11, "width": 64, "height": 128 }
                ]
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        let lib = AssetLibrary::from_manifest(&manifest);

        let objects = lib.get("objects").expect("objects should exist");
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[1].texture, TextureId(11));
        assert_eq!(objects[1].height(), 128.0);
    }

    #[test]
    fn require_rejects_missing_and_empty() {
        let lib = AssetLibrary::new().with("empty", Vec::new());
        assert!(lib.get("nonexistent").is_none());
        assert!(matches!(
            lib.require("nonexistent"),
            Err(LevelError::MissingAsset(n)) if n == "nonexistent"
        ));
        assert!(matches!(lib.require("empty"), Err(LevelError::MissingAsset(_))));
        assert!(lib.contains("empty"));
    }
}
