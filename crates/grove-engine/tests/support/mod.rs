// Shared fixtures for level integration tests.
use grove_engine::{
    AssetLibrary, AssetManifest, Image, LayoutGrid, LevelConfig, MapData, Status, Surface,
    BOUNDARY_LAYER, GRASS_LAYER, OBJECT_LAYER,
};
use glam::Vec2;
use serde_json::json;

// Every collection a level needs, declared the way a platform manifest would.
pub fn library() -> AssetLibrary {
    let mut collections = serde_json::Map::new();
    for (i, status) in Status::all().enumerate() {
        let frames: Vec<_> = (0..4)
            .map(|f| json!({ "texture": 1000 + i * 10 + f, "width": 64, "height": 64 }))
            .collect();
        collections.insert(format!("player/{}", status.key()), json!(frames));
    }
    for (i, facing) in ["up", "down", "left", "right"].iter().enumerate() {
        collections.insert(
            format!("weapon/{}", facing),
            json!([{ "texture": 500 + i, "width": 24, "height": 24 }]),
        );
    }
    collections.insert(
        "grass".into(),
        json!([
            { "texture": 1, "width": 64, "height": 64, "path": "graphics/grass/grass_1.png" },
            { "texture": 2, "width": 64, "height": 64, "path": "graphics/grass/grass_2.png" }
        ]),
    );
    collections.insert(
        "objects".into(),
        json!([
            { "texture": 10, "width": 64, "height": 64 },
            { "texture": 11, "width": 64, "height": 128 },
            { "texture": 12, "width": 64, "height": 128 }
        ]),
    );
    collections.insert("floor".into(), json!([{ "texture": 99, "width": 3648, "height": 3200 }]));

    let text = json!({ "collections": collections }).to_string();
    let manifest = AssetManifest::from_json(&text).expect("fixture manifest parses");
    AssetLibrary::from_manifest(&manifest)
}

pub fn map(boundary: &str, grass: &str, object: &str) -> MapData {
    MapData::new()
        .with(BOUNDARY_LAYER, LayoutGrid::from_csv(boundary))
        .with(GRASS_LAYER, LayoutGrid::from_csv(grass))
        .with(OBJECT_LAYER, LayoutGrid::from_csv(object))
}

pub fn config(spawn: [f32; 2]) -> LevelConfig {
    LevelConfig::from_json(&format!(
        r#"{{ "player_spawn": [{}, {}], "grass_seed": 3, "debug_overlay": false }}"#,
        spawn[0], spawn[1]
    ))
    .expect("fixture config parses")
}

// Surface that remembers every blit of the last frame.
#[derive(Default)]
pub struct RecordingSurface {
    pub blits: Vec<(Image, Vec2)>,
}

impl Surface for RecordingSurface {
    fn blit(&mut self, image: &Image, pos: Vec2) {
        self.blits.push((*image, pos));
    }
}
