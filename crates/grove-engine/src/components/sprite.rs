use glam::Vec2;

use crate::components::rect::Rect;

/// Handle to a texture owned by the platform layer.
/// The engine never looks inside; it only hands it back to the `Surface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// A renderable image: a texture handle plus its pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image {
    /// Which texture to blit.
    pub texture: TextureId,
    /// Width and height in world units (pixels).
    pub size: Vec2,
}

impl Image {
    pub fn new(texture: TextureId, width: f32, height: f32) -> Self {
        Self {
            texture,
            size: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Rect covering this image when drawn with its top-left at `pos`.
    pub fn rect_at(&self, pos: Vec2) -> Rect {
        Rect::from_top_left(pos, self.size)
    }

    /// Rect covering this image when centered on `center`.
    pub fn rect_centered(&self, center: Vec2) -> Rect {
        Rect::from_center(center, self.size)
    }
}
