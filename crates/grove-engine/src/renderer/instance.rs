use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::sprite::{Image, TextureId};

/// One positioned blit, in screen space (camera offset already applied).
/// Plain floats so the platform can upload the whole list as bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    /// Screen x of the image's top-left corner.
    pub x: f32,
    /// Screen y of the image's top-left corner.
    pub y: f32,
    /// Image width.
    pub width: f32,
    /// Image height.
    pub height: f32,
    /// Platform texture handle.
    pub texture: u32,
}

impl DrawInstance {
    pub const STRIDE_BYTES: usize = 20;

    pub fn new(image: &Image, screen_pos: Vec2) -> Self {
        Self {
            x: screen_pos.x,
            y: screen_pos.y,
            width: image.width(),
            height: image.height(),
            texture: image.texture.0,
        }
    }

    pub fn image(&self) -> Image {
        Image::new(TextureId(self.texture), self.width, self.height)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Back-to-front list of blits for one frame.
pub struct DrawList {
    pub instances: Vec<DrawInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Raw bytes of the instance array, for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
