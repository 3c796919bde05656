use glam::Vec2;

/// Camera that keeps a target centered in the viewport.
///
/// The offset is a pure function of the target and the viewport size:
/// recomputed every frame, no smoothing, no clamping to map bounds.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    /// Half the viewport, floored to whole pixels.
    half_size: Vec2,
    /// World position of the screen's top-left corner.
    offset: Vec2,
}

impl FollowCamera {
    /// `half_size` is half the viewport, already floored to whole pixels
    /// (see `LevelConfig::half_viewport`).
    pub fn new(half_size: Vec2) -> Self {
        Self {
            half_size,
            offset: Vec2::ZERO,
        }
    }

    /// Center the view on `target`. Returns the new offset.
    pub fn look_at(&mut self, target: Vec2) -> Vec2 {
        self.offset = target - self.half_size;
        self.offset
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn half_size(&self) -> Vec2 {
        self.half_size
    }

    /// Convert a world position to a screen position.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}
