//! Output contract implemented by the platform's graphics layer.

use glam::Vec2;

use crate::components::sprite::Image;

/// A drawable target accepting positioned blits.
pub trait Surface {
    /// Draw `image` with its top-left corner at screen position `pos`.
    fn blit(&mut self, image: &Image, pos: Vec2);

    /// Draw a line of debug text at screen position `pos`. Optional.
    fn debug_text(&mut self, _text: &str, _pos: Vec2) {}
}
