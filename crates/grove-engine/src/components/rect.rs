//! Axis-aligned rectangle used for render boxes and hitboxes.
//!
//! Y grows downward (screen convention): `top` is the smaller y, `bottom` the larger.

use glam::Vec2;

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` whose top-left corner is at `pos`.
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Rectangle of `size` centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    pub fn mid_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.center_y())
    }

    pub fn mid_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.center_y())
    }

    pub fn mid_top(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.top())
    }

    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.bottom())
    }

    /// Grow (or shrink, with negative deltas) around the same center.
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        let mut grown = Self::new(self.x, self.y, self.w + dw, self.h + dh);
        grown.set_center(self.center());
        grown
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflate_keeps_center() {
        let r = Rect::new(10.0, 20.0, 64.0, 64.0);
        let hit = r.inflate(0.0, -26.0);
        assert_eq!(hit.center(), r.center());
        assert_eq!(hit.w, 64.0);
        assert_eq!(hit.h, 38.0);
        assert!(r.contains(&hit));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(9.5, 5.0, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn edge_setters_move_without_resizing() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 20.0);
        r.set_right(50.0);
        assert_eq!(r.left(), 40.0);
        r.set_bottom(100.0);
        assert_eq!(r.top(), 80.0);
        assert_eq!(r.size(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn anchors() {
        let r = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.top_left(), Vec2::new(40.0, 45.0));
        assert_eq!(r.mid_left(), Vec2::new(40.0, 50.0));
        assert_eq!(r.mid_right(), Vec2::new(60.0, 50.0));
        assert_eq!(r.mid_top(), Vec2::new(50.0, 45.0));
        assert_eq!(r.mid_bottom(), Vec2::new(50.0, 55.0));
    }
}
