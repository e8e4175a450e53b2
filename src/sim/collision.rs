//! Collision detection between axis-aligned boxes
//!
//! Every entity in the lane is a box; hampers are drawn as ellipses but
//! collide as their bounding box.

use glam::Vec2;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Positive width and height
    #[inline]
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Strict overlap test on both axes
    ///
    /// Rectangles that only share an edge do not overlap, so a zero-sized
    /// rectangle never overlaps anything.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rects_overlap(self, other)
    }
}

/// Check whether two rectangles overlap (half-open intervals on both axes)
///
/// A rectangle with no area overlaps nothing, even when it lies strictly
/// inside the other one.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    if !a.has_area() || !b.has_area() {
        return false;
    }
    let (a_max, b_max) = (a.max(), b.max());
    a.min.x < b_max.x && a_max.x > b.min.x && a.min.y < b_max.y && a_max.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_edge_touching_is_not_collision() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &right));
        assert!(!rects_overlap(&a, &below));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_zero_size_never_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        let line = Rect::new(5.0, 0.0, 0.0, 10.0);
        assert!(!rects_overlap(&a, &point));
        assert!(!rects_overlap(&a, &line));
        assert!(!rects_overlap(&point, &point));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }

        #[test]
        fn zero_size_inside_never_overlaps(
            x in 0.0f32..100.0, y in 0.0f32..100.0, zero_width in proptest::bool::ANY,
        ) {
            let outer = Rect::new(-1.0, -1.0, 102.0, 102.0);
            let degenerate = if zero_width {
                Rect::new(x, y, 0.0, 10.0)
            } else {
                Rect::new(x, y, 10.0, 0.0)
            };
            prop_assert!(!rects_overlap(&outer, &degenerate));
            prop_assert!(!rects_overlap(&degenerate, &outer));
        }

        #[test]
        fn degenerate_width_never_overlaps(
            x in -500.0f32..500.0, y in -500.0f32..500.0, h in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = Rect::new(x, y, 0.0, h);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert!(!rects_overlap(&a, &b));
        }
    }
}
