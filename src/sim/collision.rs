//! Collision detection between the ball and axis-aligned rectangles
//!
//! Every ball check in the game (paddle and bricks) goes through
//! [`circle_intersects_rect`].

use glam::Vec2;

use super::rect::Rect;

/// Check whether a circle overlaps a rectangle
///
/// Clamps the circle center to the rectangle and compares the squared
/// distance to the squared radius. Tangency counts as a hit so a ball resting
/// flush against an edge still bounces.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.clamp_point(center);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick() -> Rect {
        Rect::new(100.0, 100.0, 80.0, 40.0)
    }

    #[test]
    fn test_center_inside_rect() {
        assert!(circle_intersects_rect(Vec2::new(140.0, 120.0), 10.0, &brick()));
    }

    #[test]
    fn test_overlapping_edge() {
        // 5 px above the top edge, radius 10
        assert!(circle_intersects_rect(Vec2::new(140.0, 95.0), 10.0, &brick()));
    }

    #[test]
    fn test_tangent_counts_as_hit() {
        assert!(circle_intersects_rect(Vec2::new(140.0, 90.0), 10.0, &brick()));
        assert!(circle_intersects_rect(Vec2::new(190.0, 120.0), 10.0, &brick()));
    }

    #[test]
    fn test_clear_miss() {
        assert!(!circle_intersects_rect(Vec2::new(140.0, 89.9), 10.0, &brick()));
        assert!(!circle_intersects_rect(Vec2::new(300.0, 300.0), 10.0, &brick()));
    }

    #[test]
    fn test_corner_uses_euclidean_distance() {
        // Diagonal from the top-left corner: dx = dy = 8 -> dist ≈ 11.3 > 10
        assert!(!circle_intersects_rect(Vec2::new(92.0, 92.0), 10.0, &brick()));
        // dx = dy = 7 -> dist ≈ 9.9 < 10
        assert!(circle_intersects_rect(Vec2::new(93.0, 93.0), 10.0, &brick()));
    }
}
