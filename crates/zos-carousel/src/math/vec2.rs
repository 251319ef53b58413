//! 2D pointer position

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// 2D vector for pointer positions and drag displacement
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal distance `self.x - other.x`
    ///
    /// Called as `initial.x_distance_to(last)` this is positive when the
    /// pointer moved left.
    #[inline]
    pub fn x_distance_to(self, other: Vec2) -> f32 {
        self.x - other.x
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_sub() {
        let d = Vec2::new(10.0, 5.0) - Vec2::new(4.0, 8.0);
        assert!((d.x - 6.0).abs() < 0.001);
        assert!((d.y + 3.0).abs() < 0.001);
    }

    #[test]
    fn test_x_distance() {
        let initial = Vec2::new(200.0, 50.0);
        let last = Vec2::new(130.0, 60.0);
        assert!((initial.x_distance_to(last) - 70.0).abs() < 0.001);
        assert!((last.x_distance_to(initial) + 70.0).abs() < 0.001);
    }
}
