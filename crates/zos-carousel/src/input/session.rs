//! Ephemeral state of one pointer gesture

use crate::math::Vec2;

/// One press-to-release pointer sequence
///
/// Created on pointer-down and dropped on pointer-up or cancel.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position at press
    pub initial: Vec2,
    /// Latest position once dragging; `None` while merely pressed
    pub last: Option<Vec2>,
    /// Press timestamp (ms)
    pub start_ms: f64,
    /// Horizontal travel crossed the drag-start threshold
    pub is_dragging: bool,
    /// A frame callback is scheduled and not yet run
    pub frame_pending: bool,
}

impl DragSession {
    /// Start a session at `initial`
    pub fn new(initial: Vec2, start_ms: f64) -> Self {
        Self {
            initial,
            last: None,
            start_ms,
            is_dragging: false,
            frame_pending: false,
        }
    }

    /// `initial.x - last.x`: positive when the pointer moved left
    pub fn x_distance(&self) -> f32 {
        self.last
            .map(|last| self.initial.x_distance_to(last))
            .unwrap_or(0.0)
    }

    /// Elapsed time since press
    #[inline]
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.start_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_distance() {
        let s = DragSession::new(Vec2::new(100.0, 10.0), 5.0);
        assert!(s.x_distance().abs() < 0.001);
        assert!(!s.is_dragging);
        assert!((s.elapsed_ms(85.0) - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_distance_sign() {
        let mut s = DragSession::new(Vec2::new(200.0, 0.0), 0.0);
        s.last = Some(Vec2::new(130.0, 4.0));
        assert!((s.x_distance() - 70.0).abs() < 0.001);
        s.last = Some(Vec2::new(240.0, 4.0));
        assert!((s.x_distance() + 40.0).abs() < 0.001);
    }
}
