//! Transition enable/suppress state

use serde::Serialize;

/// Desired value of the slide list's CSS `transition` property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    /// Stylesheet transition applies (inline style cleared)
    Enabled,
    /// Inline `transition: initial`, transforms jump
    Suppressed,
}

/// Tracks whether the next transform may animate
///
/// After a suppressed frame transitions come back on a short timer rather
/// than immediately, since the browser may not have applied the jump yet.
#[derive(Clone, Debug)]
pub struct TransitionState {
    animation: bool,
    /// Set once a frame has been rendered with animation allowed
    armed: bool,
    /// When the suppressed transition comes back on
    reenable_at_ms: Option<f64>,
    delay_ms: f64,
    style: TransitionStyle,
}

impl TransitionState {
    /// Create state for a carousel with or without animation
    pub fn new(animation: bool, delay_ms: f64) -> Self {
        Self {
            animation,
            armed: false,
            reenable_at_ms: None,
            delay_ms,
            style: TransitionStyle::Suppressed,
        }
    }

    /// Current desired style
    #[inline]
    pub fn style(&self) -> TransitionStyle {
        self.style
    }

    /// Whether a re-enable is pending
    #[inline]
    pub fn reenable_pending(&self) -> bool {
        self.reenable_at_ms.is_some()
    }

    /// Apply a new transform; returns `true` if it animates
    ///
    /// A non-animated frame suppresses the transition and, for animated
    /// carousels, schedules it to come back after the delay.
    pub fn transit(&mut self, now_ms: f64) -> bool {
        let animated = self.armed && self.animation;
        if !animated {
            self.style = TransitionStyle::Suppressed;
        }
        if self.animation && !self.armed {
            self.armed = true;
            self.reenable_at_ms = Some(now_ms + self.delay_ms);
        }
        animated
    }

    /// Make the next transform jump (resize, dummy re-home)
    pub fn suppress_next(&mut self) {
        self.armed = false;
    }

    /// Drag started: position imperatively, no transition
    pub fn begin_drag(&mut self) {
        self.style = TransitionStyle::Suppressed;
    }

    /// Drag ended: let the stylesheet animate the settle
    pub fn end_drag(&mut self) {
        if self.animation {
            self.style = TransitionStyle::Enabled;
        }
    }

    /// Advance timers; returns `true` if the style changed
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.reenable_at_ms {
            Some(at) if now_ms >= at => {
                self.reenable_at_ms = None;
                let changed = self.style != TransitionStyle::Enabled;
                self.style = TransitionStyle::Enabled;
                changed
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_jumps_then_reenables() {
        let mut t = TransitionState::new(true, 10.0);
        assert!(!t.transit(0.0));
        assert_eq!(t.style(), TransitionStyle::Suppressed);
        assert!(t.reenable_pending());

        assert!(!t.tick(5.0));
        assert!(t.tick(10.0));
        assert_eq!(t.style(), TransitionStyle::Enabled);

        assert!(t.transit(20.0));
        assert_eq!(t.style(), TransitionStyle::Enabled);
    }

    #[test]
    fn test_suppress_next_frame_only() {
        let mut t = TransitionState::new(true, 10.0);
        t.transit(0.0);
        t.tick(10.0);

        t.suppress_next();
        assert!(!t.transit(100.0));
        assert_eq!(t.style(), TransitionStyle::Suppressed);
        t.tick(110.0);
        assert!(t.transit(120.0));
    }

    #[test]
    fn test_no_animation_never_enables() {
        let mut t = TransitionState::new(false, 10.0);
        assert!(!t.transit(0.0));
        assert!(!t.reenable_pending());
        assert!(!t.tick(1000.0));
        t.end_drag();
        assert_eq!(t.style(), TransitionStyle::Suppressed);
        assert!(!t.transit(2000.0));
    }

    #[test]
    fn test_drag_toggles_style() {
        let mut t = TransitionState::new(true, 10.0);
        t.transit(0.0);
        t.tick(10.0);
        t.begin_drag();
        assert_eq!(t.style(), TransitionStyle::Suppressed);
        t.end_drag();
        assert_eq!(t.style(), TransitionStyle::Enabled);
    }
}
