//! Empirically tuned thresholds

use serde::{Deserialize, Serialize};

/// Thresholds for layout rounding and gesture classification
///
/// The defaults reproduce the shipped behaviour; override per engine only
/// when a host needs different feel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    /// Fraction of a slide left uncovered below which we round up
    pub rounding_threshold: f32,
    /// Pixels of the next card that peek out at the small breakpoint
    pub peek_distance_px: f32,
    /// Fraction of the container width a drag must cover to commit
    pub drag_commit_fraction: f32,
    /// Horizontal travel before a press becomes a drag
    pub dragstart_threshold_px: f32,
    /// Gestures shorter than this may commit as a flick
    pub fast_swipe_ms: f64,
    /// Minimum travel for a flick
    pub min_flick_px: f32,
    /// Delay before CSS transitions come back after a suppressed frame
    pub transition_reenable_delay_ms: f64,
    /// Viewport width below which every card counts as visible
    pub narrow_viewport_px: f32,
}

impl Tuning {
    pub const ROUNDING_THRESHOLD: f32 = 0.05;
    pub const PEEK_DISTANCE_PX: f32 = 24.0;
    pub const DRAG_COMMIT_FRACTION: f32 = 0.2;
    pub const DRAGSTART_THRESHOLD_PX: f32 = 10.0;
    pub const FAST_SWIPE_MS: f64 = 300.0;
    pub const MIN_FLICK_PX: f32 = 10.0;
    pub const TRANSITION_REENABLE_DELAY_MS: f64 = 10.0;
    pub const NARROW_VIEWPORT_PX: f32 = 600.0;
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rounding_threshold: Self::ROUNDING_THRESHOLD,
            peek_distance_px: Self::PEEK_DISTANCE_PX,
            drag_commit_fraction: Self::DRAG_COMMIT_FRACTION,
            dragstart_threshold_px: Self::DRAGSTART_THRESHOLD_PX,
            fast_swipe_ms: Self::FAST_SWIPE_MS,
            min_flick_px: Self::MIN_FLICK_PX,
            transition_reenable_delay_ms: Self::TRANSITION_REENABLE_DELAY_MS,
            narrow_viewport_px: Self::NARROW_VIEWPORT_PX,
        }
    }
}
