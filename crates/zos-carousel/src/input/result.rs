//! Input result types

use serde::Serialize;

/// Page movement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStep {
    Next,
    Previous,
}

/// Terminal decision of a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "step", rename_all = "lowercase")]
pub enum GestureDecision {
    /// Complete the transition to the adjacent page
    Commit(PageStep),
    /// Snap back to the current page
    Rescind,
}

/// Result of pointer input handling
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was consumed, nothing to apply
    Handled,
    /// Input was not for us (pass through)
    Unhandled,
    /// Host should schedule one animation-frame callback
    RequestFrame,
    /// Gesture ended with a decision
    Settled {
        decision: GestureDecision,
        /// The pointer travelled far enough to count as a drag
        dragged: bool,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if a frame callback was requested
    #[inline]
    pub fn wants_frame(&self) -> bool {
        matches!(self, InputResult::RequestFrame)
    }
}

/// What a click landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    NextButton,
    PrevButton,
    /// Navigation dot for a 1-based page
    Dot(i32),
    /// Content inside a card or slide
    Content,
    Other,
}

/// Outcome of a click
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickResult {
    /// Click navigated
    Handled,
    /// Host must `preventDefault()`: the click ends a drag
    Suppress,
    /// Not ours
    Ignored,
}
