//! Drag gesture state machine
//!
//! `Idle -> Pressed -> Dragging -> Settling -> Idle`
//!
//! Settling lasts until the next [`GestureController::tick`], so the click
//! the browser synthesizes from the same pointer sequence can still see
//! that a drag happened.

use crate::config::Tuning;
use crate::math::Vec2;
use crate::structure::Direction;

use super::result::{GestureDecision, InputResult, PageStep};
use super::session::DragSession;
use super::PRIMARY_BUTTON;

/// Observable phase of the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// Pointer down, below the drag-start threshold
    Pressed,
    Dragging,
    /// Gesture ended; cleared on the next tick
    Settling,
}

/// Converts pointer input into page commits
#[derive(Clone, Debug)]
pub struct GestureController {
    session: Option<DragSession>,
    /// The last gesture dragged and has not been ticked away yet
    settling_drag: Option<bool>,
    tuning: Tuning,
}

impl GestureController {
    /// Create an idle controller
    pub fn new(tuning: Tuning) -> Self {
        Self {
            session: None,
            settling_drag: None,
            tuning,
        }
    }

    /// Current phase
    pub fn phase(&self) -> GesturePhase {
        match (&self.session, self.settling_drag) {
            (Some(s), _) if s.is_dragging => GesturePhase::Dragging,
            (Some(_), _) => GesturePhase::Pressed,
            (None, Some(_)) => GesturePhase::Settling,
            (None, None) => GesturePhase::Idle,
        }
    }

    /// Active session, if any
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// True while dragging or settling from a drag
    ///
    /// Clicks arriving in this window belong to the drag.
    pub fn was_dragged(&self) -> bool {
        match &self.session {
            Some(s) => s.is_dragging,
            None => self.settling_drag.unwrap_or(false),
        }
    }

    /// Pointer or touch pressed
    ///
    /// Only a primary-button press with a single contact starts a session.
    /// A second pointer during an active session is ignored.
    pub fn pointer_down(&mut self, pos: Vec2, button: i16, contacts: u32, now_ms: f64) -> InputResult {
        if contacts > 1 || button != PRIMARY_BUTTON || self.session.is_some() {
            return InputResult::Unhandled;
        }
        self.settling_drag = None;
        self.session = Some(DragSession::new(pos, now_ms));
        InputResult::Handled
    }

    /// Pointer moved
    ///
    /// At most one frame is requested at a time; moves in between only
    /// replace the pending position.
    pub fn pointer_move(&mut self, pos: Vec2) -> InputResult {
        let threshold = self.tuning.dragstart_threshold_px;
        let session = match self.session.as_mut() {
            Some(s) => s,
            None => return InputResult::Unhandled,
        };

        if !session.is_dragging {
            if session.initial.x_distance_to(pos).abs() < threshold {
                return InputResult::Handled;
            }
            session.is_dragging = true;
        }
        session.last = Some(pos);

        if session.frame_pending {
            return InputResult::Handled;
        }
        session.frame_pending = true;
        InputResult::RequestFrame
    }

    /// Frame callback: transform to display, if a frame was pending
    ///
    /// The list follows the pointer from `committed_offset`.
    pub fn animation_frame(&mut self, committed_offset: f32) -> Option<f32> {
        let session = self.session.as_mut()?;
        if !session.frame_pending {
            return None;
        }
        session.frame_pending = false;
        Some(committed_offset - session.x_distance())
    }

    /// Pointer released or cancelled
    ///
    /// `contacts_remaining` is the number of touches still down; the
    /// gesture only ends once the last one lifts.
    pub fn pointer_up(
        &mut self,
        contacts_remaining: u32,
        now_ms: f64,
        container_width: f32,
        direction: Direction,
    ) -> InputResult {
        if contacts_remaining > 0 {
            return InputResult::Handled;
        }
        let session = match self.session.take() {
            Some(s) => s,
            None => return InputResult::Unhandled,
        };

        let decision = self.decide(&session, now_ms, container_width, direction);
        log::debug!(
            "gesture ended after {:.0}ms, dx {:.1}: {:?}",
            session.elapsed_ms(now_ms),
            session.x_distance(),
            decision
        );
        self.settling_drag = Some(session.is_dragging);
        InputResult::Settled {
            decision,
            dragged: session.is_dragging,
        }
    }

    /// Drop any session without a decision
    pub fn cancel(&mut self) {
        self.session = None;
        self.settling_drag = None;
    }

    /// Deferred tick after a gesture: back to idle
    pub fn tick(&mut self) {
        if self.session.is_none() {
            self.settling_drag = None;
        }
    }

    fn decide(&self, session: &DragSession, now_ms: f64, container_width: f32, direction: Direction) -> GestureDecision {
        let dx = session.x_distance();
        let distance = dx.abs();

        let far_enough = distance >= container_width * self.tuning.drag_commit_fraction;
        let flick = session.elapsed_ms(now_ms) < self.tuning.fast_swipe_ms && distance > self.tuning.min_flick_px;

        if dx == 0.0 || !(far_enough || flick) {
            return GestureDecision::Rescind;
        }

        // Dragging left reveals what follows in LTR, what precedes in RTL
        let leftwards = dx > 0.0;
        if leftwards != direction.is_rtl() {
            GestureDecision::Commit(PageStep::Next)
        } else {
            GestureDecision::Commit(PageStep::Previous)
        }
    }
}
