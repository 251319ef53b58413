//! Input handling for pointer, keyboard and click events

use crate::input::{ClickResult, ClickTarget, GestureDecision, InputResult, Key, KeyAction, KeyTarget, PageStep};
use crate::math::Vec2;
use super::CarouselEngine;

impl CarouselEngine {
    /// Handle pointer or touch down
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: i16, contacts: u32, now_ms: f64) -> InputResult {
        self.clock_ms = now_ms;
        if self.destroyed || !self.dragging_enabled {
            return InputResult::Unhandled;
        }

        let result = self.gesture.pointer_down(Vec2::new(x, y), button, contacts, now_ms);
        if result.is_handled() {
            self.transition.begin_drag();
        }
        result
    }

    /// Handle pointer or touch move
    ///
    /// `RequestFrame` asks the host for one `animation_frame` callback.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        if self.destroyed {
            return InputResult::Unhandled;
        }
        self.gesture.pointer_move(Vec2::new(x, y))
    }

    /// Animation-frame callback during a drag
    ///
    /// Returns the transform to display, if one was pending.
    pub fn animation_frame(&mut self) -> Option<f32> {
        let x = self.gesture.animation_frame(self.transform_x)?;
        self.display_x = x;
        Some(x)
    }

    /// Handle pointer or touch up
    ///
    /// Applies the gesture decision: commits move one page, rescinds snap
    /// back to the current page. Both animate.
    pub fn handle_pointer_up(&mut self, contacts_remaining: u32, now_ms: f64) -> InputResult {
        self.clock_ms = now_ms;
        let result = self.gesture.pointer_up(
            contacts_remaining,
            now_ms,
            self.layout.container_width,
            self.structure.direction,
        );

        if let InputResult::Settled { decision, .. } = result {
            self.transition.end_drag();
            match decision {
                GestureDecision::Commit(PageStep::Next) => self.next(),
                GestureDecision::Commit(PageStep::Previous) => self.previous(),
                GestureDecision::Rescind => {}
            }
            self.transit();
        }
        result
    }

    /// Handle pointer cancel (treated like the last contact lifting)
    pub fn handle_pointer_cancel(&mut self, now_ms: f64) -> InputResult {
        self.handle_pointer_up(0, now_ms)
    }

    /// Handle a key press; returns `true` if it paged
    pub fn handle_key(&mut self, key: Key, target: KeyTarget) -> bool {
        if self.destroyed {
            return false;
        }
        let action = match KeyAction::resolve(key, target, self.structure.direction) {
            Some(a) => a,
            None => return false,
        };

        match action {
            KeyAction::NextPage => self.next(),
            KeyAction::PreviousPage => self.previous(),
            KeyAction::StepSlide(step) => {
                let slide = self.state.current_slide() + step;
                self.set_current_slide(slide);
            }
        }
        true
    }

    /// Handle a click inside the carousel
    pub fn handle_click(&mut self, target: ClickTarget) -> ClickResult {
        if self.destroyed {
            return ClickResult::Ignored;
        }

        match target {
            ClickTarget::NextButton => {
                self.next();
                ClickResult::Handled
            }
            ClickTarget::PrevButton => {
                self.previous();
                ClickResult::Handled
            }
            ClickTarget::Dot(page) => {
                self.set_current_page(page);
                ClickResult::Handled
            }
            ClickTarget::Content if self.gesture.was_dragged() => ClickResult::Suppress,
            ClickTarget::Content | ClickTarget::Other => ClickResult::Ignored,
        }
    }
}
