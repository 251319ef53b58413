//! Slide and page changes

use crate::events::{CarouselEvent, CarouselEventKind, SubscriptionId};
use super::CarouselEngine;

impl CarouselEngine {
    /// Current slide number in `[1, N]`
    #[inline]
    pub fn current_slide(&self) -> i32 {
        self.state.current_slide()
    }

    /// Stored slide number, possibly a dummy
    #[inline]
    pub fn raw_slide(&self) -> i32 {
        self.state.raw_slide()
    }

    /// Page of the stored slide (0 or `total + 1` on a dummy)
    #[inline]
    pub fn current_page(&self) -> i32 {
        self.state.current_page(self.layout.slides_per_page)
    }

    /// Jump to a slide
    ///
    /// Out-of-range numbers are clamped or wrapped, never rejected.
    pub fn set_current_slide(&mut self, slide: i32) {
        if self.state.set_current_slide(slide) {
            self.on_slide_changed();
        }
    }

    /// Jump to the first slide of a 1-based page
    pub fn set_current_page(&mut self, page: i32) {
        if self.state.set_current_page(page, &self.layout) {
            self.on_slide_changed();
        }
    }

    /// Advance one page
    pub fn next(&mut self) {
        if self.state.next(&self.layout) {
            self.on_slide_changed();
        }
    }

    /// Go back one page
    pub fn previous(&mut self) {
        if self.state.previous(&self.layout) {
            self.on_slide_changed();
        }
    }

    /// Back to the configured starting slide
    pub fn reset(&mut self) {
        self.set_current_slide(self.options.current_slide);
    }

    /// `transitionend` on the slide list
    ///
    /// A transition that landed on a dummy slide re-homes to the real
    /// slide it clones without animating. Returns `true` if it did.
    pub fn handle_transition_end(&mut self, now_ms: f64) -> bool {
        if self.destroyed {
            return false;
        }
        self.clock_ms = now_ms;
        let target = match self.state.rehome_target() {
            Some(t) => t,
            None => return false,
        };
        log::debug!("re-homing dummy slide {} to {}", self.state.raw_slide(), target);
        self.transition.suppress_next();
        self.set_current_slide(target);
        true
    }

    /// Subscribe to slide changes
    pub fn subscribe(&mut self, listener: impl FnMut(&CarouselEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(CarouselEventKind::SlideChange, listener)
    }

    /// Remove a subscription; returns `false` if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn on_slide_changed(&mut self) {
        self.transit();

        let slide = self.state.current_slide();
        if slide == self.announced_slide {
            return;
        }
        self.announced_slide = slide;
        log::debug!("slide changed to {} (page {})", slide, self.current_page());
        self.events.emit(&CarouselEvent::SlideChange { current_slide: slide });
    }
}
