//! Current-slide state machine

use crate::config::Options;
use crate::layout::LayoutInfo;
use crate::math::{clamp, wrap};

/// Single source of truth for the current slide
///
/// Finite carousels clamp into `[1, N]`. Cyclical carousels wrap; when
/// they are also animated the range grows by one dummy slide on each end
/// so a transition can run onto a clone before re-homing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideState {
    current: i32,
    slide_count: i32,
    cyclical: bool,
    buffer: i32,
}

impl SlideState {
    /// Create state for `slide_count` slides, starting at `options.current_slide`
    pub fn new(options: &Options, slide_count: usize) -> Self {
        let mut state = Self {
            current: 1,
            slide_count: slide_count.max(1) as i32,
            cyclical: options.cyclical,
            buffer: options.buffer(),
        };
        state.set_current_slide(options.current_slide);
        state
    }

    /// Lowest storable slide number
    #[inline]
    pub fn min(&self) -> i32 {
        1 - self.buffer
    }

    /// Highest storable slide number
    #[inline]
    pub fn max(&self) -> i32 {
        self.slide_count + self.buffer
    }

    /// Number of real slides
    #[inline]
    pub fn slide_count(&self) -> i32 {
        self.slide_count
    }

    /// Stored slide number, possibly a dummy (0 or N + 1)
    #[inline]
    pub fn raw_slide(&self) -> i32 {
        self.current
    }

    /// Current real slide number in `[1, N]`
    #[inline]
    pub fn current_slide(&self) -> i32 {
        wrap(self.current, 1, self.slide_count)
    }

    /// Set the current slide, normalizing out-of-range numbers
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_current_slide(&mut self, slide: i32) -> bool {
        let next = if self.cyclical {
            wrap(slide, self.min(), self.max())
        } else {
            clamp(slide, self.min(), self.max())
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Page holding the stored slide (0 or `total + 1` on a dummy)
    pub fn current_page(&self, slides_per_page: i32) -> i32 {
        page_of(self.current, slides_per_page)
    }

    /// First slide of `page`, clamped to real pages unless cyclical
    pub fn set_current_page(&mut self, page: i32, layout: &LayoutInfo) -> bool {
        let page = if self.cyclical {
            page
        } else {
            clamp(page, 1, layout.total_pages)
        };
        let slide = page
            .saturating_sub(1)
            .saturating_mul(layout.slides_per_page.max(1))
            .saturating_add(1);
        self.set_current_slide(slide)
    }

    /// Advance one page
    pub fn next(&mut self, layout: &LayoutInfo) -> bool {
        let page = self.current_page(layout.slides_per_page) + 1;
        self.set_current_page(page, layout)
    }

    /// Go back one page
    pub fn previous(&mut self, layout: &LayoutInfo) -> bool {
        let page = self.current_page(layout.slides_per_page) - 1;
        self.set_current_page(page, layout)
    }

    /// Check if the stored slide is a dummy
    #[inline]
    pub fn in_buffer(&self) -> bool {
        self.current < 1 || self.current > self.slide_count
    }

    /// Real slide a dummy stands in for
    pub fn rehome_target(&self) -> Option<i32> {
        if !self.cyclical {
            return None;
        }
        if self.current > self.slide_count {
            Some(1)
        } else if self.current < 1 {
            Some(self.slide_count)
        } else {
            None
        }
    }
}

/// `ceil(slide / slides_per_page)`; slide 0 is page 0
#[inline]
pub fn page_of(slide: i32, slides_per_page: i32) -> i32 {
    let per_page = i64::from(slides_per_page.max(1));
    (i64::from(slide) + per_page - 1).div_euclid(per_page) as i32
}
