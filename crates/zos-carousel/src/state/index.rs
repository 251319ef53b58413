//! Conversions between slide numbers and rendered item indices

use crate::math::wrap;

/// 0-based index into the rendered items, clones included
pub type ItemIndex = usize;

/// Maps slide numbers to rendered items and back
///
/// A cyclical carousel renders a clone of the last slide before the real
/// slides and a clone of the first slide after them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideIndexMap {
    slide_count: usize,
    has_clones: bool,
}

impl SlideIndexMap {
    /// Create a map for `slide_count` real slides
    pub fn new(slide_count: usize, cyclical: bool) -> Self {
        Self {
            slide_count,
            has_clones: cyclical && slide_count > 0,
        }
    }

    /// Number of real slides
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Number of rendered items
    #[inline]
    pub fn item_count(&self) -> usize {
        self.slide_count + 2 * self.leading()
    }

    /// Clones rendered before the first real slide
    #[inline]
    pub fn leading(&self) -> usize {
        usize::from(self.has_clones)
    }

    /// Rendered item for a slide number
    ///
    /// Slide 0 maps to the leading clone and `N + 1` to the trailing clone
    /// when they exist; otherwise out-of-range numbers wrap.
    pub fn item_of_slide(&self, slide: i32) -> ItemIndex {
        let n = self.slide_count as i32;
        if n == 0 {
            return 0;
        }
        let lead = self.leading() as i32;
        let slide = if self.has_clones {
            slide.clamp(0, n + 1)
        } else {
            wrap(slide, 1, n)
        };
        (slide - 1 + lead) as ItemIndex
    }

    /// Real slide number a rendered item shows (clones resolve to their source)
    pub fn slide_of_item(&self, item: ItemIndex) -> i32 {
        let n = self.slide_count as i32;
        if n == 0 {
            return 1;
        }
        wrap(item as i32 + 1 - self.leading() as i32, 1, n)
    }

    /// Check if the rendered item is a clone
    pub fn is_clone(&self, item: ItemIndex) -> bool {
        self.has_clones && (item == 0 || item == self.item_count() - 1)
    }
}
