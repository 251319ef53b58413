//! Per-page scroll offsets

use serde::Serialize;

use crate::structure::Direction;

use super::LayoutInfo;

/// Horizontal offset for every page, dummy pages included
///
/// Pages run from `first_page` (0 for cyclical carousels, else 1) to
/// `total_pages + delta`. Offsets are the `translateX` of the slide list:
/// negative and descending in LTR, positive and ascending in RTL.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesX {
    first_page: i32,
    offsets: Vec<f32>,
}

impl PagesX {
    /// Compute offsets for `layout`
    pub fn compute(layout: &LayoutInfo, cyclical: bool, direction: Direction) -> Self {
        let delta = i32::from(cyclical);
        let first_page = 1 - delta;
        let last_page = layout.total_pages + delta;
        let sign = if direction.is_rtl() { 1.0 } else { -1.0 };
        let per_page = layout.slides_per_page.max(1) as f32;
        // Cyclical carousels render one clone before the first slide
        let leading = delta as f32;

        let mut offsets = Vec::with_capacity((last_page - first_page + 1).max(0) as usize);
        let mut previous = 0.0_f32;
        for page in first_page..=last_page {
            let x = if page < last_page {
                // First item of the page; the leading dummy page starts at zero
                (((page - 1) as f32 * per_page + leading) * layout.slide_width).max(0.0)
            } else {
                // Final page sits flush against the trailing edge, never behind the page before it
                (layout.item_count as f32 * layout.slide_width - layout.container_width).max(previous)
            };
            previous = x;
            offsets.push(x * sign);
        }

        Self { first_page, offsets }
    }

    /// First addressable page (0 when a leading dummy page exists)
    #[inline]
    pub fn first_page(&self) -> i32 {
        self.first_page
    }

    /// Last addressable page
    #[inline]
    pub fn last_page(&self) -> i32 {
        self.first_page + self.offsets.len() as i32 - 1
    }

    /// Number of addressable pages
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check if no pages were computed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset of `page`, if it exists
    pub fn get(&self, page: i32) -> Option<f32> {
        let index = usize::try_from(page - self.first_page).ok()?;
        self.offsets.get(index).copied()
    }

    /// Offset of `page`, clamped to the addressable range
    pub fn offset(&self, page: i32) -> f32 {
        if self.offsets.is_empty() {
            return 0.0;
        }
        let page = page.clamp(self.first_page, self.last_page());
        self.get(page).unwrap_or(0.0)
    }

    /// Offsets in page order
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.offsets
    }
}
