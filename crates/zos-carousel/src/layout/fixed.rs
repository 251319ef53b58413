//! Fixed-width slide layout

use crate::config::{Options, Tuning};

use super::calculator::{total_pages, LayoutInfo, Measurements};

/// Round `list / slide` to a slide count
///
/// Rounds up when less than `threshold` of a slide would be left
/// uncovered, otherwise down. Degenerate widths give one slide per page.
pub(super) fn slides_per_page(list_width: f32, slide_width: f32, threshold: f32) -> i32 {
    if slide_width <= 0.0 || list_width <= 0.0 || !slide_width.is_finite() || !list_width.is_finite() {
        return 1;
    }
    let ratio = list_width / slide_width;
    let rounded = if 1.0 - ratio.fract() < threshold {
        ratio.ceil()
    } else {
        ratio.floor()
    };
    (rounded as i32).max(1)
}

pub(super) fn compute(
    tuning: &Tuning,
    m: &Measurements,
    options: &Options,
    slide_count: usize,
    item_count: usize,
) -> LayoutInfo {
    let per_page = slides_per_page(m.list_width, m.slide_width, tuning.rounding_threshold);
    let show_navigation = options.navigation;

    LayoutInfo {
        slides_per_page: per_page,
        total_pages: total_pages(slide_count, per_page),
        container_width: m.list_width.max(0.0),
        slide_width: m.slide_width.max(0.0),
        slide_count,
        item_count,
        show_navigation,
        // Tabs only when each dot maps to exactly one slide
        tab_model: show_navigation && per_page == 1,
        grid: None,
    }
}
