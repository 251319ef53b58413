//! Card-grid layout

use crate::breakpoint::Breakpoint;
use crate::config::{Options, Tuning};

use super::calculator::{total_pages, GridDirective, LayoutInfo, Measurements};

/// Cards per page at `breakpoint`
pub(super) fn cards_per_page(breakpoint: Breakpoint, configured: i32) -> i32 {
    match breakpoint {
        Breakpoint::Sm => 1,
        Breakpoint::Md => (configured - 1).max(1),
        Breakpoint::Default => configured.max(1),
    }
}

pub(super) fn compute(
    tuning: &Tuning,
    breakpoint: Breakpoint,
    m: &Measurements,
    options: &Options,
    slide_count: usize,
    item_count: usize,
) -> LayoutInfo {
    let per_page = cards_per_page(breakpoint, options.cards_per_page);

    let mut usable = m.viewport_width - m.viewport_padding_left - m.viewport_padding_right;
    if options.peek_out && breakpoint.is_small() {
        usable -= tuning.peek_distance_px;
    }
    let usable = usable.max(0.0);
    let gutter = m.gutter.max(0.0);

    // Sized so each page takes exactly one viewport of usable width
    let raw_pages = item_count as f32 / per_page as f32;
    let list_width = (usable * raw_pages + (raw_pages - 1.0) * gutter).floor().max(0.0);

    let container_width = usable + gutter;
    let show_navigation = options.navigation && !breakpoint.is_small();

    LayoutInfo {
        slides_per_page: per_page,
        total_pages: total_pages(slide_count, per_page),
        container_width,
        slide_width: container_width / per_page as f32,
        slide_count,
        item_count,
        show_navigation,
        // Cards are links, never tab panels
        tab_model: false,
        grid: Some(GridDirective {
            columns: item_count,
            list_width,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure() -> Measurements {
        Measurements {
            viewport_width: 1000.0,
            viewport_padding_left: 20.0,
            viewport_padding_right: 20.0,
            gutter: 24.0,
            client_width: 1000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_cards_per_page_by_breakpoint() {
        assert_eq!(cards_per_page(Breakpoint::Sm, 3), 1);
        assert_eq!(cards_per_page(Breakpoint::Md, 3), 2);
        assert_eq!(cards_per_page(Breakpoint::Default, 3), 3);
        assert_eq!(cards_per_page(Breakpoint::Md, 1), 1);
    }

    #[test]
    fn test_large_layout() {
        let info = compute(&Tuning::default(), Breakpoint::Default, &measure(), &Options::default(), 6, 6);
        assert_eq!(info.slides_per_page, 3);
        assert_eq!(info.total_pages, 2);
        assert!((info.container_width - 984.0).abs() < 0.001);
        assert!((info.slide_width - 328.0).abs() < 0.001);
        let grid = info.grid.unwrap();
        assert_eq!(grid.columns, 6);
        // 960 * 2 + 24
        assert!((grid.list_width - 1944.0).abs() < 0.001);
        assert!(info.show_navigation);
        assert!(!info.tab_model);
    }

    #[test]
    fn test_small_layout_peeks_out() {
        let info = compute(&Tuning::default(), Breakpoint::Sm, &measure(), &Options::default(), 4, 4);
        assert_eq!(info.slides_per_page, 1);
        assert_eq!(info.total_pages, 4);
        // 960 - 24 peek + 24 gutter
        assert!((info.container_width - 960.0).abs() < 0.001);
        assert!(!info.show_navigation);

        let options = Options {
            peek_out: false,
            ..Default::default()
        };
        let info = compute(&Tuning::default(), Breakpoint::Sm, &measure(), &options, 4, 4);
        assert!((info.container_width - 984.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_viewport() {
        let info = compute(
            &Tuning::default(),
            Breakpoint::Default,
            &Measurements::default(),
            &Options::default(),
            5,
            5,
        );
        assert_eq!(info.total_pages, 2);
        assert!(info.slide_width.abs() < 0.001);
        assert!(info.grid.unwrap().list_width.abs() < 0.001);
    }
}
