//! Layout calculation shared by both layout modes

use serde::{Deserialize, Deserializer, Serialize};

use crate::breakpoint::Breakpoint;
use crate::config::{Options, Tuning};
use crate::math::px_to_f32;

use super::{cards, fixed};

/// How slides are sized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Slides have their own CSS width
    Fixed,
    /// Cards share each page in a CSS grid
    Cards,
}

/// Raw measurements read from computed styles
///
/// Spacing fields accept numbers or CSS pixel strings (`"24px"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurements {
    /// Width of the slide list (fixed mode)
    pub list_width: f32,
    /// Width of the first slide (fixed mode)
    pub slide_width: f32,
    /// Width of the viewport including padding (card mode)
    pub viewport_width: f32,
    #[serde(deserialize_with = "css_px")]
    pub viewport_padding_left: f32,
    #[serde(deserialize_with = "css_px")]
    pub viewport_padding_right: f32,
    /// Column gap of the card grid
    #[serde(deserialize_with = "css_px")]
    pub gutter: f32,
    /// Document client width
    pub client_width: f32,
}

fn css_px<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Px {
        Number(f32),
        Css(String),
    }

    Ok(match Px::deserialize(deserializer)? {
        Px::Number(v) => v,
        Px::Css(s) => px_to_f32(&s),
    })
}

/// Grid directives for card mode
///
/// Not used by the paging decisions, but derived from the same inputs so
/// the visual grid and the page offsets agree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDirective {
    /// Equal columns in `grid-template-columns`
    pub columns: usize,
    /// Pixel width of the scrollable list
    pub list_width: f32,
}

/// Result of a layout pass
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutInfo {
    pub slides_per_page: i32,
    pub total_pages: i32,
    /// Width of one page
    pub container_width: f32,
    pub slide_width: f32,
    /// Real slides
    pub slide_count: usize,
    /// Rendered items, dummies included
    pub item_count: usize,
    /// Navigation dots are shown
    pub show_navigation: bool,
    /// Dots act as a tab list over slides
    pub tab_model: bool,
    /// Card mode only
    pub grid: Option<GridDirective>,
}

impl LayoutInfo {
    /// A single-page layout used before the first measurement
    pub fn degenerate(slide_count: usize, item_count: usize) -> Self {
        Self {
            slides_per_page: 1,
            total_pages: slide_count.max(1) as i32,
            container_width: 0.0,
            slide_width: 0.0,
            slide_count,
            item_count,
            show_navigation: false,
            tab_model: false,
            grid: None,
        }
    }
}

/// Computes [`LayoutInfo`] for a given mode
#[derive(Clone, Copy, Debug)]
pub struct LayoutCalculator {
    pub mode: LayoutMode,
    pub tuning: Tuning,
}

impl LayoutCalculator {
    /// Create a calculator for `mode`
    pub fn new(mode: LayoutMode, tuning: Tuning) -> Self {
        Self { mode, tuning }
    }

    /// Compute the layout for `slide_count` real slides
    ///
    /// `item_count` counts rendered items including cyclical dummies.
    pub fn compute(
        &self,
        breakpoint: Breakpoint,
        measurements: &Measurements,
        options: &Options,
        slide_count: usize,
        item_count: usize,
    ) -> LayoutInfo {
        let info = match self.mode {
            LayoutMode::Fixed => fixed::compute(&self.tuning, measurements, options, slide_count, item_count),
            LayoutMode::Cards => {
                cards::compute(&self.tuning, breakpoint, measurements, options, slide_count, item_count)
            }
        };
        log::debug!(
            "layout {:?} at {:?}: {} per page, {} pages, page width {}",
            self.mode,
            breakpoint,
            info.slides_per_page,
            info.total_pages,
            info.container_width
        );
        info
    }
}

/// `ceil(slide_count / per_page)`, at least one page
pub(super) fn total_pages(slide_count: usize, per_page: i32) -> i32 {
    let per_page = per_page.max(1) as usize;
    slide_count.div_ceil(per_page).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(9, 3), 3);
        assert_eq!(total_pages(10, 3), 4);
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_measurements_accept_css_pixels() {
        let m: Measurements =
            serde_json::from_str(r#"{"viewportWidth":960,"viewportPaddingLeft":"24px","gutter":"1.5px"}"#).unwrap();
        assert!((m.viewport_width - 960.0).abs() < 0.001);
        assert!((m.viewport_padding_left - 24.0).abs() < 0.001);
        assert!(m.viewport_padding_right.abs() < 0.001);
        assert!((m.gutter - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_layout() {
        let info = LayoutInfo::degenerate(4, 6);
        assert_eq!(info.slides_per_page, 1);
        assert_eq!(info.total_pages, 4);
        assert!(info.grid.is_none());
    }
}
