//! Render inputs and outputs

use serde::Serialize;

use crate::config::Options;
use crate::layout::LayoutInfo;
use crate::state::{ItemIndex, SlideIndexMap};
use crate::transition::TransitionStyle;

use super::{buttons, navigation, slides};

/// Which carousel element holds document focus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusInfo {
    #[default]
    None,
    /// A rendered item (clones included)
    Item(ItemIndex),
    /// A navigation dot (0-based)
    Dot(usize),
    PrevButton,
    NextButton,
}

/// Element the host must move focus to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "index", rename_all = "camelCase")]
pub enum FocusTarget {
    Item(ItemIndex),
    Dot(usize),
    PrevButton,
    NextButton,
}

/// Everything a render pass derives from
#[derive(Clone, Copy, Debug)]
pub struct RenderInput<'a> {
    pub options: &'a Options,
    pub layout: &'a LayoutInfo,
    pub map: SlideIndexMap,
    /// Stored slide number, possibly a dummy
    pub raw_slide: i32,
    /// Page of the stored slide, possibly a dummy page
    pub raw_page: i32,
    pub is_cards: bool,
    /// Document client width, for the narrow-viewport rule
    pub client_width: f32,
    pub narrow_viewport_px: f32,
    pub focus: FocusInfo,
    pub root_id: &'a str,
    pub slide_ids: &'a [String],
    pub navigation_label: Option<&'a str>,
    /// Dots the host currently has
    pub existing_dots: usize,
    pub transform_x: f32,
    pub transition: TransitionStyle,
    pub dragging_enabled: bool,
}

impl RenderInput<'_> {
    /// Current real slide number
    pub(super) fn current_slide(&self) -> i32 {
        self.map.slide_of_item(self.map.item_of_slide(self.raw_slide))
    }
}

/// Accessibility state of one rendered item
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRender {
    pub id: String,
    pub is_clone: bool,
    pub aria_hidden: bool,
    /// `tabpanel` in the tab model
    pub role: Option<&'static str>,
    /// Managed only in card mode and for clones
    pub tab_index: Option<i32>,
    /// Focusable descendants stay in the tab order
    pub descendants_tabbable: bool,
}

/// One navigation dot
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotRender {
    /// 1-based page
    pub page: i32,
    pub active: bool,
    pub tab_index: i32,
    pub role: Option<&'static str>,
    pub aria_selected: Option<bool>,
    pub aria_current: Option<bool>,
    pub aria_controls: String,
    pub aria_labelledby: Option<String>,
    pub aria_label: Option<String>,
}

/// Navigation dots
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotsRender {
    pub visible: bool,
    /// Container gets `role="tablist"`
    pub tab_list: bool,
    /// Dot count changed; host recreates the dot elements
    pub rebuild: bool,
    pub dots: Vec<DotRender>,
}

/// Prev/next button state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonRender {
    pub inactive: bool,
}

/// Output of a render pass
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    pub transform_x: f32,
    pub transition: TransitionStyle,
    pub items: Vec<ItemRender>,
    pub dots: DotsRender,
    pub prev_button: ButtonRender,
    pub next_button: ButtonRender,
    pub focus: Option<FocusTarget>,
    pub peek_out: bool,
    pub disable_grab: bool,
    pub grid_columns: Option<usize>,
    pub list_width: Option<f32>,
}

/// Derive the render state
pub fn derive(input: &RenderInput<'_>) -> RenderState {
    let (items, item_focus) = slides::render_items(input);
    let (dots, dot_focus) = navigation::render_dots(input);
    let (prev_button, next_button, button_focus) = buttons::render_buttons(input);

    RenderState {
        transform_x: input.transform_x,
        transition: input.transition,
        items,
        dots,
        prev_button,
        next_button,
        focus: item_focus.or(dot_focus).or(button_focus),
        peek_out: input.options.peek_out,
        disable_grab: !input.dragging_enabled,
        grid_columns: input.layout.grid.map(|g| g.columns),
        list_width: input.layout.grid.map(|g| g.list_width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::page_of;

    struct Fixture {
        options: Options,
        layout: LayoutInfo,
        ids: Vec<String>,
    }

    impl Fixture {
        fn new(slides: usize, per_page: i32, cyclical: bool) -> Self {
            let options = Options {
                cyclical,
                ..Default::default()
            };
            let map = SlideIndexMap::new(slides, cyclical);
            let total = slides.div_ceil(per_page as usize) as i32;
            let layout = LayoutInfo {
                slides_per_page: per_page,
                total_pages: total,
                show_navigation: true,
                tab_model: per_page == 1,
                ..LayoutInfo::degenerate(slides, map.item_count())
            };
            let ids = (1..=slides).map(|i| format!("s{}", i)).collect();
            Self { options, layout, ids }
        }

        fn input(&self, raw_slide: i32, focus: FocusInfo) -> RenderInput<'_> {
            RenderInput {
                options: &self.options,
                layout: &self.layout,
                map: SlideIndexMap::new(self.ids.len(), self.options.cyclical),
                raw_slide,
                raw_page: page_of(raw_slide, self.layout.slides_per_page),
                is_cards: false,
                client_width: 1200.0,
                narrow_viewport_px: 600.0,
                focus,
                root_id: "root",
                slide_ids: &self.ids,
                navigation_label: None,
                existing_dots: 0,
                transform_x: 0.0,
                transition: TransitionStyle::Enabled,
                dragging_enabled: true,
            }
        }
    }

    #[test]
    fn test_visibility_by_page() {
        let f = Fixture::new(9, 3, false);
        let r = derive(&f.input(4, FocusInfo::None));
        let hidden: Vec<bool> = r.items.iter().map(|i| i.aria_hidden).collect();
        assert_eq!(hidden, vec![true, true, true, false, false, false, true, true, true]);
        assert!(r.items.iter().all(|i| i.role.is_none() && i.tab_index.is_none()));
        assert!(r.items[3].descendants_tabbable);
        assert!(!r.items[4].descendants_tabbable);
    }

    #[test]
    fn test_last_page_flush_visibility() {
        // 10 slides, 3 per page: page 4 shows slides 8-10
        let f = Fixture::new(10, 3, false);
        let r = derive(&f.input(10, FocusInfo::None));
        let visible: Vec<usize> = r
            .items
            .iter()
            .enumerate()
            .filter(|(_, i)| !i.aria_hidden)
            .map(|(n, _)| n)
            .collect();
        assert_eq!(visible, vec![7, 8, 9]);
    }

    #[test]
    fn test_tab_model_dots() {
        let f = Fixture::new(3, 1, false);
        let r = derive(&f.input(2, FocusInfo::None));
        assert!(r.dots.visible);
        assert!(r.dots.tab_list);
        assert!(r.dots.rebuild);
        assert_eq!(r.dots.dots.len(), 3);
        let dot = &r.dots.dots[1];
        assert!(dot.active);
        assert_eq!(dot.aria_selected, Some(true));
        assert_eq!(dot.role, Some("tab"));
        assert_eq!(dot.aria_controls, "s2");
        assert_eq!(r.dots.dots[0].tab_index, -1);
        assert_eq!(r.items[0].role, Some("tabpanel"));
    }

    #[test]
    fn test_list_model_dots() {
        let f = Fixture::new(9, 3, false);
        let mut input = f.input(7, FocusInfo::None);
        input.existing_dots = 3;
        let r = derive(&input);
        assert!(!r.dots.tab_list);
        assert!(!r.dots.rebuild);
        let dot = &r.dots.dots[2];
        assert_eq!(dot.aria_current, Some(true));
        assert_eq!(dot.aria_selected, None);
        assert_eq!(dot.aria_controls, "root");
        assert_eq!(dot.aria_label.as_deref(), Some("Selected tab 3 of 3"));
    }

    #[test]
    fn test_buttons_and_focus_handoff() {
        let f = Fixture::new(9, 3, false);
        let r = derive(&f.input(1, FocusInfo::PrevButton));
        assert!(r.prev_button.inactive);
        assert!(!r.next_button.inactive);
        assert_eq!(r.focus, Some(FocusTarget::NextButton));

        let r = derive(&f.input(7, FocusInfo::NextButton));
        assert!(r.next_button.inactive);
        assert_eq!(r.focus, Some(FocusTarget::PrevButton));

        let r = derive(&f.input(4, FocusInfo::NextButton));
        assert_eq!(r.focus, None);
    }

    #[test]
    fn test_cyclical_buttons_always_enabled() {
        let f = Fixture::new(3, 1, true);
        let r = derive(&f.input(1, FocusInfo::PrevButton));
        assert!(!r.prev_button.inactive);
        assert!(!r.next_button.inactive);
        assert_eq!(r.focus, None);
    }

    #[test]
    fn test_cyclical_clones() {
        let f = Fixture::new(3, 1, true);
        let r = derive(&f.input(1, FocusInfo::None));
        assert_eq!(r.items.len(), 5);
        assert_eq!(r.items[0].id, "s3-copy");
        assert_eq!(r.items[4].id, "s1-copy");
        assert!(r.items[0].aria_hidden && r.items[4].aria_hidden);
        assert_eq!(r.items[0].tab_index, Some(-1));
        assert!(!r.items[1].aria_hidden);

        // On the trailing dummy the clone is announced
        let r = derive(&f.input(4, FocusInfo::None));
        assert!(!r.items[4].aria_hidden);
        // Dot for the wrapped page stays active
        assert!(r.dots.dots[0].active);
    }

    #[test]
    fn test_focus_follows_current_item() {
        let f = Fixture::new(3, 1, true);
        // Focus on the real first slide while the trailing dummy is shown
        let r = derive(&f.input(4, FocusInfo::Item(4)));
        assert_eq!(r.focus, Some(FocusTarget::Item(1)));

        let r = derive(&f.input(2, FocusInfo::Item(2)));
        assert_eq!(r.focus, None);

        let f = Fixture::new(3, 1, false);
        let r = derive(&f.input(3, FocusInfo::Dot(0)));
        assert_eq!(r.focus, Some(FocusTarget::Dot(2)));
    }

    #[test]
    fn test_cards_narrow_viewport_all_visible() {
        let f = Fixture::new(6, 3, false);
        let mut input = f.input(1, FocusInfo::None);
        input.is_cards = true;
        input.client_width = 400.0;
        let r = derive(&input);
        assert!(r.items.iter().all(|i| !i.aria_hidden));
        assert_eq!(r.items[0].tab_index, Some(0));
        assert_eq!(r.items[1].tab_index, Some(-1));

        input.client_width = 1024.0;
        let r = derive(&input);
        assert!(r.items[3].aria_hidden);
    }

    #[test]
    fn test_hidden_navigation() {
        let mut f = Fixture::new(3, 1, false);
        f.layout.show_navigation = false;
        let r = derive(&f.input(1, FocusInfo::None));
        assert!(!r.dots.visible);
        assert!(r.dots.dots.is_empty());
        assert!(!r.dots.rebuild);
    }
}
