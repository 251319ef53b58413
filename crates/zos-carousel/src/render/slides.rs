//! Per-item accessibility state

use super::contract::{FocusInfo, FocusTarget, ItemRender, RenderInput};

const ROLE_TABPANEL: &str = "tabpanel";
const NOT_TABBABLE: i32 = -1;
const TABBABLE: i32 = 0;

pub(super) fn render_items(input: &RenderInput<'_>) -> (Vec<ItemRender>, Option<FocusTarget>) {
    let map = input.map;
    let layout = input.layout;
    let per_page = layout.slides_per_page.max(1) as usize;
    let n = map.slide_count();

    let current_item = map.item_of_slide(input.current_slide());
    let raw_item = map.item_of_slide(input.raw_slide);
    let all_visible = input.is_cards && input.client_width < input.narrow_viewport_px;

    let items = (0..map.item_count())
        .map(|item| {
            let slide = map.slide_of_item(item);
            let id = input
                .slide_ids
                .get((slide - 1) as usize)
                .cloned()
                .unwrap_or_default();

            if map.is_clone(item) {
                // Only the dummy currently shown is announced
                return ItemRender {
                    id: format!("{}-copy", id),
                    is_clone: true,
                    aria_hidden: item != raw_item,
                    role: None,
                    tab_index: Some(NOT_TABBABLE),
                    descendants_tabbable: false,
                };
            }

            let index = (slide - 1) as usize;
            let is_current = item == current_item;
            let on_page = (index / per_page) as i32 == input.raw_page - 1;
            let flush_on_last = input.raw_page == layout.total_pages && index + per_page >= n;
            let visible = is_current || on_page || flush_on_last;

            ItemRender {
                id,
                is_clone: false,
                aria_hidden: !(visible || all_visible),
                role: layout.tab_model.then_some(ROLE_TABPANEL),
                tab_index: input
                    .is_cards
                    .then_some(if is_current { TABBABLE } else { NOT_TABBABLE }),
                descendants_tabbable: is_current,
            }
        })
        .collect();

    let focus = match input.focus {
        FocusInfo::Item(focused) if focused != current_item => Some(FocusTarget::Item(current_item)),
        _ => None,
    };

    (items, focus)
}
