//! Navigation dots

use crate::math::wrap;

use super::contract::{DotRender, DotsRender, FocusInfo, FocusTarget, RenderInput};

/// Placeholder for the 1-based page number in a label template
pub const PAGE_NUMBER_VAR: &str = "$page_number$";
/// Placeholder for the page count in a label template
pub const PAGE_TOTAL_VAR: &str = "$page_total$";
/// Label used when the host supplies none
pub const DEFAULT_NAVIGATION_LABEL: &str = "Selected tab $page_number$ of $page_total$";

fn label(template: &str, page: i32, total: i32) -> String {
    template
        .replace(PAGE_NUMBER_VAR, &page.to_string())
        .replace(PAGE_TOTAL_VAR, &total.to_string())
}

pub(super) fn render_dots(input: &RenderInput<'_>) -> (DotsRender, Option<FocusTarget>) {
    let layout = input.layout;
    if !layout.show_navigation {
        return (DotsRender::default(), None);
    }

    let total = layout.total_pages.max(1);
    let per_page = layout.slides_per_page.max(1) as usize;
    let current = (wrap(input.raw_page, 1, total) - 1) as usize;
    let template = input.navigation_label.unwrap_or(DEFAULT_NAVIGATION_LABEL);

    let dots = (0..total as usize)
        .map(|i| {
            let is_current = i == current;
            let page = i as i32 + 1;
            let base = DotRender {
                page,
                active: is_current,
                tab_index: if is_current { 0 } else { -1 },
                role: None,
                aria_selected: None,
                aria_current: None,
                aria_controls: input.root_id.to_string(),
                aria_labelledby: None,
                aria_label: None,
            };
            if layout.tab_model {
                let slide_id = input.slide_ids.get(i * per_page).cloned().unwrap_or_default();
                DotRender {
                    role: Some("tab"),
                    aria_selected: Some(is_current),
                    aria_controls: slide_id.clone(),
                    aria_labelledby: Some(slide_id),
                    ..base
                }
            } else {
                DotRender {
                    aria_current: Some(is_current),
                    aria_label: Some(label(template, page, total)),
                    ..base
                }
            }
        })
        .collect::<Vec<_>>();

    let focus = match input.focus {
        FocusInfo::Dot(focused) if focused != current => Some(FocusTarget::Dot(current)),
        _ => None,
    };

    let render = DotsRender {
        visible: true,
        tab_list: layout.tab_model,
        rebuild: input.existing_dots != dots.len(),
        dots,
    };
    (render, focus)
}
