//! Previous/next buttons

use super::contract::{ButtonRender, FocusInfo, FocusTarget, RenderInput};

pub(super) fn render_buttons(input: &RenderInput<'_>) -> (ButtonRender, ButtonRender, Option<FocusTarget>) {
    // No terminal page to disable at
    if input.options.cyclical {
        let enabled = ButtonRender { inactive: false };
        return (enabled, enabled, None);
    }

    let is_first = input.raw_page <= 1;
    let is_last = input.raw_page >= input.layout.total_pages;

    let focus = match input.focus {
        FocusInfo::NextButton if is_last => Some(FocusTarget::PrevButton),
        FocusInfo::PrevButton if is_first => Some(FocusTarget::NextButton),
        _ => None,
    };

    (
        ButtonRender { inactive: is_first },
        ButtonRender { inactive: is_last },
        focus,
    )
}
