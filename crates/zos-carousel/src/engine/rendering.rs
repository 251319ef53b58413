//! Render-state derivation and teardown

use serde::Serialize;

use crate::render::{self, FocusInfo, RenderInput, RenderState};
use super::CarouselEngine;

/// Attributes the engine manages on rendered items
pub const MANAGED_ITEM_ATTRIBUTES: &[&str] = &["aria-hidden", "role", "tabindex"];

/// What the host must undo after `destroy()`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Teardown {
    /// Items whose managed attributes are removed
    pub item_ids: Vec<String>,
    pub item_attributes: Vec<&'static str>,
    /// Clone items the host created and must remove
    pub clone_ids: Vec<String>,
    /// Dots the host created and must remove
    pub dot_count: usize,
    /// Clear the inline transform and transition on the slide list
    pub clear_list_style: bool,
    /// Pointer listeners to drop
    pub unregister_drag: bool,
}

impl CarouselEngine {
    /// Derive the render state for the current slide, layout and focus
    ///
    /// `client_width` is the document's client width, used by card
    /// carousels to treat narrow viewports as scroll-snap lists.
    pub fn render(&mut self, focus: FocusInfo, client_width: f32) -> RenderState {
        let state = self.render_state(focus, client_width);
        if state.dots.visible {
            self.rendered_dots = state.dots.dots.len();
        }
        state
    }

    /// Same as [`render`](Self::render) without recording the dots built
    pub fn render_state(&self, focus: FocusInfo, client_width: f32) -> RenderState {
        let input = RenderInput {
            options: &self.options,
            layout: &self.layout,
            map: self.map,
            raw_slide: self.state.raw_slide(),
            raw_page: self.current_page(),
            is_cards: self.structure.is_cards,
            client_width,
            narrow_viewport_px: self.tuning.narrow_viewport_px,
            focus,
            root_id: &self.structure.root_id,
            slide_ids: &self.structure.slide_ids,
            navigation_label: self.structure.navigation_label.as_deref(),
            existing_dots: self.rendered_dots,
            transform_x: self.display_x,
            transition: self.transition.style(),
            dragging_enabled: self.dragging_enabled,
        };
        render::derive(&input)
    }

    /// Tear the carousel down
    ///
    /// Clears subscriptions and any gesture in flight. Returns `None` when
    /// already destroyed.
    pub fn destroy(&mut self) -> Option<Teardown> {
        if self.destroyed {
            return None;
        }
        self.destroyed = true;
        self.events.clear();
        self.gesture.cancel();
        log::debug!("carousel {:?} destroyed", self.structure.root_id);

        let clone_ids = (0..self.map.item_count())
            .filter(|&item| self.map.is_clone(item))
            .filter_map(|item| {
                let slide = self.map.slide_of_item(item);
                self.structure.slide_ids.get((slide - 1) as usize)
            })
            .map(|id| format!("{}-copy", id))
            .collect();

        Some(Teardown {
            item_ids: self.structure.slide_ids.clone(),
            item_attributes: MANAGED_ITEM_ATTRIBUTES.to_vec(),
            clone_ids,
            dot_count: self.rendered_dots,
            clear_list_style: true,
            unregister_drag: true,
        })
    }
}
