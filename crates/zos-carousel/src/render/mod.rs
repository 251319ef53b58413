//! Render contract
//!
//! Pure derivation from slide state and layout to everything the host
//! writes into the document: transforms, per-item accessibility state,
//! navigation dots, button state and focus moves. The host is the only
//! layer that touches the platform.

mod buttons;
mod contract;
mod navigation;
mod slides;

pub use contract::{
    derive, ButtonRender, DotRender, DotsRender, FocusInfo, FocusTarget, ItemRender, RenderInput, RenderState,
};
pub use navigation::{DEFAULT_NAVIGATION_LABEL, PAGE_NUMBER_VAR, PAGE_TOTAL_VAR};
