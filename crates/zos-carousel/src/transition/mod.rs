//! CSS transition bookkeeping
//!
//! The slide list animates between pages with a CSS transition. Some
//! frames must jump instead: the first layout paint, frames after a resize,
//! the re-home from a dummy slide, and every frame of an active drag.

mod state;

pub use state::{TransitionState, TransitionStyle};
