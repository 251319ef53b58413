//! Slide-index state
//!
//! Two quantities are kept apart:
//! - the *slide number*: 1-based position among real slides, which may
//!   transiently sit in the dummy buffer (0 or N + 1)
//! - the *item index*: 0-based position among rendered items, dummy
//!   clones included

mod index;
mod slide_state;

pub use index::{ItemIndex, SlideIndexMap};
pub use slide_state::{page_of, SlideState};
