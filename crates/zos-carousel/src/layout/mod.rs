//! Page geometry
//!
//! - [`LayoutCalculator`] turns measurements into a [`LayoutInfo`]
//! - [`PagesX`] maps page numbers to horizontal offsets
//!
//! Both are recomputed as a unit whenever the viewport resizes or the
//! breakpoint changes; nothing here is patched incrementally.

mod calculator;
mod cards;
mod fixed;
mod pages;

pub use calculator::{GridDirective, LayoutCalculator, LayoutInfo, LayoutMode, Measurements};
pub use pages::PagesX;
