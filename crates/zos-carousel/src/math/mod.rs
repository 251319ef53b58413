//! Numeric helpers shared by the layout, state and gesture modules

mod range;
mod vec2;

pub use range::{clamp, px_to_f32, wrap};
pub use vec2::Vec2;
