//! Carousel position, gesture and state engine
//!
//! This crate provides the paging core of the carousel component:
//! - Page offsets from slide geometry, reading direction and layout mode
//! - The current-slide state machine (clamped or wrapped, with dummy slides)
//! - A drag gesture controller that commits or rescinds page changes
//! - A pure render contract (visibility, focus and ARIA state)
//!
//! ## Architecture
//!
//! - [`math`]: Numeric helpers (`clamp`, `wrap`, `Vec2`)
//! - [`config`]: Options, data-attribute parsing and tuning constants
//! - [`layout`]: Fixed-slide and card-grid layouts, page offsets
//! - [`state`]: Slide state and slide/item index conversions
//! - [`input`]: Gesture state machine, keyboard and click routing
//! - [`transition`]: CSS transition enable/suppress bookkeeping
//! - [`render`]: Derived DOM-facing state
//! - [`events`]: Slide-change subscriptions
//!
//! ## Example
//!
//! ```rust
//! use zos_carousel::{CarouselConfig, CarouselEngine, FixedBreakpoint, Measurements, Structure};
//!
//! let config = CarouselConfig {
//!     structure: Structure::with_slides(9),
//!     measurements: Measurements {
//!         list_width: 300.0,
//!         slide_width: 100.0,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let mut carousel = CarouselEngine::new(config, FixedBreakpoint::new("lg")).unwrap();
//! carousel.next();
//! assert_eq!(carousel.current_slide(), 4);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: No browser dependencies outside the `wasm` feature
//! 2. **Time Abstraction**: Timers take `now_ms` from the host
//! 3. **Derived State**: Layout and page offsets are recomputed as a unit, never patched

pub mod breakpoint;
pub mod config;
pub mod events;
pub mod input;
pub mod layout;
pub mod math;
pub mod render;
pub mod state;
pub mod structure;
pub mod transition;

mod engine;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use breakpoint::{Breakpoint, BreakpointSource, FixedBreakpoint};
pub use config::{attribute_key, options_from_dataset, Options, PartialOptions, Tuning};
pub use events::{CarouselEvent, CarouselEventKind, EventEmitter, SubscriptionId};
pub use input::{ClickResult, ClickTarget, GestureDecision, GesturePhase, InputResult, Key, KeyTarget, PageStep};
pub use layout::{LayoutInfo, LayoutMode, Measurements, PagesX};
pub use math::{clamp, wrap, Vec2};
pub use render::{FocusInfo, FocusTarget, RenderState};
pub use state::SlideState;
pub use structure::{Direction, Structure};
pub use transition::TransitionStyle;

pub use engine::{CarouselConfig, CarouselEngine, Teardown, MANAGED_ITEM_ATTRIBUTES};
pub use error::{CarouselError, Element};
