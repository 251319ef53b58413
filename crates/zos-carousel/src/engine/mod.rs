//! Carousel engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `paging`: slide/page state changes and change notifications
//! - `input`: pointer, keyboard and click handling
//! - `rendering`: render-state derivation and teardown

mod input;
mod paging;
mod rendering;

use crate::breakpoint::{Breakpoint, BreakpointSource};
use crate::config::{Options, PartialOptions, Tuning};
use crate::error::CarouselError;
use crate::events::EventEmitter;
use crate::input::GestureController;
use crate::layout::{LayoutCalculator, LayoutInfo, LayoutMode, Measurements, PagesX};
use crate::state::{SlideIndexMap, SlideState};
use crate::structure::Structure;
use crate::transition::TransitionState;

pub use rendering::{Teardown, MANAGED_ITEM_ATTRIBUTES};

/// Everything needed to construct a carousel
#[derive(Clone, Debug, Default)]
pub struct CarouselConfig {
    /// What the host found under the root
    pub structure: Structure,
    /// Options passed at construction
    pub options: PartialOptions,
    /// Options read from data attributes (highest precedence)
    pub attributes: PartialOptions,
    pub tuning: Tuning,
    /// Initial measurements
    pub measurements: Measurements,
    /// Host clock at construction; the first paint never animates
    pub now_ms: f64,
}

/// Carousel engine
///
/// Owns the slide state, the derived layout and page offsets, the gesture
/// controller and the transition bookkeeping. Time is passed in by the
/// host (`now_ms`) so behaviour is deterministic under test.
pub struct CarouselEngine {
    pub(crate) options: Options,
    pub(crate) tuning: Tuning,
    pub(crate) structure: Structure,
    pub(crate) map: SlideIndexMap,
    pub(crate) calculator: LayoutCalculator,
    pub(crate) breakpoints: Box<dyn BreakpointSource>,
    pub(crate) breakpoint: Breakpoint,
    pub(crate) measurements: Measurements,
    pub(crate) layout: LayoutInfo,
    pub(crate) pages: PagesX,
    pub(crate) state: SlideState,
    pub(crate) gesture: GestureController,
    pub(crate) transition: TransitionState,
    pub(crate) events: EventEmitter,
    /// Committed list transform (the resting offset of the current page)
    pub(crate) transform_x: f32,
    /// Transform shown right now (differs from committed mid-drag)
    pub(crate) display_x: f32,
    pub(crate) dragging_enabled: bool,
    /// Dots the host has built
    pub(crate) rendered_dots: usize,
    /// Last slide number announced to listeners
    pub(crate) announced_slide: i32,
    /// Last time the host told us about
    pub(crate) clock_ms: f64,
    pub(crate) destroyed: bool,
}

impl std::fmt::Debug for CarouselEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("options", &self.options)
            .field("breakpoint", &self.breakpoint)
            .field("layout", &self.layout)
            .field("state", &self.state)
            .field("transform_x", &self.transform_x)
            .finish_non_exhaustive()
    }
}

impl CarouselEngine {
    /// Create an engine and run the initial layout
    ///
    /// Fails if the structure lacks a required element.
    pub fn new(config: CarouselConfig, breakpoints: impl BreakpointSource + 'static) -> Result<Self, CarouselError> {
        config.structure.validate()?;

        let options = Options::resolve(&config.options, &config.attributes);
        let slide_count = config.structure.slide_count();
        let map = SlideIndexMap::new(slide_count, options.cyclical);
        let mode = if config.structure.is_cards {
            LayoutMode::Cards
        } else {
            LayoutMode::Fixed
        };
        let state = SlideState::new(&options, slide_count);
        let announced_slide = state.current_slide();

        let mut engine = Self {
            options,
            tuning: config.tuning,
            structure: config.structure,
            map,
            calculator: LayoutCalculator::new(mode, config.tuning),
            breakpoints: Box::new(breakpoints),
            breakpoint: Breakpoint::Default,
            measurements: config.measurements,
            layout: LayoutInfo::degenerate(slide_count, map.item_count()),
            pages: PagesX::default(),
            state,
            gesture: GestureController::new(config.tuning),
            transition: TransitionState::new(options.animation, config.tuning.transition_reenable_delay_ms),
            events: EventEmitter::new(),
            transform_x: 0.0,
            display_x: 0.0,
            dragging_enabled: true,
            rendered_dots: 0,
            announced_slide,
            clock_ms: config.now_ms,
            destroyed: false,
        };

        engine.recalculate();
        engine.transit();
        log::debug!(
            "carousel {:?} ready: {} slides, starting at {}",
            engine.structure.root_id,
            slide_count,
            engine.state.current_slide()
        );
        Ok(engine)
    }

    /// Resolved options
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Threshold constants in effect
    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Current layout
    #[inline]
    pub fn layout(&self) -> &LayoutInfo {
        &self.layout
    }

    /// Current page offsets
    #[inline]
    pub fn pages_x(&self) -> &PagesX {
        &self.pages
    }

    /// Breakpoint used by the last layout pass
    #[inline]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Slide state
    #[inline]
    pub fn state(&self) -> &SlideState {
        &self.state
    }

    /// Slide/item index conversions
    #[inline]
    pub fn index_map(&self) -> SlideIndexMap {
        self.map
    }

    /// Gesture controller
    #[inline]
    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    /// Committed transform of the slide list
    #[inline]
    pub fn transform_x(&self) -> f32 {
        self.transform_x
    }

    /// Transform currently displayed (follows the pointer mid-drag)
    #[inline]
    pub fn display_x(&self) -> f32 {
        self.display_x
    }

    /// Whether pointer dragging is active at the current breakpoint
    #[inline]
    pub fn dragging_enabled(&self) -> bool {
        self.dragging_enabled
    }

    /// Check if `destroy()` has run
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Event emitter for slide-change subscriptions
    #[inline]
    pub fn events_mut(&mut self) -> &mut EventEmitter {
        &mut self.events
    }

    /// Viewport resized or breakpoint changed
    ///
    /// Recomputes layout and offsets as a unit and jumps to the current
    /// page without animating. An active drag keeps going.
    pub fn resize(&mut self, measurements: Measurements, now_ms: f64) {
        self.clock_ms = now_ms;
        self.measurements = measurements;
        self.transition.suppress_next();
        self.recalculate();
        self.transit();
    }

    /// Advance timers: transition re-enable and gesture settling
    ///
    /// Returns `true` if the transition style changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.clock_ms = now_ms;
        self.gesture.tick();
        self.transition.tick(now_ms)
    }

    /// Recompute layout, offsets and drag enablement
    pub(crate) fn recalculate(&mut self) {
        self.breakpoint = self.breakpoints.breakpoint();
        self.layout = self.calculator.compute(
            self.breakpoint,
            &self.measurements,
            &self.options,
            self.map.slide_count(),
            self.map.item_count(),
        );
        self.pages = PagesX::compute(&self.layout, self.options.cyclical, self.structure.direction);
        self.dragging_enabled = self.options.dragging || self.breakpoint.is_small();
    }

    /// Move the committed transform to the current page
    pub(crate) fn transit(&mut self) {
        self.transition.transit(self.clock_ms);
        self.transform_x = self.pages.offset(self.current_page());
        self.display_x = self.transform_x;
    }
}
