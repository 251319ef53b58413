//! WASM exports for the carousel engine
//!
//! This module provides wasm-bindgen exports for the CarouselEngine,
//! allowing the component script to forward DOM events and apply the
//! derived render state.

use std::collections::HashMap;

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::breakpoint::BreakpointSource;
use crate::config::{options_from_dataset, PartialOptions, Tuning};
use crate::engine::{CarouselConfig, CarouselEngine};
use crate::error::CarouselError;
use crate::events::{CarouselEventKind, SubscriptionId};
use crate::input::{ClickResult, ClickTarget, Key, KeyTarget};
use crate::layout::Measurements;
use crate::render::FocusInfo;
use crate::structure::Structure;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Forwards `log` records to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            log(&format!("[{}] {}: {}", record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_runtime() {
    console_error_panic_hook::set_once();
    // Another crate on the page may have installed a logger already
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

/// Milliseconds from `performance.now()`
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Breakpoint source backed by a JS callback returning the size token
struct JsBreakpoints(Function);

impl BreakpointSource for JsBreakpoints {
    fn current_breakpoint(&self) -> String {
        self.0
            .call0(&JsValue::NULL)
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }
}

fn parse_json<T: serde::de::DeserializeOwned + Default>(json: &str) -> Result<T, CarouselError> {
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(json).map_err(|e| CarouselError::InvalidOptions(e.to_string()))
}

fn to_js(err: CarouselError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

fn key_target(target: &str) -> KeyTarget {
    match target {
        "dot" => KeyTarget::Dot,
        "slide" => KeyTarget::Slide,
        _ => KeyTarget::Other,
    }
}

fn click_target(target: &str, page: i32) -> ClickTarget {
    match target {
        "next" => ClickTarget::NextButton,
        "prev" => ClickTarget::PrevButton,
        "dot" => ClickTarget::Dot(page),
        "content" => ClickTarget::Content,
        _ => ClickTarget::Other,
    }
}

fn focus_info(kind: &str, index: usize) -> FocusInfo {
    match kind {
        "item" => FocusInfo::Item(index),
        "dot" => FocusInfo::Dot(index),
        "prev" => FocusInfo::PrevButton,
        "next" => FocusInfo::NextButton,
        _ => FocusInfo::None,
    }
}

/// Carousel controller for WASM - wraps CarouselEngine with JS-friendly API
#[wasm_bindgen]
pub struct CarouselController {
    engine: CarouselEngine,
}

#[wasm_bindgen]
impl CarouselController {
    /// Create a controller
    ///
    /// `structure_json` describes the root element, `options_json` holds
    /// passed options, `dataset_json` is the root's `dataset`. Throws when
    /// a required element is missing.
    #[wasm_bindgen(constructor)]
    pub fn new(
        structure_json: &str,
        options_json: &str,
        dataset_json: &str,
        measurements_json: &str,
        breakpoint: Function,
    ) -> Result<CarouselController, JsValue> {
        init_runtime();

        let structure: Structure = parse_json(structure_json).map_err(to_js)?;
        let options: PartialOptions = parse_json(options_json).map_err(to_js)?;
        let dataset: HashMap<String, String> = parse_json(dataset_json).map_err(to_js)?;
        let measurements: Measurements = parse_json(measurements_json).map_err(to_js)?;

        let config = CarouselConfig {
            structure,
            options,
            attributes: options_from_dataset(&dataset),
            tuning: Tuning::default(),
            measurements,
            now_ms: now_ms(),
        };
        let engine = CarouselEngine::new(config, JsBreakpoints(breakpoint)).map_err(to_js)?;
        Ok(Self { engine })
    }

    /// DOM event type of slide-change notifications
    #[wasm_bindgen]
    pub fn slide_change_event() -> String {
        CarouselEventKind::SlideChange.event_type().to_string()
    }

    /// Set the console log level ("error", "warn", "info", "debug", "trace")
    #[wasm_bindgen]
    pub fn set_log_level(level: &str) {
        let filter = level.parse().unwrap_or(log::LevelFilter::Warn);
        log::set_max_level(filter);
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Advance one page
    #[wasm_bindgen]
    pub fn next(&mut self) {
        self.engine.next();
    }

    /// Go back one page
    #[wasm_bindgen]
    pub fn previous(&mut self) {
        self.engine.previous();
    }

    /// Back to the configured starting slide
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Current slide number (1-based)
    #[wasm_bindgen]
    pub fn get_current_slide(&self) -> i32 {
        self.engine.current_slide()
    }

    /// Jump to a slide
    #[wasm_bindgen]
    pub fn set_current_slide(&mut self, slide: i32) {
        self.engine.set_current_slide(slide);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Viewport resized or breakpoint changed
    #[wasm_bindgen]
    pub fn resize(&mut self, measurements_json: &str) -> Result<(), JsValue> {
        let measurements: Measurements = parse_json(measurements_json).map_err(to_js)?;
        self.engine.resize(measurements, now_ms());
        Ok(())
    }

    /// Get layout as JSON
    #[wasm_bindgen]
    pub fn layout_json(&self) -> String {
        to_json(self.engine.layout())
    }

    /// Page offsets, index 0 being the first page (a dummy when cyclical)
    #[wasm_bindgen]
    pub fn pages_x(&self) -> Vec<f32> {
        self.engine.pages_x().as_slice().to_vec()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle pointer/touch down; returns the input result as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: i16, contacts: u32) -> String {
        to_json(&self.engine.handle_pointer_down(x, y, button, contacts, now_ms()))
    }

    /// Handle pointer/touch move; `{"type":"requestFrame"}` asks for a frame
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        to_json(&self.engine.handle_pointer_move(x, y))
    }

    /// Handle pointer/touch up
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, contacts_remaining: u32) -> String {
        to_json(&self.engine.handle_pointer_up(contacts_remaining, now_ms()))
    }

    /// Handle pointer cancel
    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self) -> String {
        to_json(&self.engine.handle_pointer_cancel(now_ms()))
    }

    /// Animation-frame callback; transform to display while dragging
    #[wasm_bindgen]
    pub fn animation_frame(&mut self) -> Option<f32> {
        self.engine.animation_frame()
    }

    /// Handle a keydown; `target` is "dot", "slide" or anything else
    #[wasm_bindgen]
    pub fn key_down(&mut self, code: &str, target: &str) -> bool {
        self.engine.handle_key(Key::from_code(code), key_target(target))
    }

    /// Handle a click; returns "handled", "suppress" or "ignored"
    #[wasm_bindgen]
    pub fn click(&mut self, target: &str, page: i32) -> String {
        match self.engine.handle_click(click_target(target, page)) {
            ClickResult::Handled => "handled",
            ClickResult::Suppress => "suppress",
            ClickResult::Ignored => "ignored",
        }
        .to_string()
    }

    /// `transitionend` on the slide list
    #[wasm_bindgen]
    pub fn transition_end(&mut self) -> bool {
        self.engine.handle_transition_end(now_ms())
    }

    /// Advance timers; returns `true` if the transition style changed
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.engine.tick(now_ms())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Get render state as JSON
    ///
    /// `focus` names the focused element ("item", "dot", "prev", "next" or
    /// empty) and `index` its position for items and dots.
    #[wasm_bindgen]
    pub fn render_json(&mut self, focus: &str, index: usize, client_width: f32) -> String {
        to_json(&self.engine.render(focus_info(focus, index), client_width))
    }

    // =========================================================================
    // Events & lifecycle
    // =========================================================================

    /// Subscribe to slide changes; the callback receives the event as JSON
    #[wasm_bindgen]
    pub fn subscribe(&mut self, callback: Function) -> u64 {
        let id = self.engine.subscribe(move |event| {
            let payload = JsValue::from_str(&to_json(event));
            if let Err(e) = callback.call1(&JsValue::NULL, &payload) {
                log::warn!("slide change listener threw: {:?}", e);
            }
        });
        id.0
    }

    /// Remove a subscription
    #[wasm_bindgen]
    pub fn unsubscribe(&mut self, id: u64) -> bool {
        self.engine.unsubscribe(SubscriptionId(id))
    }

    /// Tear down; returns the teardown directive as JSON, or nothing if
    /// already destroyed
    #[wasm_bindgen]
    pub fn destroy(&mut self) -> Option<String> {
        self.engine.destroy().map(|t| to_json(&t))
    }
}
