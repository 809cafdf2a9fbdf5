//! WASM exports for the gesture controller
//!
//! [`DomHost`] implements the host traits on top of the live document and
//! `BipController` wraps [`GestureController`] with a JS-friendly API.
//! Elements are addressed through their `data-touch-id` attribute.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, CustomEvent, CustomEventInit, Document, Element, HtmlElement, Window};

use crate::config::BipConfig;
use crate::controller::GestureController;
use crate::event::BipEvent;
use crate::geometry::TransitionLists;
use crate::host::{Host, TransformProvider};
use crate::math::{Matrix2d, Point};
use crate::relation::{parse_id_list, ElementDecl, ElementId};
use crate::session::{GestureResult, Phase, PointerSource, ZoneHit};

/// Attribute carrying an element's identity
const ID_ATTR: &str = "data-touch-id";
const CONTROLS_ATTR: &str = "data-touch-controls";
const CLOSES_ATTR: &str = "data-touch-closes";
const BUDDIES_ATTR: &str = "data-touch-buddies";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);

    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Forwards `log` records to the browser console
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[bip] {}: {}", record.level(), record.args());
        match record.level() {
            Level::Error => console_error(&line),
            Level::Warn => console_warn(&line),
            _ => console_log(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

/// Host backed by the browser document
pub struct DomHost {
    window: Window,
    document: Document,
    /// Active configuration, attached to every emitted event
    settings: serde_json::Value,
    /// Body overflow before the scroll lock
    saved_overflow: Option<String>,
}

impl DomHost {
    /// Host for the current document, `None` outside a browser window
    pub fn new(config: &BipConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            settings: serde_json::to_value(config).unwrap_or(serde_json::Value::Null),
            saved_overflow: None,
        })
    }

    fn element(&self, id: &ElementId) -> Option<Element> {
        self.document
            .query_selector(&format!("[{}=\"{}\"]", ID_ATTR, id))
            .ok()
            .flatten()
    }

    fn computed(&self, id: &ElementId) -> Option<CssStyleDeclaration> {
        let element = self.element(id)?;
        self.window.get_computed_style(&element).ok().flatten()
    }

    fn inline(&self, id: &ElementId) -> Option<CssStyleDeclaration> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|el| el.style())
    }

    /// Read relationship declarations from the document.
    ///
    /// Elements taking part without an identity get a generated one.
    pub fn scan(&self, config: &BipConfig) -> Vec<ElementDecl> {
        let selector = format!("{},[{}]", config.gesture_zones(), ID_ATTR);
        let nodes = match self.document.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(_) => return Vec::new(),
        };

        let mut decls = Vec::new();
        for i in 0..nodes.length() {
            let element = match nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                Some(element) => element,
                None => continue,
            };

            let id = match element.get_attribute(ID_ATTR) {
                Some(id) if !id.is_empty() => id,
                _ => {
                    let id = format!("bip-{}", i);
                    let _ = element.set_attribute(ID_ATTR, &id);
                    id
                }
            };
            let list = |name: &str| -> Vec<ElementId> {
                element
                    .get_attribute(name)
                    .map(|v| parse_id_list(&v))
                    .unwrap_or_default()
            };

            decls.push(ElementDecl {
                id: id.into(),
                zone: element.matches(&config.selector).unwrap_or(false),
                controls: element
                    .get_attribute(CONTROLS_ATTR)
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| ElementId::from(v.trim())),
                closes: list(CLOSES_ATTR),
                buddies: list(BUDDIES_ATTR),
            });
        }
        decls
    }
}

impl TransformProvider for DomHost {
    fn transform(&self, element: &ElementId) -> Option<Matrix2d> {
        let value = self.computed(element)?.get_property_value("transform").ok()?;
        Matrix2d::parse_css(&value)
    }

    fn css_value(&self, element: &ElementId, property: &str) -> Option<String> {
        let value = self.computed(element)?.get_property_value(property).ok()?;
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn transition(&self, element: &ElementId) -> TransitionLists {
        let style = match self.computed(element) {
            Some(style) => style,
            None => return TransitionLists::none(),
        };
        let read = |name: &str| style.get_property_value(name).unwrap_or_default();
        TransitionLists {
            shorthand: read("transition"),
            delays: read("transition-delay"),
            durations: read("transition-duration"),
        }
    }
}

impl Host for DomHost {
    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.element(element)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn set_class(&mut self, element: &ElementId, class: &str, enabled: bool) {
        if let Some(el) = self.element(element) {
            let _ = el.class_list().toggle_with_force(class, enabled);
        }
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str) {
        if let Some(style) = self.inline(element) {
            let _ = style.set_property(property, value);
        }
    }

    fn clear_style(&mut self, element: &ElementId) {
        if let Some(el) = self.element(element) {
            let _ = el.remove_attribute("style");
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let style = match self.document.body() {
            Some(body) => body.style(),
            None => return,
        };

        if locked {
            if self.saved_overflow.is_none() {
                self.saved_overflow = Some(style.get_property_value("overflow").unwrap_or_default());
            }
            let _ = style.set_property("overflow", "hidden");
        } else if let Some(previous) = self.saved_overflow.take() {
            if previous.is_empty() {
                let _ = style.remove_property("overflow");
            } else {
                let _ = style.set_property("overflow", &previous);
            }
        }
    }

    fn set_expanded(&mut self, controller: &ElementId, expanded: bool) {
        if let Some(el) = self.element(controller) {
            let _ = el.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
        }
    }

    fn emit(&mut self, event: &BipEvent) {
        let element = match self.element(&event.target) {
            Some(element) => element,
            None => return,
        };

        let detail = serde_json::json!({
            "target": event.target,
            "settings": self.settings,
        });
        let detail = js_sys::JSON::parse(&detail.to_string()).unwrap_or(JsValue::NULL);

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&detail);
        if let Ok(custom) = CustomEvent::new_with_event_init_dict(event.kind.name(), &init) {
            let _ = element.dispatch_event(&custom);
        }
    }
}

/// Gesture controller for WASM - wraps GestureController with JS-friendly API
#[wasm_bindgen]
pub struct BipController {
    controller: GestureController,
    host: DomHost,
}

#[wasm_bindgen]
impl BipController {
    /// Create a controller from JSON options and the current document
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: &str) -> Result<BipController, JsValue> {
        console_error_panic_hook::set_once();
        init_logging();

        let json = if options_json.trim().is_empty() { "{}" } else { options_json };
        let config = BipConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut host = DomHost::new(&config).ok_or_else(|| JsValue::from_str("no document available"))?;
        let decls = host.scan(&config);
        let controller =
            GestureController::new(config, decls, &mut host).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self { controller, host })
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down on the event's target element
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, target: &Element, x: f64, y: f64, mouse: bool) -> String {
        let hit = self.zone_hit(target);
        let result = self
            .controller
            .pointer_down(&mut self.host, hit, Point::new(x, y), pointer_source(mouse));
        result_json(&result)
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f64, y: f64, mouse: bool) -> String {
        let result = self
            .controller
            .pointer_move(&mut self.host, Point::new(x, y), pointer_source(mouse));
        result_json(&result)
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f64, y: f64, mouse: bool) -> String {
        let result = self.controller.pointer_up(
            &mut self.host,
            Point::new(x, y),
            pointer_source(mouse),
            date_now(),
        );
        result_json(&result)
    }

    /// Handle a `transitionend` event on `target`
    #[wasm_bindgen]
    pub fn transition_end(&mut self, target: &Element) -> bool {
        match target.get_attribute(ID_ATTR) {
            Some(id) => self.controller.transition_end(&mut self.host, &id.into()),
            None => false,
        }
    }

    /// Finish settles whose transition end never arrived
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.controller.tick(&mut self.host, date_now())
    }

    // =========================================================================
    // Programmatic Control
    // =========================================================================

    /// Toggle an element by identity
    #[wasm_bindgen]
    pub fn toggle(&mut self, id: &str) -> String {
        let result = self.controller.toggle(&mut self.host, &id.into());
        result_json(&result)
    }

    /// Close every open panel
    #[wasm_bindgen]
    pub fn close_all(&mut self) -> usize {
        self.controller.close_all(&mut self.host)
    }

    /// Check if an element is open
    #[wasm_bindgen]
    pub fn is_open(&self, id: &str) -> bool {
        self.controller.is_open(&self.host, &id.into())
    }

    /// Current lifecycle phase
    #[wasm_bindgen]
    pub fn phase(&self) -> String {
        match self.controller.phase() {
            Phase::Idle => "idle",
            Phase::Armed => "armed",
            Phase::Dragging => "dragging",
            Phase::Settling => "settling",
        }
        .to_string()
    }

    /// Find the gesture zone around `target`
    fn zone_hit(&self, target: &Element) -> Option<ZoneHit> {
        let config = self.controller.config();
        let zone = target.closest(&config.gesture_zones()).ok().flatten()?;
        let id = zone.get_attribute(ID_ATTR)?;
        let ignored = target
            .closest(&config.ignore_selector)
            .ok()
            .flatten()
            .is_some();
        Some(ZoneHit {
            zone: id.into(),
            ignored,
        })
    }
}

fn pointer_source(mouse: bool) -> PointerSource {
    if mouse {
        PointerSource::Mouse
    } else {
        PointerSource::Touch
    }
}

fn result_json(result: &GestureResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"ignored"}"#.to_string())
}
