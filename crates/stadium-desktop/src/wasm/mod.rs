//! WASM exports for the desktop
//!
//! This module provides wasm-bindgen exports for the [`Desktop`], allowing
//! the front-end to drive the windows and to receive change notifications.
//!
//! Registry events are queued while the desktop is borrowed. Before the
//! borrow ends each event's window shell is refreshed, and events that leave
//! a window needing a re-render are delivered to JavaScript callbacks
//! together with the rendered descriptor. Every export takes `&self` so
//! callbacks may call back into the controller.

mod dom;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent, TouchEvent};

use crate::config::DesktopConfig;
use crate::desktop::Desktop;
use crate::error::DesktopError;
use crate::input::{InputResult, PointerInput};
use crate::math::{Size, Vec2};
use crate::window::{RegistryEvent, WindowDescriptor, WindowId, WindowRegion};
use dom::{DragTracking, Phase, ScopedListeners, DRAG_MOUSE_EVENTS, DRAG_TOUCH_EVENTS};

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

impl From<DesktopError> for JsValue {
    fn from(err: DesktopError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn parse_window(name: &str) -> Result<WindowId, JsValue> {
    name.parse::<WindowId>().map_err(JsValue::from)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// State shared between the controller and its DOM listeners
struct Shared {
    desktop: RefCell<Desktop>,
    /// Events recorded by the registry subscription, not yet delivered
    pending: Rc<RefCell<Vec<RegistryEvent>>>,
    callbacks: RefCell<Vec<js_sys::Function>>,
    tracking: RefCell<DragTracking>,
}

impl Shared {
    /// Run `f` against the desktop, then deliver the events it produced
    fn with_desktop<R>(&self, f: impl FnOnce(&mut Desktop) -> R) -> R {
        let mut desktop = self.desktop.borrow_mut();
        let result = f(&mut *desktop);
        let notifications = self.render(&mut desktop);
        drop(desktop);
        self.deliver(notifications);
        result
    }

    /// Refresh the shells touched by queued events
    fn render(&self, desktop: &mut Desktop) -> Vec<(RegistryEvent, WindowDescriptor)> {
        let events: Vec<RegistryEvent> = self.pending.borrow_mut().drain(..).collect();
        events
            .into_iter()
            .filter_map(|event| {
                let id = event.window_id();
                if !desktop.refresh_shell(id) {
                    return None;
                }
                desktop.shell(id).rendered().map(|window| (event, window.clone()))
            })
            .collect()
    }

    fn deliver(&self, notifications: Vec<(RegistryEvent, WindowDescriptor)>) {
        if notifications.is_empty() {
            return;
        }
        let callbacks = self.callbacks.borrow().clone();
        for (event, window) in notifications {
            let payload = js_sys::JSON::parse(&to_json(&event)).unwrap_or(JsValue::NULL);
            let window = js_sys::JSON::parse(&to_json(&window)).unwrap_or(JsValue::NULL);
            if payload.is_object() {
                let _ = js_sys::Reflect::set(&payload, &JsValue::from_str("window"), &window);
            }
            for callback in &callbacks {
                if let Err(e) = callback.call1(&JsValue::NULL, &payload) {
                    log(&format!("[stadium-desktop] subscriber failed: {:?}", e));
                }
            }
        }
    }

    /// Feed pointer input to the desktop and start or stop drag tracking
    fn pointer(self: &Rc<Self>, input: PointerInput) -> InputResult {
        let (result, dragging) = self.with_desktop(|desktop| {
            let result = desktop.handle_pointer(input);
            (result, desktop.dragging().is_some())
        });
        if result == InputResult::Capture {
            if let Err(e) = self.track_drag() {
                log(&format!("[stadium-desktop] failed to track drag: {:?}", e));
            }
        } else if !dragging {
            // Also covers a press that dropped a capture whose release was missed
            self.tracking.borrow_mut().stop();
        }
        result
    }

    /// Attach document move/release listeners for the drag that just started
    fn track_drag(self: &Rc<Self>) -> Result<(), JsValue> {
        let document = dom::document()?;

        let mut listeners = ScopedListeners::new(document);
        for (event, phase) in DRAG_MOUSE_EVENTS {
            listeners.on_mouse(event, mouse_handler(Rc::downgrade(self), phase))?;
        }
        for (event, phase) in DRAG_TOUCH_EVENTS {
            listeners.on_touch(event, touch_handler(Rc::downgrade(self), phase))?;
        }

        self.tracking.borrow_mut().start(listeners);
        Ok(())
    }
}

fn mouse_handler(shared: Weak<Shared>, phase: Phase) -> Closure<dyn FnMut(MouseEvent)> {
    Closure::wrap(Box::new(move |event: MouseEvent| {
        let shared = match shared.upgrade() {
            Some(shared) => shared,
            None => return,
        };
        let result = shared.pointer(dom::pointer_from_mouse(&event, phase));
        if phase.cancels_default(result) {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

fn touch_handler(shared: Weak<Shared>, phase: Phase) -> Closure<dyn FnMut(TouchEvent)> {
    Closure::wrap(Box::new(move |event: TouchEvent| {
        let shared = match shared.upgrade() {
            Some(shared) => shared,
            None => return,
        };
        let input = match dom::pointer_from_touch(&event, phase) {
            Some(input) => input,
            None => return,
        };
        let result = shared.pointer(input);
        if phase.cancels_default(result) {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(TouchEvent)>)
}

/// Desktop controller for WASM - wraps Desktop with a JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    shared: Rc<Shared>,
    /// Document press and window resize listeners installed by `attach_to_document`
    page_listeners: RefCell<Vec<ScopedListeners>>,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller from an optional JSON config
    ///
    /// Without a config the viewport is read from the browser window.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DesktopController, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(|e| {
                log(&format!("[stadium-desktop] rejected config: {}", e));
                JsValue::from(e)
            })?,
            None => {
                let mut config = DesktopConfig::default();
                if let Some(size) = dom::viewport_size() {
                    config.viewport = size;
                }
                config
            }
        };

        let pending = Rc::new(RefCell::new(Vec::new()));
        let mut desktop = Desktop::new(config);
        let sink = Rc::clone(&pending);
        desktop
            .registry_mut()
            .subscribe(move |event| sink.borrow_mut().push(*event));

        Ok(Self {
            shared: Rc::new(Shared {
                desktop: RefCell::new(desktop),
                pending,
                callbacks: RefCell::new(Vec::new()),
                tracking: RefCell::new(DragTracking::default()),
            }),
            page_listeners: RefCell::new(Vec::new()),
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open the start-up windows
    #[wasm_bindgen]
    pub fn boot(&self) {
        let opened = self.shared.with_desktop(|desktop| {
            desktop.boot();
            desktop.registry().open_windows_by_stack().len()
        });
        log(&format!("[stadium-desktop] booted with {} open windows", opened));
    }

    /// Resize the viewport
    #[wasm_bindgen]
    pub fn resize(&self, width: f32, height: f32) {
        self.shared.with_desktop(|desktop| desktop.resize(width, height));
    }

    /// Install document press and click listeners and a window resize listener
    ///
    /// Presses and clicks are hit-tested against the window geometry, so the
    /// front-end does not need its own handlers on the window chrome. Window
    /// resizes re-fit the open windows.
    #[wasm_bindgen]
    pub fn attach_to_document(&self) -> Result<(), JsValue> {
        let document = dom::document()?;
        let browser_window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let weak = Rc::downgrade(&self.shared);
        self.detach_from_document();

        let click_shared = weak.clone();
        let click: Closure<dyn FnMut(MouseEvent)> = Closure::wrap(Box::new(move |event: MouseEvent| {
            if let Some(shared) = click_shared.upgrade() {
                let point = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                shared.with_desktop(|desktop| desktop.click(point));
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let resize_shared = weak.clone();
        let resize: Closure<dyn FnMut(Event)> = Closure::wrap(Box::new(move |_event: Event| {
            if let (Some(shared), Some(size)) = (resize_shared.upgrade(), dom::viewport_size()) {
                shared.with_desktop(|desktop| desktop.resize(size.width, size.height));
            }
        }) as Box<dyn FnMut(Event)>);

        let mut presses = ScopedListeners::new(document);
        presses.on_mouse("mousedown", mouse_handler(weak.clone(), Phase::Down))?;
        presses.on_mouse("click", click)?;
        presses.on_touch("touchstart", touch_handler(weak, Phase::Down))?;

        let mut resizes = ScopedListeners::new(browser_window);
        resizes.on_event("resize", resize)?;

        *self.page_listeners.borrow_mut() = vec![presses, resizes];
        Ok(())
    }

    /// Remove the listeners installed by `attach_to_document` and any drag tracking
    #[wasm_bindgen]
    pub fn detach_from_document(&self) {
        self.page_listeners.borrow_mut().clear();
        self.shared.tracking.borrow_mut().stop();
    }

    /// Register a callback receiving registry events that need a re-render
    ///
    /// Each payload carries the event fields and `window`, the descriptor as
    /// rendered after the event.
    #[wasm_bindgen]
    pub fn subscribe(&self, callback: js_sys::Function) {
        self.shared.callbacks.borrow_mut().push(callback);
    }

    // =========================================================================
    // Window commands
    // =========================================================================

    /// Open a window by name
    #[wasm_bindgen]
    pub fn open_window(&self, name: &str) -> Result<(), JsValue> {
        let id = parse_window(name)?;
        self.shared.with_desktop(|desktop| desktop.registry_mut().open_window(id));
        Ok(())
    }

    /// Open a window from its desktop icon
    #[wasm_bindgen]
    pub fn launch(&self, name: &str) -> Result<(), JsValue> {
        let id = parse_window(name)?;
        self.shared.with_desktop(|desktop| desktop.launch(id));
        log(&format!("[stadium-desktop] launched {}", id));
        Ok(())
    }

    /// Close a window by name
    #[wasm_bindgen]
    pub fn close_window(&self, name: &str) -> Result<(), JsValue> {
        let id = parse_window(name)?;
        let was_dragging = self.shared.with_desktop(|desktop| {
            let was_dragging = desktop.dragging() == Some(id);
            desktop.close(id);
            was_dragging
        });
        if was_dragging {
            self.shared.tracking.borrow_mut().stop();
        }
        log(&format!("[stadium-desktop] closed {}", id));
        Ok(())
    }

    /// Focus a window by name
    #[wasm_bindgen]
    pub fn focus_window(&self, name: &str) -> Result<(), JsValue> {
        let id = parse_window(name)?;
        self.shared.with_desktop(|desktop| desktop.registry_mut().focus_window(id));
        Ok(())
    }

    /// Overwrite a window's position
    #[wasm_bindgen]
    pub fn update_window_position(&self, name: &str, x: f32, y: f32) -> Result<(), JsValue> {
        let id = parse_window(name)?;
        self.shared
            .with_desktop(|desktop| desktop.registry_mut().update_window_position(id, Vec2::new(x, y)));
        Ok(())
    }

    /// Overwrite a window's size
    #[wasm_bindgen]
    pub fn update_window_size(&self, name: &str, width: f32, height: f32) -> Result<(), JsValue> {
        let id = parse_window(name)?;
        self.shared
            .with_desktop(|desktop| desktop.registry_mut().update_window_size(id, Size::new(width, height)));
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a press; returns true if it hit a window
    #[wasm_bindgen]
    pub fn pointer_down(&self, x: f32, y: f32) -> bool {
        self.shared.pointer(PointerInput::down(x, y)).is_handled()
    }

    /// Handle a pointer move
    #[wasm_bindgen]
    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        self.shared.pointer(PointerInput::moved(x, y)).is_handled()
    }

    /// Handle a release
    #[wasm_bindgen]
    pub fn pointer_up(&self, x: f32, y: f32) -> bool {
        self.shared.pointer(PointerInput::up(x, y)).is_handled()
    }

    /// Handle a click
    #[wasm_bindgen]
    pub fn click(&self, x: f32, y: f32) -> bool {
        self.shared
            .with_desktop(|desktop| desktop.click(Vec2::new(x, y)))
            .is_handled()
    }

    /// CSS cursor for the window chrome under a point
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        let desktop = self.shared.desktop.borrow();
        let region = if desktop.dragging().is_some() {
            Some(WindowRegion::TitleBar)
        } else {
            desktop.region_at(Vec2::new(x, y)).map(|(_, region)| region)
        };
        region.map_or("default", |region| region.cursor()).to_string()
    }

    /// Check if a window is being dragged
    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.shared.tracking.borrow().is_active()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All window descriptors as JSON, in catalog order
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let desktop = self.shared.desktop.borrow();
        let windows: Vec<_> = desktop.registry().windows().collect();
        to_json(&windows)
    }

    /// One window descriptor as JSON
    #[wasm_bindgen]
    pub fn get_window_json(&self, name: &str) -> Result<String, JsValue> {
        let id = parse_window(name)?;
        Ok(to_json(self.shared.desktop.borrow().registry().window(id)))
    }

    /// Visible surface bounds as JSON
    #[wasm_bindgen]
    pub fn get_viewport_json(&self) -> String {
        to_json(&self.shared.desktop.borrow().viewport().bounds())
    }

    /// Launcher icons as JSON
    #[wasm_bindgen]
    pub fn get_icons_json(&self) -> String {
        to_json(self.shared.desktop.borrow().icons())
    }

    /// Focused window name, if any
    #[wasm_bindgen]
    pub fn focused_window(&self) -> Option<String> {
        self.shared
            .desktop
            .borrow()
            .registry()
            .focused()
            .map(|id| id.as_str().to_string())
    }
}
