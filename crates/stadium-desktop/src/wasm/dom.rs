//! DOM event translation and scoped event listeners

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, MouseEvent, TouchEvent};

use crate::input::{InputResult, PointerInput};
use crate::math::Size;

/// Phase of a DOM pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Down,
    Move,
    Up,
}

impl Phase {
    fn input(self, x: f32, y: f32) -> PointerInput {
        match self {
            Phase::Down => PointerInput::down(x, y),
            Phase::Move => PointerInput::moved(x, y),
            Phase::Up => PointerInput::up(x, y),
        }
    }

    /// Whether the browser's default action must be cancelled
    ///
    /// Only a press that starts a drag and the moves of that drag are
    /// claimed, so presses and clicks inside window content keep their
    /// default behaviour.
    pub(crate) fn cancels_default(self, result: InputResult) -> bool {
        match self {
            Phase::Down => result == InputResult::Capture,
            Phase::Move => result == InputResult::Handled,
            Phase::Up => false,
        }
    }
}

/// Document mouse events followed while a drag is active
pub(crate) const DRAG_MOUSE_EVENTS: [(&str, Phase); 2] = [("mousemove", Phase::Move), ("mouseup", Phase::Up)];

/// Document touch events followed while a drag is active
///
/// A cancelled touch ends the drag like a lifted finger.
pub(crate) const DRAG_TOUCH_EVENTS: [(&str, Phase); 3] = [
    ("touchmove", Phase::Move),
    ("touchend", Phase::Up),
    ("touchcancel", Phase::Up),
];

/// Translate a mouse event into pointer input
pub(crate) fn pointer_from_mouse(event: &MouseEvent, phase: Phase) -> PointerInput {
    phase.input(event.client_x() as f32, event.client_y() as f32)
}

/// Translate a touch event into pointer input using the first touch
///
/// `touchend` and `touchcancel` carry no active touches, so the lifted
/// finger is read from `changedTouches`.
pub(crate) fn pointer_from_touch(event: &TouchEvent, phase: Phase) -> Option<PointerInput> {
    let touch = match phase {
        Phase::Up => event.changed_touches().get(0),
        Phase::Down | Phase::Move => event.touches().get(0),
    }?;
    Some(phase.input(touch.client_x() as f32, touch.client_y() as f32))
}

/// Get the page's document
pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Current size of the browser window's layout viewport
pub(crate) fn viewport_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width as f32, height as f32))
}

/// Listeners on one event target, removed together
///
/// Each listener is recorded once it is installed and removed by
/// [`detach`] or on drop, whichever comes first. Touch listeners are
/// registered as non-passive so they can cancel scrolling.
///
/// [`detach`]: ScopedListeners::detach
pub(crate) struct ScopedListeners {
    target: EventTarget,
    mouse: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
    touch: Vec<(&'static str, Closure<dyn FnMut(TouchEvent)>)>,
    plain: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    attached: bool,
}

impl ScopedListeners {
    /// Start an empty set on `target`
    pub(crate) fn new(target: impl Into<EventTarget>) -> Self {
        Self {
            target: target.into(),
            mouse: Vec::new(),
            touch: Vec::new(),
            plain: Vec::new(),
            attached: true,
        }
    }

    /// Install a mouse listener
    pub(crate) fn on_mouse(
        &mut self,
        event: &'static str,
        closure: Closure<dyn FnMut(MouseEvent)>,
    ) -> Result<(), JsValue> {
        self.target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.mouse.push((event, closure));
        Ok(())
    }

    /// Install a non-passive touch listener
    pub(crate) fn on_touch(
        &mut self,
        event: &'static str,
        closure: Closure<dyn FnMut(TouchEvent)>,
    ) -> Result<(), JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.touch.push((event, closure));
        Ok(())
    }

    /// Install a listener taking the plain event
    pub(crate) fn on_event(
        &mut self,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<(), JsValue> {
        self.target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.plain.push((event, closure));
        Ok(())
    }

    /// Remove every listener from the target
    ///
    /// The closures stay alive until `self` is dropped, so this is safe to
    /// call from inside one of them.
    pub(crate) fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;

        for (event, closure) in &self.mouse {
            self.remove(event, closure.as_ref().unchecked_ref());
        }
        for (event, closure) in &self.touch {
            self.remove(event, closure.as_ref().unchecked_ref());
        }
        for (event, closure) in &self.plain {
            self.remove(event, closure.as_ref().unchecked_ref());
        }
    }

    fn remove(&self, event: &str, callback: &js_sys::Function) {
        let _ = self.target.remove_event_listener_with_callback(event, callback);
    }
}

impl Drop for ScopedListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Drag tracking listeners for the current drag
///
/// Released listeners are parked in `retired` instead of dropped because
/// the release handler that ends a drag is itself one of them.
#[derive(Default)]
pub(crate) struct DragTracking {
    active: Option<ScopedListeners>,
    retired: Option<ScopedListeners>,
}

impl DragTracking {
    /// Check if drag listeners are attached
    pub(crate) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Install listeners for a new drag
    pub(crate) fn start(&mut self, listeners: ScopedListeners) {
        self.stop();
        self.retired = None;
        self.active = Some(listeners);
    }

    /// Detach the current drag's listeners
    pub(crate) fn stop(&mut self) {
        if let Some(mut listeners) = self.active.take() {
            listeners.detach();
            self.retired = Some(listeners);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_drags_cancel_default() {
        assert!(Phase::Down.cancels_default(InputResult::Capture));
        assert!(!Phase::Down.cancels_default(InputResult::Handled));
        assert!(!Phase::Down.cancels_default(InputResult::Unhandled));

        assert!(Phase::Move.cancels_default(InputResult::Handled));
        assert!(!Phase::Move.cancels_default(InputResult::Unhandled));
        assert!(!Phase::Move.cancels_default(InputResult::Release));

        assert!(!Phase::Up.cancels_default(InputResult::Release));
    }

    #[test]
    fn test_drag_events_end_on_lift_or_cancel() {
        let ends: Vec<&str> = DRAG_TOUCH_EVENTS
            .iter()
            .filter(|(_, phase)| *phase == Phase::Up)
            .map(|(event, _)| *event)
            .collect();
        assert_eq!(ends, vec!["touchend", "touchcancel"]);

        assert!(DRAG_MOUSE_EVENTS.contains(&("mouseup", Phase::Up)));
        assert!(DRAG_MOUSE_EVENTS.contains(&("mousemove", Phase::Move)));
    }
}
