//! Interactive window shell

use crate::input::{DragState, InputResult, PointerInput};
use crate::math::Vec2;
use crate::viewport::Viewport;
use crate::window::{WindowDescriptor, WindowId, WindowRegion, WindowRegistry};

/// Interactive wrapper around one window's descriptor
#[derive(Clone, Debug)]
pub struct WindowShell {
    /// Window this shell renders
    id: WindowId,
    /// Active title-bar drag
    drag: Option<DragState>,
    /// Descriptor as of the last render
    rendered: Option<WindowDescriptor>,
}

impl WindowShell {
    /// Create a shell bound to a window
    pub fn new(id: WindowId) -> Self {
        Self {
            id,
            drag: None,
            rendered: None,
        }
    }

    /// Window this shell is bound to
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Whether the window should be rendered at all
    #[inline]
    pub fn is_visible(&self, registry: &WindowRegistry) -> bool {
        registry.window(self.id).is_open
    }

    /// Check if a title-bar drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pick up registry changes, returning true if the window must re-render
    pub fn refresh(&mut self, registry: &WindowRegistry) -> bool {
        let current = registry.window(self.id);
        if self.rendered.as_ref() == Some(current) {
            return false;
        }
        self.rendered = Some(current.clone());
        true
    }

    /// Descriptor as of the last [`refresh`](Self::refresh)
    #[inline]
    pub fn rendered(&self) -> Option<&WindowDescriptor> {
        self.rendered.as_ref()
    }

    /// Handle press, move and release
    ///
    /// A press on the title bar focuses the window and starts a drag; moves
    /// while dragging reposition the window inside `viewport`; the release
    /// ends the drag without issuing commands.
    pub fn handle_pointer(
        &mut self,
        registry: &mut WindowRegistry,
        viewport: &Viewport,
        input: PointerInput,
    ) -> InputResult {
        match input {
            PointerInput::Down { position } => {
                let window = registry.window(self.id);
                if !window.is_open {
                    return InputResult::Unhandled;
                }
                match window.hit_test(position) {
                    Some(WindowRegion::TitleBar) => {
                        self.drag = Some(DragState::start(position, window.position));
                        registry.focus_window(self.id);
                        InputResult::Capture
                    }
                    Some(_) => InputResult::Handled,
                    None => InputResult::Unhandled,
                }
            }
            PointerInput::Move { position } => {
                let drag = match self.drag {
                    Some(drag) => drag,
                    None => return InputResult::Unhandled,
                };
                let size = registry.window(self.id).size;
                let clamped = viewport.clamp_window(drag.candidate(position), size);
                registry.update_window_position(self.id, clamped);
                InputResult::Handled
            }
            PointerInput::Up { .. } => match self.drag.take() {
                Some(_) => InputResult::Release,
                None => InputResult::Unhandled,
            },
        }
    }

    /// Handle a click inside the window
    ///
    /// The close control closes the window; anywhere else brings an
    /// unfocused window to the front.
    pub fn click(&mut self, registry: &mut WindowRegistry, point: Vec2) -> InputResult {
        let window = registry.window(self.id);
        if !window.is_open {
            return InputResult::Unhandled;
        }
        match window.hit_test(point) {
            Some(WindowRegion::CloseButton) => {
                self.close(registry);
                InputResult::Handled
            }
            Some(_) => {
                if !window.is_focused {
                    registry.focus_window(self.id);
                }
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Close-control activation
    pub fn close(&mut self, registry: &mut WindowRegistry) {
        self.drag = None;
        registry.close_window(self.id);
    }

    /// Abandon a drag without a release event (e.g. the host unmounted)
    #[inline]
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Pull the window back inside the viewport
    ///
    /// Issues a position update only when clamping moved the window. Closed
    /// windows are left alone. Returns true if the window moved.
    pub fn fit_to_viewport(&self, registry: &mut WindowRegistry, viewport: &Viewport) -> bool {
        let window = registry.window(self.id);
        if !window.is_open {
            return false;
        }
        let clamped = viewport.clamp_window(window.position, window.size);
        if clamped == window.position {
            return false;
        }
        registry.update_window_position(self.id, clamped);
        true
    }
}
