//! Desktop root owning the registry and the shells

use crate::config::DesktopConfig;
use crate::input::{InputResult, InputRouter, PointerInput};
use crate::math::Vec2;
use crate::viewport::Viewport;
use crate::window::{WindowId, WindowRegion, WindowRegistry};
use crate::shell::WindowShell;
use super::{DesktopIcon, DESKTOP_ICONS};

/// Desktop coordinating the registry, the viewport and the window shells
///
/// This is the state container handed to whatever drives the UI. It is an
/// ordinary value: tests create as many as they like, and the browser
/// binding keeps one behind `Rc<RefCell<_>>`.
#[derive(Debug)]
pub struct Desktop {
    /// Window state
    registry: WindowRegistry,
    /// One shell per window, indexed like `WindowId::ALL`
    shells: [WindowShell; WindowId::COUNT],
    /// Visible surface
    viewport: Viewport,
    /// Pointer capture during drags
    input: InputRouter,
    /// Windows opened by `boot`
    startup_windows: Vec<WindowId>,
    /// Whether `boot` already ran
    booted: bool,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl Desktop {
    /// Create a desktop with every window closed
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            registry: WindowRegistry::new(),
            shells: WindowId::ALL.map(WindowShell::new),
            viewport: Viewport::new(config.viewport.width, config.viewport.height),
            input: InputRouter::new(),
            startup_windows: config.startup_windows,
            booted: false,
        }
    }

    /// Open the start-up windows
    ///
    /// Only the first call has an effect, so a host that mounts twice does
    /// not re-raise the windows.
    pub fn boot(&mut self) {
        if self.booted {
            return;
        }
        self.booted = true;

        let startup = std::mem::take(&mut self.startup_windows);
        for &id in &startup {
            self.launch(id);
        }
        self.startup_windows = startup;
    }

    /// Check if `boot` has run
    #[inline]
    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Open a window from a desktop icon and keep it on screen
    pub fn launch(&mut self, id: WindowId) {
        self.registry.open_window(id);
        self.shells[id.index()].fit_to_viewport(&mut self.registry, &self.viewport);
    }

    /// Close a window through its close control
    pub fn close(&mut self, id: WindowId) {
        if self.input.captured() == Some(id) {
            self.input.release();
        }
        self.shells[id.index()].close(&mut self.registry);
    }

    /// Resize the viewport and pull open windows back inside it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.set_size(width, height);
        for shell in self.shells.iter() {
            shell.fit_to_viewport(&mut self.registry, &self.viewport);
        }
    }

    /// Route pointer input
    ///
    /// A press goes to the top-most open window under the pointer. If that
    /// window starts a drag it holds capture and receives every move up to
    /// and including the release.
    pub fn handle_pointer(&mut self, input: PointerInput) -> InputResult {
        match input {
            PointerInput::Down { position } => {
                if let Some(stale) = self.input.release() {
                    self.shells[stale.index()].cancel_drag();
                }

                let id = match self.window_at(position) {
                    Some(id) => id,
                    None => return InputResult::Unhandled,
                };
                let result = self.shells[id.index()].handle_pointer(&mut self.registry, &self.viewport, input);
                if result == InputResult::Capture {
                    self.input.capture(id);
                }
                result
            }
            PointerInput::Move { .. } => {
                let id = match self.input.captured() {
                    Some(id) => id,
                    None => return InputResult::Unhandled,
                };
                if !self.registry.window(id).is_open {
                    self.input.release();
                    self.shells[id.index()].cancel_drag();
                    return InputResult::Release;
                }
                self.shells[id.index()].handle_pointer(&mut self.registry, &self.viewport, input)
            }
            PointerInput::Up { .. } => match self.input.release() {
                Some(id) => self.shells[id.index()].handle_pointer(&mut self.registry, &self.viewport, input),
                None => InputResult::Unhandled,
            },
        }
    }

    /// Route a click to the top-most open window under the point
    pub fn click(&mut self, point: Vec2) -> InputResult {
        match self.window_at(point) {
            Some(id) => {
                let result = self.shells[id.index()].click(&mut self.registry, point);
                if !self.registry.window(id).is_open && self.input.captured() == Some(id) {
                    self.input.release();
                }
                result
            }
            None => InputResult::Unhandled,
        }
    }

    /// Top-most open window containing a point
    pub fn window_at(&self, point: Vec2) -> Option<WindowId> {
        self.registry
            .open_windows_by_stack()
            .into_iter()
            .rev()
            .find(|w| w.rect().contains(point))
            .map(|w| w.id)
    }

    /// Top-most open window under a point and the part of its chrome hit
    pub fn region_at(&self, point: Vec2) -> Option<(WindowId, WindowRegion)> {
        let id = self.window_at(point)?;
        self.registry.window(id).hit_test(point).map(|region| (id, region))
    }

    /// Let a window's shell pick up registry changes
    ///
    /// Returns true if the window must re-render.
    pub fn refresh_shell(&mut self, id: WindowId) -> bool {
        self.shells[id.index()].refresh(&self.registry)
    }

    /// Window currently being dragged
    #[inline]
    pub fn dragging(&self) -> Option<WindowId> {
        self.input.captured()
    }

    /// Launcher icons
    #[inline]
    pub fn icons(&self) -> &'static [DesktopIcon] {
        &DESKTOP_ICONS
    }

    /// Window state
    #[inline]
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Window state, for issuing commands directly
    #[inline]
    pub fn registry_mut(&mut self) -> &mut WindowRegistry {
        &mut self.registry
    }

    /// Shell bound to a window
    #[inline]
    pub fn shell(&self, id: WindowId) -> &WindowShell {
        &self.shells[id.index()]
    }

    /// Mutable shell bound to a window
    #[inline]
    pub fn shell_mut(&mut self, id: WindowId) -> &mut WindowShell {
        &mut self.shells[id.index()]
    }

    /// Current viewport
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
