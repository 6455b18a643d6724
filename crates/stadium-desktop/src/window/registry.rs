//! Window registry: the single source of truth for window state

use std::fmt;
use crate::math::{Size, Vec2};
use super::{RegistryEvent, WindowDescriptor, WindowId};

/// Handle returned by [`WindowRegistry::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&RegistryEvent)>;

/// Registry owning one descriptor per window identifier
///
/// Every command applies its change, bumps the revision and then notifies
/// all subscribers. Descriptors are never removed; closing only flips the
/// open and focus flags.
pub struct WindowRegistry {
    /// Descriptors indexed by `WindowId::index`
    windows: [WindowDescriptor; WindowId::COUNT],
    /// Largest stack order handed out so far
    highest_stack_order: u32,
    /// Bumped on every command
    revision: u64,
    /// Change listeners
    listeners: Vec<(SubscriptionId, Listener)>,
    /// Next subscription handle
    next_subscription: u64,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WindowRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowRegistry")
            .field("windows", &self.windows)
            .field("highest_stack_order", &self.highest_stack_order)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl WindowRegistry {
    /// Create a registry with every window closed at its default geometry
    pub fn new() -> Self {
        Self {
            windows: WindowId::ALL.map(WindowDescriptor::default_for),
            highest_stack_order: 0,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get the descriptor for a window
    #[inline]
    pub fn window(&self, id: WindowId) -> &WindowDescriptor {
        &self.windows[id.index()]
    }

    /// All descriptors in catalog order
    pub fn windows(&self) -> impl Iterator<Item = &WindowDescriptor> {
        self.windows.iter()
    }

    /// Open windows sorted by stack order (back to front)
    pub fn open_windows_by_stack(&self) -> Vec<&WindowDescriptor> {
        let mut open: Vec<&WindowDescriptor> = self.windows.iter().filter(|w| w.is_open).collect();
        open.sort_by_key(|w| w.stack_order);
        open
    }

    /// Get the focused window, if any
    pub fn focused(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    /// Largest stack order handed out so far
    #[inline]
    pub fn highest_stack_order(&self) -> u32 {
        self.highest_stack_order
    }

    /// Number of commands applied since creation
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open a window and bring it to the front with focus
    ///
    /// Opening an already open window just raises it again.
    pub fn open_window(&mut self, id: WindowId) {
        self.set_exclusive_focus(id);
        let stack_order = self.next_stack_order();
        let window = self.window_mut(id);
        window.is_open = true;
        window.stack_order = stack_order;
        self.commit(RegistryEvent::Opened { id });
    }

    /// Close a window
    ///
    /// Stack order and geometry are kept so reopening restores them.
    pub fn close_window(&mut self, id: WindowId) {
        let window = self.window_mut(id);
        window.is_open = false;
        window.is_focused = false;
        self.commit(RegistryEvent::Closed { id });
    }

    /// Focus a window, raising it unless it is already top-most
    pub fn focus_window(&mut self, id: WindowId) {
        self.set_exclusive_focus(id);

        let raised = self.window(id).stack_order != self.highest_stack_order;
        if raised {
            let stack_order = self.next_stack_order();
            self.window_mut(id).stack_order = stack_order;
        }
        self.commit(RegistryEvent::Focused { id, raised });
    }

    /// Overwrite a window's position
    ///
    /// No bounds checking; containment is the shell's job.
    pub fn update_window_position(&mut self, id: WindowId, position: Vec2) {
        self.window_mut(id).position = position;
        self.commit(RegistryEvent::Moved { id });
    }

    /// Overwrite a window's size
    pub fn update_window_size(&mut self, id: WindowId, size: Size) {
        self.window_mut(id).size = size;
        self.commit(RegistryEvent::Resized { id });
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a listener called after every command
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&RegistryEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners
    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    #[inline]
    fn window_mut(&mut self, id: WindowId) -> &mut WindowDescriptor {
        &mut self.windows[id.index()]
    }

    fn next_stack_order(&mut self) -> u32 {
        self.highest_stack_order += 1;
        self.highest_stack_order
    }

    fn set_exclusive_focus(&mut self, id: WindowId) {
        for window in self.windows.iter_mut() {
            window.is_focused = window.id == id;
        }
    }

    fn commit(&mut self, event: RegistryEvent) {
        self.revision += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
