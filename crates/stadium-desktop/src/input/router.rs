//! Pointer capture tracking

use crate::window::WindowId;

/// Remembers which window holds pointer capture during a drag
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    captured: Option<WindowId>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { captured: None }
    }

    /// Window currently holding capture
    #[inline]
    pub fn captured(&self) -> Option<WindowId> {
        self.captured
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.captured.is_some()
    }

    /// Give capture to a window
    pub fn capture(&mut self, id: WindowId) {
        self.captured = Some(id);
    }

    /// Drop capture, returning the window that held it
    pub fn release(&mut self) -> Option<WindowId> {
        self.captured.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_release() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());

        router.capture(WindowId::Radio);
        assert!(router.is_dragging());
        assert_eq!(router.captured(), Some(WindowId::Radio));

        assert_eq!(router.release(), Some(WindowId::Radio));
        assert!(!router.is_dragging());
        assert_eq!(router.release(), None);
    }
}
