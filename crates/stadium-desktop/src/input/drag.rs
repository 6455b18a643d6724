//! Drag state for a window shell

use crate::math::Vec2;

/// An in-progress title-bar drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Offset from window origin to the pointer at press time
    pub offset: Vec2,
}

impl DragState {
    /// Start a drag from a press at `pointer` on a window at `origin`
    #[inline]
    pub fn start(pointer: Vec2, origin: Vec2) -> Self {
        Self { offset: pointer - origin }
    }

    /// Unclamped window origin for the current pointer position
    #[inline]
    pub fn candidate(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}
