//! Abstract pointer input

use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Press, move or release at a viewport position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum PointerInput {
    /// Button pressed or finger down
    Down { position: Vec2 },
    /// Pointer moved
    Move { position: Vec2 },
    /// Button released or finger lifted
    Up { position: Vec2 },
}

impl PointerInput {
    /// Create a press
    #[inline]
    pub fn down(x: f32, y: f32) -> Self {
        PointerInput::Down { position: Vec2::new(x, y) }
    }

    /// Create a move
    #[inline]
    pub fn moved(x: f32, y: f32) -> Self {
        PointerInput::Move { position: Vec2::new(x, y) }
    }

    /// Create a release
    #[inline]
    pub fn up(x: f32, y: f32) -> Self {
        PointerInput::Up { position: Vec2::new(x, y) }
    }

    /// Viewport position of the input
    #[inline]
    pub fn position(&self) -> Vec2 {
        match *self {
            PointerInput::Down { position }
            | PointerInput::Move { position }
            | PointerInput::Up { position } => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        assert_eq!(PointerInput::down(1.0, 2.0).position(), Vec2::new(1.0, 2.0));
        assert_eq!(PointerInput::moved(3.0, 4.0).position(), Vec2::new(3.0, 4.0));
        assert_eq!(PointerInput::up(5.0, 6.0).position(), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_json_shape() {
        let input: PointerInput =
            serde_json::from_str(r#"{"phase":"move","position":{"x":10.0,"y":20.0}}"#).unwrap();
        assert_eq!(input, PointerInput::moved(10.0, 20.0));
    }
}
