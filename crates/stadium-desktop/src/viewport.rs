//! Viewport bounds and window containment

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};

/// Visible desktop surface in viewport pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Surface size in pixels
    pub screen_size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1280.0, 720.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given surface size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen_size: Size::new(width, height),
        }
    }

    /// Update the surface size
    #[inline]
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }

    /// Bounds of the visible surface
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.screen_size)
    }

    /// Clamp a window's top-left corner so its bounding box stays inside the viewport
    ///
    /// Each axis is clamped to `[0, viewport - window]` independently. A window
    /// larger than the viewport on an axis is pinned to 0 on that axis.
    pub fn clamp_window(&self, position: Vec2, size: Size) -> Vec2 {
        Vec2::new(
            clamp_axis(position.x, self.screen_size.width - size.width),
            clamp_axis(position.y, self.screen_size.height - size.height),
        )
    }
}

#[inline]
fn clamp_axis(value: f32, max: f32) -> f32 {
    value.min(max).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_is_identity() {
        let viewport = Viewport::new(1280.0, 720.0);
        let pos = viewport.clamp_window(Vec2::new(100.0, 100.0), Size::new(500.0, 400.0));
        assert!((pos.x - 100.0).abs() < 0.001);
        assert!((pos.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_past_bottom_right() {
        let viewport = Viewport::new(1280.0, 720.0);
        let pos = viewport.clamp_window(Vec2::new(1200.0, 600.0), Size::new(350.0, 220.0));
        assert!((pos.x - 930.0).abs() < 0.001);
        assert!((pos.y - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_negative_to_origin() {
        let viewport = Viewport::new(1280.0, 720.0);
        let pos = viewport.clamp_window(Vec2::new(-40.0, -5.0), Size::new(350.0, 220.0));
        assert!(pos.x.abs() < 0.001);
        assert!(pos.y.abs() < 0.001);
    }

    #[test]
    fn test_clamp_window_larger_than_viewport() {
        let viewport = Viewport::new(400.0, 300.0);
        let pos = viewport.clamp_window(Vec2::new(50.0, 20.0), Size::new(622.0, 600.0));
        assert!(pos.x.abs() < 0.001);
        assert!(pos.y.abs() < 0.001);
    }

    #[test]
    fn test_bounds() {
        let viewport = Viewport::default();
        let bounds = viewport.bounds();
        assert!((bounds.width - 1280.0).abs() < 0.001);
        assert!((bounds.height - 720.0).abs() < 0.001);
    }
}
