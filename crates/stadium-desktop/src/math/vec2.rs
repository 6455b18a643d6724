//! 2D vector type for positions and offsets

use serde::{Deserialize, Serialize};

/// 2D vector for positions and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_add_sub() {
        let pointer = Vec2::new(1160.0, 310.0);
        let origin = Vec2::new(1150.0, 300.0);

        let offset = pointer - origin;
        assert!((offset.x - 10.0).abs() < 0.001);
        assert!((offset.y - 10.0).abs() < 0.001);

        let back = origin + offset;
        assert_eq!(back, pointer);
    }

    #[test]
    fn test_vec2_json_shape() {
        let json = serde_json::to_string(&Vec2::new(930.0, 500.0)).unwrap();
        assert_eq!(json, r#"{"x":930.0,"y":500.0}"#);
    }
}
