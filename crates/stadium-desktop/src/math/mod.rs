//! Core geometry types for the desktop
//!
//! Positions and sizes are in viewport pixels with the origin at the
//! top-left corner of the desktop surface.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
