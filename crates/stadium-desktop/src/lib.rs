//! Window management for the Stadium retro desktop
//!
//! This crate provides the state behind the site's draggable windows:
//! - A registry of every window (open/closed, focus, stack order, geometry)
//! - One shell per window turning pointer input into registry commands
//! - A desktop root that routes input, launches windows from icons and
//!   keeps windows inside the viewport
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and frame metrics
//! - [`window`]: Window identifiers, descriptors and the registry
//! - [`input`]: Pointer input, drag state and capture routing
//! - [`shell`]: Per-window interaction
//! - [`desktop`]: Application root and launcher icons
//!
//! ## Example
//!
//! ```rust
//! use stadium_desktop::{Desktop, DesktopConfig, PointerInput, WindowId};
//!
//! let mut desktop = Desktop::new(DesktopConfig::default());
//! desktop.boot();
//! desktop.launch(WindowId::Guestbook);
//!
//! desktop.handle_pointer(PointerInput::down(600.0, 90.0));
//! desktop.handle_pointer(PointerInput::moved(700.0, 140.0));
//! desktop.handle_pointer(PointerInput::up(700.0, 140.0));
//!
//! assert_eq!(desktop.registry().focused(), Some(WindowId::Guestbook));
//! ```

pub mod math;
pub mod window;
pub mod input;
pub mod shell;
pub mod desktop;

mod config;
mod error;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2, FRAME_STYLE, FrameStyle};
pub use window::{RegistryEvent, SubscriptionId, WindowDescriptor, WindowId, WindowRegion, WindowRegistry};
pub use input::{DragState, InputResult, InputRouter, PointerInput};
pub use shell::WindowShell;
pub use desktop::{Desktop, DesktopIcon, DESKTOP_ICONS};

pub use config::DesktopConfig;
pub use error::{DesktopError, DesktopResult};
pub use viewport::Viewport;
