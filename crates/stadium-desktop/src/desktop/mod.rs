//! Desktop module
//!
//! The application root: owns the registry, the viewport and one shell
//! per window, and routes pointer input to the right shell.

#[allow(clippy::module_inception)]
mod desktop;
mod launcher;

pub use desktop::Desktop;
pub use launcher::{DesktopIcon, DESKTOP_ICONS};
