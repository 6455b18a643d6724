//! Window shell module
//!
//! One shell per window identifier. A shell reads its descriptor from the
//! registry and turns pointer input into registry commands, keeping the
//! window inside the viewport.

#[allow(clippy::module_inception)]
mod shell;

pub use shell::WindowShell;
