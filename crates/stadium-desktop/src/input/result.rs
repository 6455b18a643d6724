//! Input result type

use serde::Serialize;

/// Result of input handling
///
/// `Capture` and `Release` tell the host when to attach and detach the
/// move/release tracking it needs for a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A drag started; route moves and the release here
    Capture,
    /// The drag ended; stop routing moves here
    Release,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }
}
