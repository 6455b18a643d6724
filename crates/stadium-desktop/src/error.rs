//! Error types for the desktop
//!
//! Registry and shell commands are total over the closed window set, so the
//! only failures are at the boundary: names coming from JavaScript, config
//! documents and JSON encoding.

/// Errors that can occur at the desktop's outer boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// A window name did not match any known window
    UnknownWindow(String),

    /// A configuration document could not be used
    InvalidConfig(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWindow(name) => write!(f, "unknown window: {}", name),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::UnknownWindow("minesweeper".to_string());
        assert_eq!(err.to_string(), "unknown window: minesweeper");

        let err = DesktopError::InvalidConfig("viewport width must be positive".to_string());
        assert_eq!(err.to_string(), "invalid config: viewport width must be positive");

        let err = DesktopError::SerializationError("EOF while parsing".to_string());
        assert_eq!(err.to_string(), "serialization error: EOF while parsing");
    }

    #[test]
    fn test_error_equality() {
        let err1 = DesktopError::UnknownWindow("a".to_string());
        let err2 = DesktopError::UnknownWindow("a".to_string());
        let err3 = DesktopError::UnknownWindow("b".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
