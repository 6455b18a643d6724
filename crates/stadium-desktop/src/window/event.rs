//! Registry change notifications

use serde::Serialize;
use super::WindowId;

/// Change applied by a registry command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RegistryEvent {
    /// Window was opened and raised
    Opened { id: WindowId },
    /// Window was closed
    Closed { id: WindowId },
    /// Window took focus; `raised` is false when it was already top-most
    Focused { id: WindowId, raised: bool },
    /// Window position was overwritten
    Moved { id: WindowId },
    /// Window size was overwritten
    Resized { id: WindowId },
}

impl RegistryEvent {
    /// Window the command targeted
    pub fn window_id(&self) -> WindowId {
        match *self {
            RegistryEvent::Opened { id }
            | RegistryEvent::Closed { id }
            | RegistryEvent::Focused { id, .. }
            | RegistryEvent::Moved { id }
            | RegistryEvent::Resized { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_id() {
        let event = RegistryEvent::Focused { id: WindowId::Jumbotron, raised: true };
        assert_eq!(event.window_id(), WindowId::Jumbotron);
    }

    #[test]
    fn test_json_shape() {
        let event = RegistryEvent::Focused { id: WindowId::StadiumMap, raised: false };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"focused","id":"stadiumMap","raised":false}"#);
    }
}
