//! Desktop configuration

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;
use crate::window::WindowId;

/// Configuration for creating a desktop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Initial viewport size
    pub viewport: Size,
    /// Windows opened by `boot`, in order (the last one ends up on top)
    pub startup_windows: Vec<WindowId>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1280.0, 720.0),
            startup_windows: vec![WindowId::StadiumMap, WindowId::Radio],
        }
    }
}

impl DesktopConfig {
    /// Parse a JSON config document; missing fields take their defaults
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)
            .map_err(|e| DesktopError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config can drive a desktop
    pub fn validate(&self) -> DesktopResult<()> {
        if self.viewport.is_empty() {
            return Err(DesktopError::InvalidConfig(format!(
                "viewport must be positive, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        Ok(())
    }
}
