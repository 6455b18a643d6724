//! Window identifiers

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::DesktopError;

/// Identifier of one of the desktop's windows
///
/// The set is fixed at compile time. Adding a window means adding a variant
/// here and a default descriptor in [`WindowDescriptor::default_for`].
///
/// [`WindowDescriptor::default_for`]: super::WindowDescriptor::default_for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowId {
    Scoreboard,
    BaseballCard,
    Radio,
    Guestbook,
    Jumbotron,
    StadiumMap,
}

impl WindowId {
    /// Every window, in catalog order
    pub const ALL: [WindowId; 6] = [
        WindowId::Scoreboard,
        WindowId::BaseballCard,
        WindowId::Radio,
        WindowId::Guestbook,
        WindowId::Jumbotron,
        WindowId::StadiumMap,
    ];

    /// Number of windows
    pub const COUNT: usize = Self::ALL.len();

    /// Stable name used at the JavaScript boundary
    pub fn as_str(self) -> &'static str {
        match self {
            WindowId::Scoreboard => "scoreboard",
            WindowId::BaseballCard => "baseballCard",
            WindowId::Radio => "radio",
            WindowId::Guestbook => "guestbook",
            WindowId::Jumbotron => "jumbotron",
            WindowId::StadiumMap => "stadiumMap",
        }
    }

    /// Slot of this window in [`WindowId::ALL`]
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowId {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DesktopError::UnknownWindow(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_catalog_order() {
        for (i, id) in WindowId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("radio".parse::<WindowId>(), Ok(WindowId::Radio));
        assert_eq!("stadiumMap".parse::<WindowId>(), Ok(WindowId::StadiumMap));
        assert_eq!("baseballCard".parse::<WindowId>(), Ok(WindowId::BaseballCard));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "StadiumMap".parse::<WindowId>(),
            Err(DesktopError::UnknownWindow("StadiumMap".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_boundary_names() {
        for id in WindowId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            let back: WindowId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }
}
