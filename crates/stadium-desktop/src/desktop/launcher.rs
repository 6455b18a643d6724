//! Desktop launcher icons

use serde::Serialize;
use crate::window::WindowId;

/// Desktop icon that opens a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DesktopIcon {
    /// Window opened by the icon
    pub id: WindowId,
    /// Label under the icon
    pub label: &'static str,
    /// Image path served by the front-end
    pub icon: &'static str,
}

/// Icons shown on the desktop, top to bottom
pub const DESKTOP_ICONS: [DesktopIcon; WindowId::COUNT] = [
    DesktopIcon { id: WindowId::Scoreboard, label: "Scoreboard", icon: "/images/scoreboard_icon.png" },
    DesktopIcon { id: WindowId::BaseballCard, label: "Baseball Card", icon: "/images/baseball_card_icon.png" },
    DesktopIcon { id: WindowId::Radio, label: "Scully Radio", icon: "/images/baseball_radio_icon.png" },
    DesktopIcon { id: WindowId::Guestbook, label: "Guestbook", icon: "/images/guestbook_icon.png" },
    DesktopIcon { id: WindowId::Jumbotron, label: "Jumbotron", icon: "/images/jumbotron_icon.png" },
    DesktopIcon { id: WindowId::StadiumMap, label: "Stadium Map", icon: "/images/stadium_map_icon.png" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_icon_per_window() {
        for (icon, id) in DESKTOP_ICONS.iter().zip(WindowId::ALL) {
            assert_eq!(icon.id, id);
            assert!(icon.icon.starts_with("/images/"));
        }
    }
}
