//! Window descriptor and default layout

use serde::Serialize;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::{WindowId, WindowRegion};

/// The registry's record of one window
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDescriptor {
    /// Window identifier
    pub id: WindowId,
    /// Title bar label
    pub title: &'static str,
    /// Whether the window is rendered
    pub is_open: bool,
    /// Whether the window is the active one for input
    pub is_focused: bool,
    /// Paint order among open windows (higher = on top)
    pub stack_order: u32,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    /// Window size including chrome
    pub size: Size,
}

impl WindowDescriptor {
    /// Closed, unfocused descriptor with the window's default geometry
    pub fn default_for(id: WindowId) -> Self {
        let (title, position, size) = match id {
            WindowId::Scoreboard => ("Scoreboard.exe", Vec2::new(100.0, 100.0), Size::new(500.0, 400.0)),
            WindowId::BaseballCard => ("BaseballCard.exe", Vec2::new(650.0, 150.0), Size::new(400.0, 500.0)),
            WindowId::Radio => ("Scully Radio.exe", Vec2::new(1150.0, 300.0), Size::new(350.0, 220.0)),
            WindowId::Guestbook => ("Stadium Guestbook.exe", Vec2::new(550.0, 80.0), Size::new(450.0, 300.0)),
            WindowId::Jumbotron => ("Jumbotron.exe", Vec2::new(900.0, 200.0), Size::new(500.0, 500.0)),
            WindowId::StadiumMap => ("StadiumMap.exe", Vec2::new(50.0, 50.0), Size::new(622.0, 600.0)),
        };

        Self {
            id,
            title,
            is_open: false,
            is_focused: false,
            stack_order: 0,
            position,
            size,
        }
    }

    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the content area rectangle (excludes title bar)
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y + FRAME_STYLE.title_bar_height,
            self.size.width,
            (self.size.height - FRAME_STYLE.title_bar_height).max(0.0),
        )
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size;
        let y = self.position.y
            + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Find which part of the chrome is under a point
    ///
    /// Returns `None` when the point is outside the window. Geometry only;
    /// open/closed state is the caller's concern.
    pub fn hit_test(&self, point: Vec2) -> Option<WindowRegion> {
        if self.close_button_rect().contains(point) {
            return Some(WindowRegion::CloseButton);
        }
        if self.title_bar_rect().contains(point) {
            return Some(WindowRegion::TitleBar);
        }
        if self.content_rect().contains(point) {
            return Some(WindowRegion::Content);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_closed() {
        for id in WindowId::ALL {
            let d = WindowDescriptor::default_for(id);
            assert_eq!(d.id, id);
            assert!(!d.is_open);
            assert!(!d.is_focused);
            assert_eq!(d.stack_order, 0);
            assert!(!d.size.is_empty());
        }
    }

    #[test]
    fn test_radio_defaults() {
        let d = WindowDescriptor::default_for(WindowId::Radio);
        assert_eq!(d.title, "Scully Radio.exe");
        assert!((d.position.x - 1150.0).abs() < 0.001);
        assert!((d.position.y - 300.0).abs() < 0.001);
        assert!((d.size.width - 350.0).abs() < 0.001);
        assert!((d.size.height - 220.0).abs() < 0.001);
    }

    #[test]
    fn test_chrome_rects() {
        let d = WindowDescriptor::default_for(WindowId::Scoreboard);

        let title = d.title_bar_rect();
        assert!((title.y - 100.0).abs() < 0.001);
        assert!((title.height - FRAME_STYLE.title_bar_height).abs() < 0.001);

        let content = d.content_rect();
        assert!((content.y - 128.0).abs() < 0.001);
        assert!((content.height - 372.0).abs() < 0.001);

        let close = d.close_button_rect();
        assert!((close.right() - 596.0).abs() < 0.001);
        assert!((close.y - 104.0).abs() < 0.001);
    }

    #[test]
    fn test_hit_test() {
        let d = WindowDescriptor::default_for(WindowId::Scoreboard);

        assert_eq!(d.hit_test(Vec2::new(200.0, 110.0)), Some(WindowRegion::TitleBar));
        assert_eq!(d.hit_test(Vec2::new(585.0, 110.0)), Some(WindowRegion::CloseButton));
        assert_eq!(d.hit_test(Vec2::new(300.0, 300.0)), Some(WindowRegion::Content));
        assert_eq!(d.hit_test(Vec2::new(50.0, 50.0)), None);
        assert_eq!(d.hit_test(Vec2::new(300.0, 500.0)), None);
        assert_eq!(d.hit_test(Vec2::new(599.0, 499.0)), Some(WindowRegion::Content));
    }

    #[test]
    fn test_json_field_names() {
        let d = WindowDescriptor::default_for(WindowId::BaseballCard);
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["id"], "baseballCard");
        assert_eq!(value["isOpen"], false);
        assert_eq!(value["isFocused"], false);
        assert_eq!(value["stackOrder"], 0);
        assert_eq!(value["position"]["x"], 650.0);
        assert_eq!(value["size"]["height"], 500.0);
    }
}
