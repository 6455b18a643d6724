//! Window region for hit testing

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area
    Content,
    /// Close button
    CloseButton,
}

impl WindowRegion {
    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton => "pointer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor() {
        assert_eq!(WindowRegion::TitleBar.cursor(), "move");
        assert_eq!(WindowRegion::CloseButton.cursor(), "pointer");
        assert_eq!(WindowRegion::Content.cursor(), "default");
    }
}
