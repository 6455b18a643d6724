//! Frame style constants

/// Frame metrics for the window chrome
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub button_size: f32,
    pub button_margin: f32,
}

/// Metrics of the Win95-style chrome rendered by the front-end
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    button_size: 20.0,
    button_margin: 4.0,
};
