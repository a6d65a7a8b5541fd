//! Drawing surface abstraction
//!
//! The engine describes a frame through [`Canvas`]; the desktop client turns
//! the calls into GPU instances, tests record them.

use crate::Aabb;
use glam::Vec2;

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
}

/// Text size classes used by the HUD and menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Score,
    Banner,
    Menu,
}

impl TextStyle {
    /// Glyph height in pixels
    pub fn px(self) -> f32 {
        match self {
            TextStyle::Score => 30.0,
            TextStyle::Banner => 60.0,
            TextStyle::Menu => 24.0,
        }
    }
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// A surface the engine can draw a frame onto
pub trait Canvas {
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    fn fill_ellipse(&mut self, rect: Aabb, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle, anchor: Anchor, color: Color);
}
