//! RGBA colors for shots and region strokes.

use serde::{Deserialize, Serialize};

/// RGBA color representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Laser colors a detector reports.
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Stroke painted on the regions of the selected target.
    pub const SELECTED_STROKE: Color = Color::rgb(30, 144, 255);
    /// Stroke painted on regions of every other target.
    pub const UNSELECTED_STROKE: Color = Color::BLACK;
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}
