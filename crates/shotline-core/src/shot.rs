//! Recorded shots.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A single recorded impact.
///
/// Shots are immutable once created; the session keeps them in its history
/// until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    color: Color,
    x: f64,
    y: f64,
    timestamp_offset_ms: i64,
    marker_radius: f32,
}

impl Shot {
    pub fn new(color: Color, x: f64, y: f64, timestamp_offset_ms: i64, marker_radius: f32) -> Self {
        Self {
            color,
            x,
            y,
            timestamp_offset_ms,
            marker_radius,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Milliseconds since the session clock started.
    pub fn timestamp_offset_ms(&self) -> i64 {
        self.timestamp_offset_ms
    }

    /// Radius of the marker drawn for this shot.
    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }
}
