//! Target regions: the smallest taggable, hit-testable shapes of a target.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Bounds;

/// Tag holding the region's command string.
pub const COMMAND_TAG: &str = "command";
/// Tag controlling initial visibility (`"false"` hides the region).
pub const VISIBLE_TAG: &str = "visible";

/// Region type tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RegionType {
    Image,
    Rectangle,
    Ellipse,
    Polygon,
}

/// Region geometry, in coordinates local to the owning target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegionShape {
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        source: String,
    },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Ellipse {
        center: [f64; 2],
        radius_x: f64,
        radius_y: f64,
    },
    Polygon {
        points: Vec<[f64; 2]>,
    },
}

impl RegionShape {
    pub fn region_type(&self) -> RegionType {
        match self {
            Self::Image { .. } => RegionType::Image,
            Self::Rectangle { .. } => RegionType::Rectangle,
            Self::Ellipse { .. } => RegionType::Ellipse,
            Self::Polygon { .. } => RegionType::Polygon,
        }
    }

    /// Axis-aligned bounds of the shape in local coordinates.
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Image {
                x,
                y,
                width,
                height,
                ..
            }
            | Self::Rectangle {
                x,
                y,
                width,
                height,
            } => Bounds::from_rect(*x, *y, *width, *height),
            Self::Ellipse {
                center,
                radius_x,
                radius_y,
            } => Bounds::new(
                center[0] - radius_x,
                center[1] - radius_y,
                center[0] + radius_x,
                center[1] + radius_y,
            ),
            Self::Polygon { points } => {
                Bounds::from_points(points).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
            }
        }
    }

    /// Grows (or shrinks, for negative `delta`) the bounding width by `delta`.
    /// Width never drops below zero.
    fn change_width(&mut self, delta: f64) {
        match self {
            Self::Image { width, .. } | Self::Rectangle { width, .. } => {
                *width = (*width + delta).max(0.0);
            }
            Self::Ellipse { radius_x, .. } => {
                *radius_x = (*radius_x + delta / 2.0).max(0.0);
            }
            Self::Polygon { points } => {
                let Some(bounds) = Bounds::from_points(points) else {
                    return;
                };
                scale_axis(points, 0, bounds.min_x, bounds.width(), delta);
            }
        }
    }

    /// Grows (or shrinks) the bounding height by `delta`, never below zero.
    fn change_height(&mut self, delta: f64) {
        match self {
            Self::Image { height, .. } | Self::Rectangle { height, .. } => {
                *height = (*height + delta).max(0.0);
            }
            Self::Ellipse { radius_y, .. } => {
                *radius_y = (*radius_y + delta / 2.0).max(0.0);
            }
            Self::Polygon { points } => {
                let Some(bounds) = Bounds::from_points(points) else {
                    return;
                };
                scale_axis(points, 1, bounds.min_y, bounds.height(), delta);
            }
        }
    }
}

/// Smallest extent a polygon is shrunk to. Scaling never reaches zero so
/// the outline can be grown back.
const MIN_POLYGON_EXTENT: f64 = 1e-6;

/// Scales one axis of a polygon around `origin` so its extent changes by `delta`.
fn scale_axis(points: &mut [[f64; 2]], axis: usize, origin: f64, extent: f64, delta: f64) {
    if extent <= 0.0 {
        if delta > 0.0 {
            spread_axis(points, axis, origin + delta);
        }
        return;
    }
    let factor = (extent + delta).max(MIN_POLYGON_EXTENT) / extent;
    for p in points.iter_mut() {
        p[axis] = origin + (p[axis] - origin) * factor;
    }
}

/// Gives a flat polygon an extent on `axis` by moving its second half of
/// points out to `edge`.
fn spread_axis(points: &mut [[f64; 2]], axis: usize, edge: f64) {
    let start = (points.len() / 2).max(1);
    for p in points.iter_mut().skip(start) {
        p[axis] = edge;
    }
}

/// Selection stroke state of a region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrokeState {
    Selected,
    #[default]
    Unselected,
}

/// A single hit-testable region of a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRegion {
    shape: RegionShape,
    #[serde(default)]
    tags: BTreeMap<String, String>,
    #[serde(skip, default)]
    stroke: StrokeState,
    #[serde(skip, default = "default_true")]
    visible: bool,
}

fn default_true() -> bool {
    true
}

impl TargetRegion {
    /// Creates an untagged, visible, unselected region.
    pub fn new(shape: RegionShape) -> Self {
        Self {
            shape,
            tags: BTreeMap::new(),
            stroke: StrokeState::Unselected,
            visible: true,
        }
    }

    /// Builder-style tag insertion.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn region_type(&self) -> RegionType {
        self.shape.region_type()
    }

    pub fn shape(&self) -> &RegionShape {
        &self.shape
    }

    /// Bounds in target-local coordinates.
    pub fn bounds(&self) -> Bounds {
        self.shape.bounds()
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn tag_exists(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    pub fn remove_tag(&mut self, key: &str) -> Option<String> {
        self.tags.remove(key)
    }

    /// The raw command string, if this region carries one.
    pub fn command(&self) -> Option<&str> {
        self.tag(COMMAND_TAG)
    }

    /// Returns true if the region is tagged `visible=false`.
    pub fn hidden_by_tag(&self) -> bool {
        self.tag(VISIBLE_TAG) == Some("false")
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke
    }

    /// Stroke color to paint, `None` for image regions which have no outline.
    pub fn stroke(&self) -> Option<Color> {
        if self.region_type() == RegionType::Image {
            return None;
        }
        Some(match self.stroke {
            StrokeState::Selected => Color::SELECTED_STROKE,
            StrokeState::Unselected => Color::UNSELECTED_STROKE,
        })
    }

    /// Applies the selection stroke. Image regions are left untouched.
    pub fn set_selected(&mut self, selected: bool) {
        if self.region_type() == RegionType::Image {
            return;
        }
        self.stroke = if selected {
            StrokeState::Selected
        } else {
            StrokeState::Unselected
        };
    }

    pub fn change_width(&mut self, delta: f64) {
        self.shape.change_width(delta);
    }

    pub fn change_height(&mut self, delta: f64) {
        self.shape.change_height(delta);
    }
}
