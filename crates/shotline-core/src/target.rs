//! Targets: ordered groups of regions that are selected, moved and deleted as one.

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::region::TargetRegion;

/// A placed target.
///
/// Regions are stored back-to-front: the last region is painted on top and
/// therefore wins hit tests against the regions it overlaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    regions: Vec<TargetRegion>,
    #[serde(default)]
    layout_x: f64,
    #[serde(default)]
    layout_y: f64,
}

impl Target {
    pub fn new(regions: Vec<TargetRegion>) -> Self {
        Self {
            regions,
            layout_x: 0.0,
            layout_y: 0.0,
        }
    }

    /// Places the target at the given layout offset.
    #[must_use]
    pub fn at(mut self, layout_x: f64, layout_y: f64) -> Self {
        self.layout_x = layout_x;
        self.layout_y = layout_y;
        self
    }

    pub fn regions(&self) -> &[TargetRegion] {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut [TargetRegion] {
        &mut self.regions
    }

    pub fn region(&self, index: usize) -> Option<&TargetRegion> {
        self.regions.get(index)
    }

    /// Adds a region on top of all existing ones.
    pub fn push_region(&mut self, region: TargetRegion) {
        self.regions.push(region);
    }

    pub fn layout_x(&self) -> f64 {
        self.layout_x
    }

    pub fn layout_y(&self) -> f64 {
        self.layout_y
    }

    pub fn set_layout(&mut self, layout_x: f64, layout_y: f64) {
        self.layout_x = layout_x;
        self.layout_y = layout_y;
    }

    /// Moves the target by the given offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.layout_x += dx;
        self.layout_y += dy;
    }

    /// Bounds of region `index` in canvas coordinates.
    pub fn region_bounds(&self, index: usize) -> Option<Bounds> {
        self.regions
            .get(index)
            .map(|r| r.bounds().translate(self.layout_x, self.layout_y))
    }

    /// Overall bounds of the visible regions in canvas coordinates.
    ///
    /// `None` for a target with no visible region.
    pub fn bounds(&self) -> Option<Bounds> {
        let local = self
            .regions
            .iter()
            .filter(|r| r.is_visible())
            .map(TargetRegion::bounds)
            .reduce(|acc, b| acc.union(&b))?;
        Some(local.translate(self.layout_x, self.layout_y))
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds().is_some_and(|b| b.contains(x, y))
    }

    /// Hides every region tagged `visible=false`. Returns how many were hidden.
    pub fn hide_tagged_regions(&mut self) -> usize {
        let mut hidden = 0;
        for region in &mut self.regions {
            if region.hidden_by_tag() {
                region.set_visible(false);
                hidden += 1;
            }
        }
        hidden
    }

    /// Applies the selection stroke to every region.
    pub fn set_selected(&mut self, selected: bool) {
        for region in &mut self.regions {
            region.set_selected(selected);
        }
    }

    /// Resizes every region's width by `delta`.
    pub fn change_width(&mut self, delta: f64) {
        for region in &mut self.regions {
            region.change_width(delta);
        }
    }

    /// Resizes every region's height by `delta`.
    pub fn change_height(&mut self, delta: f64) {
        for region in &mut self.regions {
            region.change_height(delta);
        }
    }
}
