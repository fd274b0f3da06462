//! Resolves which region of which target a shot struck.

use crate::region::TargetRegion;
use crate::registry::{TargetId, TargetRegistry};

/// A resolved hit on a target region.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub target_id: TargetId,
    /// Index of the region within its target (back-to-front order).
    pub region_index: usize,
    pub region: &'a TargetRegion,
}

/// Finds the region hit by a shot at `(x, y)`.
///
/// The first target in registry order whose bounds contain the point is the
/// only one examined, even if later targets overlap it. Within that target
/// the topmost containing region wins. Target bounds cover visible regions
/// only, but a hidden region inside them can still be hit.
pub fn resolve_hit(registry: &TargetRegistry, x: f64, y: f64) -> Option<Hit<'_>> {
    let (target_id, target) = registry.iter().find(|(_, t)| t.contains(x, y))?;

    (0..target.regions().len())
        .rev()
        .find(|&i| target.region_bounds(i).is_some_and(|b| b.contains(x, y)))
        .map(|region_index| Hit {
            target_id,
            region_index,
            region: &target.regions()[region_index],
        })
}
