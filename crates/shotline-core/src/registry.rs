//! Registry of targets on the field and the current selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::target::Target;

/// Unique identifier for a target on the field.
///
/// Identifiers are never reused within a registry, so a stale id simply
/// stops resolving once its target is removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// Owns the targets currently on the field, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: Vec<(TargetId, Target)>,
    selected: Option<TargetId>,
    next_id: u64,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a target and returns its new id.
    pub fn add(&mut self, target: Target) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.targets.push((id, target));
        id
    }

    /// Removes a target. Clears the selection if it pointed at this target.
    pub fn remove(&mut self, id: TargetId) -> Option<Target> {
        let pos = self.targets.iter().position(|(tid, _)| *tid == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.targets.remove(pos).1)
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets
            .iter()
            .find(|(tid, _)| *tid == id)
            .map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut Target> {
        self.targets
            .iter_mut()
            .find(|(tid, _)| *tid == id)
            .map(|(_, t)| t)
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates targets in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetId, &Target)> {
        self.targets.iter().map(|(id, t)| (*id, t))
    }

    pub fn ids(&self) -> Vec<TargetId> {
        self.targets.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Currently selected target id.
    pub fn selected(&self) -> Option<TargetId> {
        self.selected
    }

    pub fn selected_target(&self) -> Option<&Target> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Selects a target, restroking the previous selection as unselected.
    ///
    /// Returns false (and leaves the selection alone) for an unknown id.
    pub fn select(&mut self, id: TargetId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if let Some(previous) = self.selected.take() {
            if let Some(target) = self.get_mut(previous) {
                target.set_selected(false);
            }
        }
        if let Some(target) = self.get_mut(id) {
            target.set_selected(true);
        }
        self.selected = Some(id);
        true
    }

    /// Clears the selection. Returns the previously selected id.
    pub fn deselect(&mut self) -> Option<TargetId> {
        let previous = self.selected.take()?;
        if let Some(target) = self.get_mut(previous) {
            target.set_selected(false);
        }
        Some(previous)
    }

    /// Removes every target.
    pub fn clear(&mut self) {
        self.targets.clear();
        self.selected = None;
    }
}
