//! Keyboard-driven move, resize and delete of the selected target.

use crate::registry::{TargetId, TargetRegistry};

/// Distance a target moves per key press.
pub const MOVEMENT_DELTA: f64 = 1.0;
/// Amount a region grows or shrinks per key press.
pub const SCALE_DELTA: f64 = 1.0;

/// Keys the transform controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Delete,
    Left,
    Right,
    Up,
    Down,
    /// Any other key; never handled.
    Other,
}

/// Modifier keys held during a key press or click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
    };
    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn shifted(key: Key) -> Self {
        Self::new(key, Modifiers::SHIFT)
    }
}

/// Change to apply to the selected target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformAction {
    Delete,
    /// Shift the target's layout offset.
    Move { dx: f64, dy: f64 },
    /// Grow every region by `dw` in width and `dh` in height.
    Resize { dw: f64, dh: f64 },
}

/// Maps a key press to a transform. `None` for keys that do nothing.
pub fn key_action(event: KeyEvent) -> Option<TransformAction> {
    let shift = event.modifiers.shift;
    let action = match event.key {
        Key::Delete => TransformAction::Delete,
        Key::Left if shift => TransformAction::Resize {
            dw: -SCALE_DELTA,
            dh: 0.0,
        },
        Key::Right if shift => TransformAction::Resize {
            dw: SCALE_DELTA,
            dh: 0.0,
        },
        Key::Up if shift => TransformAction::Resize {
            dw: 0.0,
            dh: -SCALE_DELTA,
        },
        Key::Down if shift => TransformAction::Resize {
            dw: 0.0,
            dh: SCALE_DELTA,
        },
        Key::Left => TransformAction::Move {
            dx: -MOVEMENT_DELTA,
            dy: 0.0,
        },
        Key::Right => TransformAction::Move {
            dx: MOVEMENT_DELTA,
            dy: 0.0,
        },
        Key::Up => TransformAction::Move {
            dx: 0.0,
            dy: -MOVEMENT_DELTA,
        },
        Key::Down => TransformAction::Move {
            dx: 0.0,
            dy: MOVEMENT_DELTA,
        },
        Key::Other => return None,
    };
    Some(action)
}

/// Applies a move or resize to a target in place.
///
/// Deletion needs the surrounding session (render surface, selection), so
/// `Delete` is left to the caller and reported as not applied.
pub fn apply(registry: &mut TargetRegistry, id: TargetId, action: TransformAction) -> bool {
    let Some(target) = registry.get_mut(id) else {
        return false;
    };
    match action {
        TransformAction::Move { dx, dy } => target.translate(dx, dy),
        TransformAction::Resize { dw, dh } => {
            if dw != 0.0 {
                target.change_width(dw);
            }
            if dh != 0.0 {
                target.change_height(dh);
            }
        }
        TransformAction::Delete => return false,
    }
    true
}
