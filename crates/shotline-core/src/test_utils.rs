//! Recording doubles shared by unit tests.

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use crate::clock::Clock;
use crate::command::ActionRegistry;
use crate::hit::Hit;
use crate::pipeline::ShotProcessor;
use crate::registry::TargetId;
use crate::session::{RenderSurface, TargetLoader, TrainingProtocol};
use crate::shot::Shot;
use crate::target::Target;

/// Records every sound it is asked to play. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingActions {
    sounds: Rc<RefCell<Vec<String>>>,
}

impl RecordingActions {
    pub fn sounds(&self) -> Vec<String> {
        self.sounds.borrow().clone()
    }
}

impl ActionRegistry for RecordingActions {
    fn play_sound(&mut self, path: &str) {
        self.sounds.borrow_mut().push(path.to_string());
    }
}

/// Processor with a fixed verdict that counts how often it ran.
#[derive(Debug, Clone)]
pub struct CountingProcessor {
    verdict: Rc<Cell<bool>>,
    calls: Rc<Cell<usize>>,
}

impl CountingProcessor {
    pub fn new(verdict: bool) -> Self {
        Self {
            verdict: Rc::new(Cell::new(verdict)),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn set_verdict(&self, verdict: bool) {
        self.verdict.set(verdict);
    }
}

impl ShotProcessor for CountingProcessor {
    fn process_shot(&mut self, _shot: &Shot) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.verdict.get()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    AddTarget(TargetId),
    RemoveTarget(TargetId),
    TargetChanged(TargetId),
    AddShot(Shot),
    ClearShots,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Rc<RefCell<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl RenderSurface for RecordingSurface {
    fn add_target(&mut self, id: TargetId, _target: &Target) {
        self.push(SurfaceEvent::AddTarget(id));
    }

    fn remove_target(&mut self, id: TargetId) {
        self.push(SurfaceEvent::RemoveTarget(id));
    }

    fn target_changed(&mut self, id: TargetId, _target: &Target) {
        self.push(SurfaceEvent::TargetChanged(id));
    }

    fn add_shot(&mut self, shot: &Shot) {
        self.push(SurfaceEvent::AddShot(*shot));
    }

    fn clear_shots(&mut self) {
        self.push(SurfaceEvent::ClearShots);
    }
}

/// Protocol that keeps each shot with the (target, region) it hit.
#[derive(Debug, Clone, Default)]
pub struct RecordingProtocol {
    events: Rc<RefCell<Vec<(Shot, Option<(TargetId, usize)>)>>>,
}

impl RecordingProtocol {
    pub fn events(&self) -> Vec<(Shot, Option<(TargetId, usize)>)> {
        self.events.borrow().clone()
    }
}

impl TrainingProtocol for RecordingProtocol {
    fn shot_listener(&mut self, shot: &Shot, hit: Option<Hit<'_>>) {
        self.events
            .borrow_mut()
            .push((*shot, hit.map(|h| (h.target_id, h.region_index))));
    }
}

/// Loader that hands out the same target for every path.
#[derive(Debug, Clone)]
pub struct FixedLoader {
    target: Option<Target>,
}

impl FixedLoader {
    pub fn new(target: Target) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Loader for which every file is unreadable.
    pub fn empty() -> Self {
        Self { target: None }
    }
}

impl TargetLoader for FixedLoader {
    fn load_target(&mut self, _path: &Path) -> Option<Target> {
        self.target.clone()
    }
}
