//! Range session: ties shot recording, hit resolution, command dispatch and
//! target manipulation together.
//!
//! Every method takes `&mut self` and runs to completion synchronously. The
//! session is meant to be owned by a single processing thread; detections
//! from other threads arrive through a [`DetectionQueue`].

use std::fmt;
use std::path::Path;

use crate::clock::{Clock, SessionClock, SystemClock};
use crate::color::Color;
use crate::command::{self, ActionRegistry};
use crate::config::RangeConfig;
use crate::hit::{Hit, resolve_hit};
use crate::pipeline::{ShotPipeline, ShotProcessor};
use crate::queue::DetectionQueue;
use crate::registry::{TargetId, TargetRegistry};
use crate::shot::Shot;
use crate::target::Target;
use crate::transform::{self, KeyEvent, Modifiers, TransformAction};

/// Produces targets from target files.
pub trait TargetLoader {
    /// Returns `None` when the file is missing or unreadable.
    fn load_target(&mut self, path: &Path) -> Option<Target>;
}

/// Observer notified of every accepted shot and the region it hit.
pub trait TrainingProtocol {
    fn shot_listener(&mut self, shot: &Shot, hit: Option<Hit<'_>>);
}

/// Canvas the session draws onto. Every call defaults to a no-op.
pub trait RenderSurface {
    fn add_target(&mut self, _id: TargetId, _target: &Target) {}
    fn remove_target(&mut self, _id: TargetId) {}
    /// Stroke, visibility, position or size of a target changed.
    fn target_changed(&mut self, _id: TargetId, _target: &Target) {}
    fn add_shot(&mut self, _shot: &Shot) {}
    fn clear_shots(&mut self) {}
    /// Keyboard focus should move to the canvas.
    fn request_focus(&mut self) {}
}

/// Surface that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// State of one shooting session on the field.
pub struct RangeSession {
    config: RangeConfig,
    registry: TargetRegistry,
    pipeline: ShotPipeline,
    shots: Vec<Shot>,
    session_clock: SessionClock,
    clock: Box<dyn Clock>,
    actions: Box<dyn ActionRegistry>,
    protocol: Option<Box<dyn TrainingProtocol>>,
    surface: Box<dyn RenderSurface>,
}

impl fmt::Debug for RangeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSession")
            .field("config", &self.config)
            .field("target_count", &self.registry.len())
            .field("selected", &self.registry.selected())
            .field("shot_count", &self.shots.len())
            .field("pipeline", &self.pipeline)
            .field("has_protocol", &self.protocol.is_some())
            .finish_non_exhaustive()
    }
}

impl RangeSession {
    /// Creates a session using the system clock and no render surface.
    pub fn new(config: RangeConfig, actions: impl ActionRegistry + 'static) -> Self {
        Self {
            config,
            registry: TargetRegistry::new(),
            pipeline: ShotPipeline::new(),
            shots: Vec::new(),
            session_clock: SessionClock::new(),
            clock: Box::new(SystemClock),
            actions: Box::new(actions),
            protocol: None,
            surface: Box::new(NullSurface),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_surface(mut self, surface: impl RenderSurface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Targets on the field in registry order.
    pub fn targets(&self) -> impl Iterator<Item = (TargetId, &Target)> {
        self.registry.iter()
    }

    pub fn selected(&self) -> Option<TargetId> {
        self.registry.selected()
    }

    /// Shots accepted since the last reset, oldest first.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Appends a processor to the shot pipeline.
    pub fn add_processor(&mut self, processor: impl ShotProcessor + 'static) {
        self.pipeline.add(processor);
    }

    pub fn pipeline_mut(&mut self) -> &mut ShotPipeline {
        &mut self.pipeline
    }

    /// Installs the active training protocol, replacing any previous one.
    pub fn set_protocol(&mut self, protocol: impl TrainingProtocol + 'static) {
        self.protocol = Some(Box::new(protocol));
    }

    pub fn clear_protocol(&mut self) {
        self.protocol = None;
    }

    /// Records a detected impact.
    ///
    /// The session clock starts on the first shot after a reset, even if
    /// that shot is then vetoed. Returns `None` if a processor vetoed the
    /// shot, in which case nothing else was recorded. Accepted shots are
    /// drawn, hit-tested, trigger the hit region's commands and are reported
    /// to the training protocol.
    pub fn record_shot(&mut self, color: Color, x: f64, y: f64) -> Option<Shot> {
        let elapsed = self.session_clock.elapsed(self.clock.now_millis());
        let shot = Shot::new(color, x, y, elapsed, self.config.marker_radius);

        if !self.pipeline.accepts(&shot) {
            return None;
        }

        self.shots.push(shot);
        self.surface.add_shot(&shot);

        let hit = resolve_hit(&self.registry, x, y);
        if let Some(hit) = hit {
            tracing::debug!(
                "[session] shot at ({:.1}, {:.1}) hit region {} of {}",
                x,
                y,
                hit.region_index,
                hit.target_id
            );
            if let Err(err) = command::dispatch(hit.region, self.actions.as_mut()) {
                tracing::error!(
                    "[command] malformed command on region {} of {}: {}",
                    hit.region_index,
                    hit.target_id,
                    err
                );
            }
        }

        if let Some(protocol) = self.protocol.as_mut() {
            protocol.shot_listener(&shot, hit);
        }

        Some(shot)
    }

    /// Records every detection waiting in the queue. Returns how many were accepted.
    pub fn drain_detections(&mut self, queue: &DetectionQueue) -> usize {
        queue
            .drain()
            .into_iter()
            .filter_map(|d| self.record_shot(d.color, d.x, d.y))
            .count()
    }

    /// Clears shot history and restarts the session clock on the next shot.
    pub fn reset(&mut self) {
        tracing::info!("[session] reset ({} shots cleared)", self.shots.len());
        self.session_clock.reset();
        self.shots.clear();
        self.surface.clear_shots();
    }

    /// Loads a target file and places it on the field.
    ///
    /// A file the loader cannot read is skipped and yields `None`.
    pub fn add_target(&mut self, loader: &mut dyn TargetLoader, path: &Path) -> Option<TargetId> {
        let Some(target) = loader.load_target(path) else {
            tracing::warn!("[session] could not load target {}", path.display());
            return None;
        };
        Some(self.place_target(target))
    }

    /// Places an already loaded target on the field.
    ///
    /// Regions tagged `visible=false` are hidden before the target is
    /// registered.
    pub fn place_target(&mut self, mut target: Target) -> TargetId {
        let hidden = target.hide_tagged_regions();
        let id = self.registry.add(target);
        if let Some(target) = self.registry.get(id) {
            self.surface.add_target(id, target);
        }
        tracing::info!("[session] added {} ({} hidden regions)", id, hidden);
        id
    }

    /// Removes a target from the field, clearing the selection if it was selected.
    pub fn remove_target(&mut self, id: TargetId) -> Option<Target> {
        let target = self.registry.remove(id)?;
        self.surface.remove_target(id);
        tracing::info!("[session] removed {}", id);
        Some(target)
    }

    /// Click on the empty canvas: clears the selection.
    pub fn on_background_click(&mut self) {
        if let Some(previous) = self.registry.deselect() {
            self.notify_changed(previous);
        }
        self.surface.request_focus();
    }

    /// Click on a target: selects it. Returns false for an unknown target.
    pub fn on_target_click(&mut self, id: TargetId) -> bool {
        let previous = self.registry.selected();
        if !self.registry.select(id) {
            return false;
        }
        if let Some(previous) = previous.filter(|p| *p != id) {
            self.notify_changed(previous);
        }
        self.notify_changed(id);
        tracing::debug!("[session] selected {}", id);
        self.surface.request_focus();
        true
    }

    /// Key press on the canvas. Transforms or deletes the selected target.
    ///
    /// Returns true if the event was consumed, which happens whenever a
    /// target is selected, even for keys that do nothing.
    pub fn on_key_press(&mut self, event: KeyEvent) -> bool {
        let Some(id) = self.registry.selected() else {
            return false;
        };

        match transform::key_action(event) {
            Some(TransformAction::Delete) => {
                self.remove_target(id);
            }
            Some(action) => {
                if transform::apply(&mut self.registry, id, action) {
                    self.notify_changed(id);
                }
            }
            None => {}
        }
        true
    }

    /// Click on the canvas itself. In debug mode a primary click with Shift
    /// fires a red shot and with Ctrl a green one.
    pub fn on_canvas_click(
        &mut self,
        button: MouseButton,
        modifiers: Modifiers,
        x: f64,
        y: f64,
    ) -> Option<Shot> {
        if !self.config.debug_mode || button != MouseButton::Primary {
            return None;
        }
        if modifiers.shift {
            self.record_shot(Color::RED, x, y)
        } else if modifiers.control {
            self.record_shot(Color::GREEN, x, y)
        } else {
            None
        }
    }

    fn notify_changed(&mut self, id: TargetId) {
        if let Some(target) = self.registry.get(id) {
            self.surface.target_changed(id, target);
        }
    }
}
