//! Shotline Core Library
//!
//! Shot processing, hit detection and command dispatch for targets placed
//! on a live camera feed.
//!
//! All state lives in a [`RangeSession`] driven from a single processing
//! thread. Detections produced elsewhere are funneled in through a
//! [`DetectionQueue`].

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod color;
pub mod command;
pub mod config;
pub mod geometry;
pub mod hit;
#[cfg(feature = "subscriber")]
pub mod logging;
pub mod pipeline;
pub mod queue;
pub mod region;
pub mod registry;
pub mod session;
pub mod shot;
pub mod target;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_utils;

pub use clock::{Clock, SystemClock};
pub use color::Color;
pub use command::{ActionRegistry, Command, CommandError, RegionAction};
pub use config::{ConfigError, RangeConfig};
pub use geometry::Bounds;
pub use hit::{Hit, resolve_hit};
pub use pipeline::{ShotPipeline, ShotProcessor};
pub use queue::{Detection, DetectionQueue};
pub use region::{RegionShape, RegionType, StrokeState, TargetRegion};
pub use registry::{TargetId, TargetRegistry};
pub use session::{
    MouseButton, NullSurface, RangeSession, RenderSurface, TargetLoader, TrainingProtocol,
};
pub use shot::Shot;
pub use target::Target;
pub use transform::{Key, KeyEvent, Modifiers, TransformAction, key_action};
