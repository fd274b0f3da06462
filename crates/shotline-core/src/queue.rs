//! Hand-off of raw detections from capture threads to the processing thread.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::color::Color;

/// A raw impact reported by a detector, before any processing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub color: Color,
    pub x: f64,
    pub y: f64,
}

impl Detection {
    pub fn new(color: Color, x: f64, y: f64) -> Self {
        Self { color, x, y }
    }
}

/// Thread-safe FIFO of detections.
///
/// Clones share the same queue: hand one to each capture thread and drain
/// it from the thread that owns the session.
#[derive(Debug, Clone, Default)]
pub struct DetectionQueue {
    inner: Arc<Mutex<VecDeque<Detection>>>,
}

impl DetectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a detection to be processed.
    pub fn push(&self, detection: Detection) {
        self.inner.lock().push_back(detection);
    }

    /// Drain all pending detections in arrival order.
    pub fn drain(&self) -> Vec<Detection> {
        self.inner.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
