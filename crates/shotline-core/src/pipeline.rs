//! Ordered chain of shot processors that may veto a shot.

use crate::shot::Shot;

/// A filter run on every candidate shot before it is recorded.
///
/// Returning `false` vetoes the shot.
pub trait ShotProcessor {
    fn process_shot(&mut self, shot: &Shot) -> bool;
}

impl<F> ShotProcessor for F
where
    F: FnMut(&Shot) -> bool,
{
    fn process_shot(&mut self, shot: &Shot) -> bool {
        self(shot)
    }
}

/// Processors in registration order.
#[derive(Default)]
pub struct ShotPipeline {
    processors: Vec<Box<dyn ShotProcessor>>,
}

impl std::fmt::Debug for ShotPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShotPipeline")
            .field("processor_count", &self.processors.len())
            .finish()
    }
}

impl ShotPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a processor to the end of the chain.
    pub fn add(&mut self, processor: impl ShotProcessor + 'static) {
        self.processors.push(Box::new(processor));
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub fn clear(&mut self) {
        self.processors.clear();
    }

    /// Runs the shot through every processor in order.
    ///
    /// Stops at the first veto; later processors never see the shot.
    pub fn accepts(&mut self, shot: &Shot) -> bool {
        for (index, processor) in self.processors.iter_mut().enumerate() {
            if !processor.process_shot(shot) {
                tracing::debug!(
                    "[pipeline] shot at ({:.1}, {:.1}) vetoed by processor {}",
                    shot.x(),
                    shot.y(),
                    index
                );
                return false;
            }
        }
        true
    }
}
