//! Per-frame position sampling
//!
//! Once a position listener exists, the carousel samples the rendered
//! offset relative to neutral on every frame and reports only the samples
//! that differ from the last reported value. The watch starts when the
//! first listener registers and never starts twice; the handle's stop flag
//! ends sampling from anywhere that holds it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation handle for a running position watch
#[derive(Clone, Debug)]
pub struct WatchHandle {
    running: Arc<AtomicBool>,
}

impl WatchHandle {
    /// Stop the watch; subsequent samples report nothing
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Whether the watch is still sampling
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Level-triggered sampler for the track's offset from neutral
#[derive(Debug, Default)]
pub struct PositionWatch {
    running: Option<Arc<AtomicBool>>,
    /// Sample most recently reported to listeners
    last_reported: Option<f32>,
}

impl PositionWatch {
    /// Create a watch that is not yet sampling
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the watch is sampling
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Start sampling and return the cancellation handle
    ///
    /// Resets the dedup state so the first sample after a start is always
    /// reported.
    pub fn start(&mut self) -> WatchHandle {
        let flag = Arc::new(AtomicBool::new(true));
        self.running = Some(Arc::clone(&flag));
        self.last_reported = None;
        tracing::debug!("position watch started");
        WatchHandle { running: flag }
    }

    /// Offer one frame's sample
    ///
    /// Returns the value to report, or `None` when the watch is stopped or
    /// the sample matches the last reported value exactly.
    pub fn sample(&mut self, offset_from_neutral: f32) -> Option<f32> {
        if !self.is_running() {
            return None;
        }
        if self.last_reported == Some(offset_from_neutral) {
            return None;
        }
        self.last_reported = Some(offset_from_neutral);
        Some(offset_from_neutral)
    }
}
