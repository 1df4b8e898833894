//! Pointer sample tracking
//!
//! Converts the absolute coordinates hosts report into per-sample movement
//! deltas, and pins a gesture to whichever pointer started it so a second
//! touch cannot steal an active drag.

/// What started the active gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureSource {
    /// Primary mouse button held down
    Mouse,
    /// Touch point with this id
    Touch(u64),
}

/// Tracks pointer samples across one gesture
///
/// `begin` seeds the previous position with the press coordinates, so the
/// first move yields the true movement since the press rather than a jump
/// from stale state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    source: Option<GestureSource>,
    previous: Option<(f32, f32)>,
}

impl PointerTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress
    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    /// The pointer that owns the current gesture
    pub fn source(&self) -> Option<GestureSource> {
        self.source
    }

    /// Whether `source` owns the current gesture
    pub fn owns(&self, source: GestureSource) -> bool {
        self.source == Some(source)
    }

    /// Claim a gesture for `source`, seeding deltas at the press position
    pub fn begin(&mut self, source: GestureSource, x: f32, y: f32) {
        self.source = Some(source);
        self.previous = Some((x, y));
    }

    /// Movement since the previous sample of this gesture
    ///
    /// An unseeded first sample yields `(0.0, 0.0)` and seeds the tracker,
    /// so a host that skips the press coordinates never produces a jump.
    pub fn sample(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = match self.previous {
            Some((px, py)) => (x - px, y - py),
            None => (0.0, 0.0),
        };
        self.previous = Some((x, y));
        delta
    }

    /// Release the gesture and forget the sample history
    pub fn end(&mut self) {
        self.source = None;
        self.previous = None;
    }
}
