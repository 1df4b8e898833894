//! Track surface abstraction
//!
//! The carousel core never renders. Everything it does to the screen goes
//! through [`TrackSurface`], implemented by the host against its renderer:
//! a horizontal offset applied to the slide track, a transition declaration
//! toggled around animated settles, and geometry queries. A headless
//! reference implementation lives in the carousel crate for tests and
//! demos.

use std::time::{Duration, Instant};

use crate::events::EventCallback;

/// Transition declaration pushed to the track around an animated settle
///
/// This is the wire-level form the host understands: how long the track
/// takes to reach a newly applied offset, and the cubic bezier timing
/// curve shaping the motion. Richer easing types lower themselves to this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackTransition {
    /// Time the track takes to reach a new offset
    pub duration: Duration,
    /// Cubic bezier control points (x1, y1, x2, y2)
    pub curve: [f32; 4],
}

/// Host-side track the carousel drives
///
/// Offsets are signed pixels applied to the whole slide track; slide `i`
/// sits flush when the offset equals `-i * slide_width`. While a transition
/// declaration is installed the rendered position lags the applied offset,
/// which is why [`rendered_offset`] exists as a separate query.
///
/// [`rendered_offset`]: TrackSurface::rendered_offset
pub trait TrackSurface {
    /// Number of slide panels in the track
    fn slide_count(&self) -> usize;

    /// Measure the width of one slide panel
    ///
    /// All panels are assumed equal width; hosts typically measure the
    /// first one.
    fn measure_slide_width(&self) -> f32;

    /// Apply a horizontal offset to the track
    fn set_offset(&mut self, offset: f32);

    /// The offset the track is currently rendered at
    ///
    /// Differs from the last applied offset while a transition is still
    /// playing. A drag that starts mid-animation adopts this value.
    fn rendered_offset(&self) -> f32;

    /// Install a transition declaration for subsequent offset changes
    fn apply_transition(&mut self, transition: TrackTransition);

    /// Remove the transition declaration; offset changes apply instantly
    fn clear_transition(&mut self);

    /// Attach a listener for a host-native event the carousel does not
    /// interpret
    ///
    /// The host invokes the callback with [`CarouselEvent::Raw`] payloads
    /// whenever its native event of that name fires.
    ///
    /// [`CarouselEvent::Raw`]: crate::events::CarouselEvent::Raw
    fn forward_raw_listener(&mut self, name: &str, listener: EventCallback);

    /// Observe the frame clock
    ///
    /// Hosts that render on their own clock can ignore this; the headless
    /// reference track uses it to progress settle animations.
    fn tick(&mut self, _now: Instant) {}
}
