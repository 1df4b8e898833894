//! Headless reference track
//!
//! A [`TrackSurface`] with no renderer behind it: offsets and transition
//! declarations land in plain fields, and the rendered position is
//! interpolated from the installed declaration against the frame clock.
//! Tests and demos drive it; a GUI host would implement the trait against
//! its own renderer instead.

use std::time::Instant;

use rustc_hash::FxHashMap;
use whirl_animation::Easing;
use whirl_core::{CarouselEvent, EventCallback, TrackSurface, TrackTransition};

/// An in-memory track with interpolated settle animation
pub struct HeadlessTrack {
    slide_count: usize,
    slide_width: f32,
    /// Offset most recently applied
    target_offset: f32,
    /// Installed settle declaration, if any
    transition: Option<TrackTransition>,
    /// Rendered offset when the in-flight animation began
    anim_from: f32,
    /// When the in-flight animation began
    anim_start: Option<Instant>,
    /// Frame clock, advanced through `tick`
    now: Instant,
    /// Listeners forwarded through the raw passthrough
    raw_listeners: FxHashMap<String, Vec<EventCallback>>,
}

impl HeadlessTrack {
    /// Create a track of `slide_count` panels, each `slide_width` wide
    pub fn new(slide_count: usize, slide_width: f32) -> Self {
        Self {
            slide_count,
            slide_width,
            target_offset: 0.0,
            transition: None,
            anim_from: 0.0,
            anim_start: None,
            now: Instant::now(),
            raw_listeners: FxHashMap::default(),
        }
    }

    /// The offset most recently applied, regardless of animation progress
    pub fn applied_offset(&self) -> f32 {
        self.target_offset
    }

    /// Whether a settle declaration is currently installed
    pub fn transition_installed(&self) -> bool {
        self.transition.is_some()
    }

    /// Simulate a layout change by resizing the slide panels
    pub fn set_slide_width(&mut self, width: f32) {
        self.slide_width = width;
    }

    /// Whether any listener was forwarded for a raw event name
    pub fn has_raw_listener(&self, name: &str) -> bool {
        self.raw_listeners
            .get(name)
            .is_some_and(|list| !list.is_empty())
    }

    /// Fire a host-native event into the forwarded raw listeners
    pub fn emit_raw(&self, name: &str, detail: &str) {
        if let Some(list) = self.raw_listeners.get(name) {
            let event = CarouselEvent::Raw {
                name: name.to_string(),
                detail: detail.to_string(),
            };
            for listener in list {
                listener(&event);
            }
        }
    }
}

impl TrackSurface for HeadlessTrack {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn measure_slide_width(&self) -> f32 {
        self.slide_width
    }

    fn set_offset(&mut self, offset: f32) {
        if self.transition.is_some() {
            // Animate from wherever the track is rendered right now
            self.anim_from = self.rendered_offset();
            self.anim_start = Some(self.now);
        } else {
            self.anim_from = offset;
            self.anim_start = None;
        }
        self.target_offset = offset;
    }

    fn rendered_offset(&self) -> f32 {
        let (Some(transition), Some(start)) = (self.transition, self.anim_start) else {
            return self.target_offset;
        };
        let elapsed = self.now.saturating_duration_since(start);
        if transition.duration.is_zero() || elapsed >= transition.duration {
            return self.target_offset;
        }
        let fraction = elapsed.as_secs_f32() / transition.duration.as_secs_f32();
        let eased = Easing::from_control_points(transition.curve).eval(fraction);
        self.anim_from + (self.target_offset - self.anim_from) * eased
    }

    fn apply_transition(&mut self, transition: TrackTransition) {
        self.transition = Some(transition);
    }

    fn clear_transition(&mut self) {
        // Removing the declaration snaps the render to the applied offset
        self.transition = None;
        self.anim_start = None;
        self.anim_from = self.target_offset;
    }

    fn forward_raw_listener(&mut self, name: &str, listener: EventCallback) {
        self.raw_listeners
            .entry(name.to_string())
            .or_default()
            .push(listener);
    }

    fn tick(&mut self, now: Instant) {
        self.now = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn linear_transition(ms: u64) -> TrackTransition {
        TrackTransition {
            duration: Duration::from_millis(ms),
            curve: Easing::Linear.control_points(),
        }
    }

    #[test]
    fn test_offsets_apply_instantly_without_transition() {
        let mut track = HeadlessTrack::new(4, 300.0);
        track.set_offset(-120.0);
        assert_eq!(track.rendered_offset(), -120.0);
        assert_eq!(track.applied_offset(), -120.0);
    }

    #[test]
    fn test_rendered_offset_interpolates_under_transition() {
        let mut track = HeadlessTrack::new(4, 300.0);
        let t0 = Instant::now();
        track.tick(t0);
        track.apply_transition(linear_transition(600));
        track.set_offset(-300.0);

        assert_eq!(track.rendered_offset(), 0.0);

        track.tick(t0 + Duration::from_millis(300));
        assert!((track.rendered_offset() - (-150.0)).abs() < 1.0);

        track.tick(t0 + Duration::from_millis(600));
        assert_eq!(track.rendered_offset(), -300.0);
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_rendered() {
        let mut track = HeadlessTrack::new(4, 300.0);
        let t0 = Instant::now();
        track.tick(t0);
        track.apply_transition(linear_transition(600));
        track.set_offset(-300.0);

        // Halfway there, head back to zero
        track.tick(t0 + Duration::from_millis(300));
        track.set_offset(0.0);
        let rendered = track.rendered_offset();
        assert!((rendered - (-150.0)).abs() < 1.0);

        track.tick(t0 + Duration::from_millis(600));
        assert!((track.rendered_offset() - (-75.0)).abs() < 1.0);
    }

    #[test]
    fn test_clear_transition_snaps_to_target() {
        let mut track = HeadlessTrack::new(4, 300.0);
        let t0 = Instant::now();
        track.tick(t0);
        track.apply_transition(linear_transition(600));
        track.set_offset(-300.0);

        track.tick(t0 + Duration::from_millis(100));
        track.clear_transition();
        assert_eq!(track.rendered_offset(), -300.0);
    }

    #[test]
    fn test_raw_listener_forward_and_emit() {
        let mut track = HeadlessTrack::new(4, 300.0);
        let call_count = Arc::new(AtomicU32::new(0));

        let count = Arc::clone(&call_count);
        track.forward_raw_listener(
            "pointerenter",
            std::rc::Rc::new(move |event| {
                if let CarouselEvent::Raw { name, .. } = event {
                    assert_eq!(name, "pointerenter");
                    count.fetch_add(1, Ordering::SeqCst);
                }
            }),
        );

        assert!(track.has_raw_listener("pointerenter"));
        assert!(!track.has_raw_listener("wheel"));

        track.emit_raw("pointerenter", "");
        track.emit_raw("wheel", "");
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }
}
