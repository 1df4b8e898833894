//! The carousel facade
//!
//! Owns a track surface and glues the pieces together: pointer events come
//! in, the position controller accumulates drag movement, the transition
//! manager toggles the settle declaration, and listeners hear about
//! committed slide changes and per-frame position movement.
//!
//! # Example
//!
//! ```rust
//! use std::time::Instant;
//! use whirl_carousel::{Carousel, HeadlessTrack};
//!
//! let mut carousel = Carousel::new(HeadlessTrack::new(3, 320.0));
//! carousel.go_to(2, Instant::now()).unwrap();
//! assert_eq!(carousel.active_slide(), 2);
//! ```

use std::rc::Rc;
use std::time::Instant;

use whirl_animation::TransitionManager;
use whirl_core::{
    CarouselError, CarouselEvent, EventKind, EventListeners, MouseButton, MouseEvent, PointerEvent,
    Result, TouchEvent, TrackSurface,
};

use crate::config::CarouselConfig;
use crate::gesture::{gesture_events, DragPhase, StateTransitions};
use crate::pointer::{GestureSource, PointerTracker};
use crate::position::PositionController;
use crate::watch::{PositionWatch, WatchHandle};

/// A pointer-driven carousel over a host track surface
pub struct Carousel<S: TrackSurface> {
    surface: S,
    config: CarouselConfig,
    position: PositionController,
    transition: TransitionManager,
    tracker: PointerTracker,
    drag_phase: DragPhase,
    listeners: EventListeners,
    watch: PositionWatch,
    watch_handle: Option<WatchHandle>,
}

impl<S: TrackSurface> Carousel<S> {
    /// Create a carousel with the default configuration
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, CarouselConfig::default())
    }

    /// Create a carousel with a custom configuration
    pub fn with_config(mut surface: S, config: CarouselConfig) -> Self {
        let slide_count = surface.slide_count();
        let slide_width = surface.measure_slide_width();
        let position =
            PositionController::new(slide_count, slide_width, config.threshold_percent);

        // Park the track on the first slide
        surface.set_offset(position.current_offset);

        Self {
            surface,
            config,
            position,
            transition: TransitionManager::new(config.transition),
            tracker: PointerTracker::new(),
            drag_phase: DragPhase::Idle,
            listeners: EventListeners::new(),
            watch: PositionWatch::new(),
            watch_handle: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The settled slide index
    pub fn active_slide(&self) -> usize {
        self.position.active_slide
    }

    /// Number of slide panels
    pub fn slide_count(&self) -> usize {
        self.position.slide_count
    }

    /// The offset currently applied to the track
    pub fn position_offset(&self) -> f32 {
        self.position.current_offset
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag_phase.is_dragging()
    }

    /// The position state behind this carousel
    pub fn position(&self) -> &PositionController {
        &self.position
    }

    /// The active configuration
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The host surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Handle for stopping the position watch, if it ever started
    pub fn watch_handle(&self) -> Option<WatchHandle> {
        self.watch_handle.clone()
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Feed one pointer event
    ///
    /// Returns true when the event drove the carousel; the host should
    /// suppress its default handling (page scrolling on touch moves in
    /// particular) for consumed events.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> bool {
        self.surface.tick(now);
        match event {
            PointerEvent::Mouse(MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            }) if !self.drag_phase.is_dragging() => {
                self.begin_drag(GestureSource::Mouse, *x, *y);
                true
            }
            PointerEvent::Mouse(MouseEvent::Moved { x, y })
                if self.tracker.owns(GestureSource::Mouse) =>
            {
                self.drag_move(*x, *y);
                true
            }
            PointerEvent::Mouse(MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                ..
            }) if self.tracker.owns(GestureSource::Mouse) => {
                self.end_drag(now);
                true
            }
            // Leaving the window with the button down orphans the gesture;
            // moving onto a neighboring element does not
            PointerEvent::Mouse(MouseEvent::Exited { left_window: true })
                if self.tracker.owns(GestureSource::Mouse) =>
            {
                self.end_drag(now);
                true
            }
            PointerEvent::Touch(TouchEvent::Started { id, x, y })
                if !self.drag_phase.is_dragging() =>
            {
                self.begin_drag(GestureSource::Touch(*id), *x, *y);
                true
            }
            PointerEvent::Touch(TouchEvent::Moved { id, x, y })
                if self.tracker.owns(GestureSource::Touch(*id)) =>
            {
                self.drag_move(*x, *y);
                true
            }
            PointerEvent::Touch(TouchEvent::Ended { id, .. })
                if self.tracker.owns(GestureSource::Touch(*id)) =>
            {
                self.end_drag(now);
                true
            }
            PointerEvent::Touch(TouchEvent::Cancelled { id })
                if self.tracker.owns(GestureSource::Touch(*id)) =>
            {
                self.end_drag(now);
                true
            }
            _ => false,
        }
    }

    fn begin_drag(&mut self, source: GestureSource, x: f32, y: f32) {
        // Capture where the track is rendered before the declaration comes
        // off; clearing it snaps the render to the applied offset
        let rendered = self.surface.rendered_offset();
        if self.transition.force_instant() {
            self.surface.clear_transition();
        }
        self.position.begin_drag(rendered);
        self.surface.set_offset(rendered);
        self.tracker.begin(source, x, y);
        if let Some(next) = self.drag_phase.on_event(gesture_events::PRESS) {
            self.drag_phase = next;
        }
        tracing::debug!(?source, rendered, "drag started");
    }

    fn drag_move(&mut self, x: f32, y: f32) {
        let (dx, dy) = self.tracker.sample(x, y);
        self.position.apply_delta(dx, dy);
        self.surface.set_offset(self.position.current_offset);
        if let Some(next) = self.drag_phase.on_event(gesture_events::MOVE) {
            self.drag_phase = next;
        }
    }

    fn end_drag(&mut self, now: Instant) {
        let changed = match self.position.evaluate_commit() {
            Some(direction) => self.position.commit(direction),
            None => false,
        };
        self.settle(now);
        self.tracker.end();
        if let Some(next) = self.drag_phase.on_event(gesture_events::RELEASE) {
            self.drag_phase = next;
        }
        tracing::debug!(
            active = self.position.active_slide,
            committed = changed,
            "drag ended"
        );
        if changed {
            self.listeners.dispatch(&CarouselEvent::SlideChange {
                index: self.position.active_slide,
            });
        }
    }

    /// Snap the position state to neutral and animate the track there
    fn settle(&mut self, now: Instant) {
        let declaration = self.transition.begin_animated(now);
        self.surface.apply_transition(declaration);
        self.position.settle();
        self.surface.set_offset(self.position.current_offset);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Jump to a slide index with an animated settle
    ///
    /// An out-of-range index is rejected without touching any state.
    /// Navigating to the already-active slide settles the offset but fires
    /// no change event.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Result<()> {
        if index >= self.position.slide_count {
            return Err(CarouselError::SlideOutOfRange {
                index,
                slide_count: self.position.slide_count,
            });
        }
        self.surface.tick(now);
        let changed = index != self.position.active_slide;
        self.position.active_slide = index;
        self.settle(now);
        tracing::debug!(index, changed, "navigated");
        if changed {
            self.listeners
                .dispatch(&CarouselEvent::SlideChange { index });
        }
        Ok(())
    }

    /// Advance one slide; at the last slide this is a no-op
    pub fn next(&mut self, now: Instant) -> Result<()> {
        let current = self.position.active_slide;
        if current + 1 >= self.position.slide_count {
            tracing::debug!(current, "already at the last slide");
            return Ok(());
        }
        self.go_to(current + 1, now)
    }

    /// Go back one slide; at the first slide this is a no-op
    pub fn previous(&mut self, now: Instant) -> Result<()> {
        let current = self.position.active_slide;
        if current == 0 {
            tracing::debug!("already at the first slide");
            return Ok(());
        }
        self.go_to(current - 1, now)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Register a listener
    ///
    /// Slide change listeners fire once per committed change. The first
    /// position listener starts the per-frame watch; later ones share it.
    /// Raw kinds are forwarded to the surface untouched.
    pub fn on<F>(&mut self, kind: EventKind, listener: F)
    where
        F: Fn(&CarouselEvent) + 'static,
    {
        match kind {
            EventKind::Raw(name) => {
                self.surface.forward_raw_listener(&name, Rc::new(listener));
            }
            EventKind::SlidePositionChange => {
                self.listeners.on(EventKind::SlidePositionChange, listener);
                if !self.watch.is_running() {
                    self.watch_handle = Some(self.watch.start());
                }
            }
            EventKind::SlideChange => {
                self.listeners.on(EventKind::SlideChange, listener);
            }
        }
    }

    // =========================================================================
    // Frame advance
    // =========================================================================

    /// Advance to the frame at `now`
    ///
    /// Reverts an expired settle declaration and samples the position
    /// watch.
    pub fn tick(&mut self, now: Instant) {
        self.surface.tick(now);
        if self.transition.tick(now) {
            self.surface.clear_transition();
        }
        let offset = self.surface.rendered_offset() - self.position.neutral_offset();
        if let Some(reported) = self.watch.sample(offset) {
            self.listeners
                .dispatch(&CarouselEvent::SlidePositionChange { offset: reported });
        }
    }

    // =========================================================================
    // Layout changes
    // =========================================================================

    /// Re-measure the slide width from the surface and recalibrate
    pub fn handle_resize(&mut self, now: Instant) {
        let width = self.surface.measure_slide_width();
        self.recalc_slide_width(width, now);
    }

    /// Adopt a new slide width and settle onto the recomputed neutral
    ///
    /// An active drag stays active; its next move continues from the
    /// settled offset.
    pub fn recalc_slide_width(&mut self, width: f32, now: Instant) {
        self.surface.tick(now);
        self.position.recalc_slide_width(width);
        let declaration = self.transition.begin_animated(now);
        self.surface.apply_transition(declaration);
        self.surface.set_offset(self.position.current_offset);
        tracing::debug!(width, "slide width recalibrated");
    }
}
