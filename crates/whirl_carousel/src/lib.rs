//! Whirl Carousel
//!
//! Pointer-driven slide navigation over a host-owned track surface.
//!
//! # Features
//!
//! - **Drag To Navigate**: Mouse and single-touch drags move the track live;
//!   releasing past a width-relative threshold commits the slide change
//! - **FSM-Driven Gestures**: A small state machine keeps press, move, and
//!   release handling honest
//! - **Animated Settles**: Releases and jumps settle through a timed
//!   transition declaration the host track interpolates
//! - **Event Listeners**: Committed slide changes, deduplicated per-frame
//!   position reports, and raw passthrough to the surface
//! - **Registry**: Many carousels attached by container key, configured from
//!   a TOML manifest, ticked together
//!
//! # Example
//!
//! ```rust
//! use std::time::Instant;
//! use whirl_carousel::prelude::*;
//!
//! let mut carousel = Carousel::new(HeadlessTrack::new(3, 300.0));
//! let now = Instant::now();
//!
//! // Drag 50px leftward, past the default 10% threshold
//! carousel.handle_pointer(
//!     &PointerEvent::Mouse(MouseEvent::ButtonPressed {
//!         button: MouseButton::Left,
//!         x: 200.0,
//!         y: 40.0,
//!     }),
//!     now,
//! );
//! carousel.handle_pointer(&PointerEvent::Mouse(MouseEvent::Moved { x: 150.0, y: 40.0 }), now);
//! carousel.handle_pointer(
//!     &PointerEvent::Mouse(MouseEvent::ButtonReleased {
//!         button: MouseButton::Left,
//!         x: 150.0,
//!         y: 40.0,
//!     }),
//!     now,
//! );
//!
//! assert_eq!(carousel.active_slide(), 1);
//! ```

pub mod carousel;
pub mod config;
pub mod gesture;
pub mod pointer;
pub mod position;
pub mod registry;
pub mod track;
pub mod watch;

pub use carousel::Carousel;
pub use config::{attr_keys, parse_timing, CarouselConfig, DEFAULT_THRESHOLD_PERCENT};
pub use gesture::{gesture_events, DragPhase, StateTransitions};
pub use pointer::{GestureSource, PointerTracker};
pub use position::{Direction, PositionController};
pub use registry::{CarouselId, CarouselRegistry};
pub use track::HeadlessTrack;
pub use watch::{PositionWatch, WatchHandle};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::carousel::Carousel;
    pub use crate::config::CarouselConfig;
    pub use crate::registry::{CarouselId, CarouselRegistry};
    pub use crate::track::HeadlessTrack;
    // Pointer input
    pub use whirl_core::{MouseButton, MouseEvent, PointerEvent, TouchEvent};
    // Events and errors
    pub use whirl_core::{CarouselError, CarouselEvent, EventKind};
    // Track integration
    pub use whirl_core::{TrackSurface, TrackTransition};
    // Settle styling
    pub use whirl_animation::{Easing, TransitionStyle};
}
