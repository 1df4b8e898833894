//! Whirl Core
//!
//! This crate provides the shared vocabulary for the Whirl carousel engine:
//!
//! - **Pointer Input**: Normalized mouse and touch events fed in by the host
//! - **Carousel Events**: Slide change and position change listeners with a
//!   raw passthrough for host-native events
//! - **Track Surface**: The trait a host implements so the engine can move
//!   the slide track and toggle settle transitions
//! - **Errors**: The carousel error taxonomy
//!
//! # Example
//!
//! ```rust
//! use whirl_core::events::{CarouselEvent, EventKind, EventListeners};
//!
//! let mut listeners = EventListeners::new();
//! listeners.on(EventKind::SlideChange, |event| {
//!     if let CarouselEvent::SlideChange { index } = event {
//!         println!("now on slide {index}");
//!     }
//! });
//!
//! listeners.dispatch(&CarouselEvent::SlideChange { index: 1 });
//! ```

pub mod error;
pub mod events;
pub mod input;
pub mod surface;

pub use error::{CarouselError, Result};
pub use events::{CarouselEvent, EventCallback, EventKind, EventListeners};
pub use input::{MouseButton, MouseEvent, PointerEvent, TouchEvent};
pub use surface::{TrackSurface, TrackTransition};
