//! Whirl Animation
//!
//! Easing curves and the settle transition state machine.
//!
//! # Features
//!
//! - **Easing**: Cubic bezier timing curves with Newton/bisection evaluation
//! - **Transition Styles**: Duration plus curve, lowering to the declaration
//!   hosts understand
//! - **Transition Manager**: Animated/instant phase tracking with a
//!   replaceable revert deadline, so the track never keeps a stale settle
//!   declaration installed

pub mod easing;
pub mod transition;

pub use easing::Easing;
pub use transition::{
    TransitionManager, TransitionPhase, TransitionStyle, DEFAULT_DURATION_MS,
};
