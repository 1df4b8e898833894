//! Settle transition state machine
//!
//! A track is either following the pointer (no transition declaration, so
//! offsets apply instantly) or settling toward a neutral position under an
//! animated declaration. Every animated settle arms a revert deadline one
//! duration away; when it passes, the declaration comes off again so the
//! next drag starts with zero lag. Arming while a deadline is pending
//! replaces it, so only the latest settle controls the revert.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use whirl_core::TrackTransition;

use crate::easing::Easing;

/// Default settle duration
pub const DEFAULT_DURATION_MS: u64 = 600;

/// How an animated settle plays out
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionStyle {
    /// Time the settle takes
    pub duration: Duration,
    /// Timing curve shaping the motion
    pub easing: Easing,
}

impl TransitionStyle {
    /// Create a transition style
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Replace the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Replace the timing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Lower to the wire-level declaration hosts understand
    pub fn declaration(&self) -> TrackTransition {
        TrackTransition {
            duration: self.duration,
            curve: self.easing.control_points(),
        }
    }
}

impl Default for TransitionStyle {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            easing: Easing::ease_out(),
        }
    }
}

/// Whether offset changes animate or apply immediately
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// A settle declaration is installed; offset changes animate
    Animated,
    /// No declaration; the track follows applied offsets directly
    #[default]
    Instant,
}

/// Tracks the animated/instant phase and the revert deadline
#[derive(Clone, Debug)]
pub struct TransitionManager {
    style: TransitionStyle,
    phase: TransitionPhase,
    /// When the declaration comes off after the latest animated settle
    revert_deadline: Option<Instant>,
}

impl TransitionManager {
    /// Create a manager in the instant phase
    pub fn new(style: TransitionStyle) -> Self {
        Self {
            style,
            phase: TransitionPhase::Instant,
            revert_deadline: None,
        }
    }

    /// The configured settle style
    pub fn style(&self) -> &TransitionStyle {
        &self.style
    }

    /// The current phase
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Whether a revert deadline is pending
    pub fn has_pending_revert(&self) -> bool {
        self.revert_deadline.is_some()
    }

    /// Enter the animated phase for a settle starting at `now`
    ///
    /// Replaces any pending revert deadline. Returns the declaration the
    /// caller pushes to the surface.
    pub fn begin_animated(&mut self, now: Instant) -> TrackTransition {
        self.phase = TransitionPhase::Animated;
        self.revert_deadline = Some(now + self.style.duration);
        tracing::debug!(
            duration_ms = self.style.duration.as_millis() as u64,
            "settle transition armed"
        );
        self.style.declaration()
    }

    /// Enter the instant phase immediately (a drag is starting)
    ///
    /// Returns true when the phase actually changed, meaning the caller
    /// must clear the surface declaration. A pending revert deadline stays
    /// armed; firing in the instant phase does nothing.
    pub fn force_instant(&mut self) -> bool {
        if self.phase == TransitionPhase::Instant {
            return false;
        }
        self.phase = TransitionPhase::Instant;
        tracing::debug!("transition forced instant for drag");
        true
    }

    /// Advance to `now`
    ///
    /// Returns true when the revert deadline passed while still animated,
    /// meaning the caller must clear the surface declaration.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.revert_deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.revert_deadline = None;
        if self.phase == TransitionPhase::Animated {
            self.phase = TransitionPhase::Instant;
            tracing::debug!("settle transition reverted");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_600ms() -> TransitionStyle {
        TransitionStyle::default()
    }

    #[test]
    fn test_animated_settle_arms_revert() {
        let mut manager = TransitionManager::new(style_600ms());
        let t0 = Instant::now();

        let declaration = manager.begin_animated(t0);
        assert_eq!(manager.phase(), TransitionPhase::Animated);
        assert_eq!(declaration.duration, Duration::from_millis(600));
        assert_eq!(declaration.curve, Easing::ease_out().control_points());

        // One millisecond short of the deadline nothing happens
        assert!(!manager.tick(t0 + Duration::from_millis(599)));
        assert_eq!(manager.phase(), TransitionPhase::Animated);

        // At the deadline the phase reverts and the caller is told to clear
        assert!(manager.tick(t0 + Duration::from_millis(600)));
        assert_eq!(manager.phase(), TransitionPhase::Instant);
        assert!(!manager.has_pending_revert());
    }

    #[test]
    fn test_last_settle_wins() {
        let mut manager = TransitionManager::new(style_600ms());
        let t0 = Instant::now();

        manager.begin_animated(t0);
        manager.begin_animated(t0 + Duration::from_millis(300));

        // The first settle's deadline no longer applies
        assert!(!manager.tick(t0 + Duration::from_millis(600)));
        assert_eq!(manager.phase(), TransitionPhase::Animated);

        assert!(manager.tick(t0 + Duration::from_millis(900)));
        assert_eq!(manager.phase(), TransitionPhase::Instant);
    }

    #[test]
    fn test_drag_forces_instant_without_cancelling_deadline() {
        let mut manager = TransitionManager::new(style_600ms());
        let t0 = Instant::now();

        manager.begin_animated(t0);
        assert!(manager.force_instant());
        assert_eq!(manager.phase(), TransitionPhase::Instant);
        assert!(manager.has_pending_revert());

        // The stale deadline fires as a no-op
        assert!(!manager.tick(t0 + Duration::from_millis(600)));
        assert_eq!(manager.phase(), TransitionPhase::Instant);
        assert!(!manager.has_pending_revert());
    }

    #[test]
    fn test_force_instant_is_idempotent() {
        let mut manager = TransitionManager::new(style_600ms());
        assert!(!manager.force_instant());
    }

    #[test]
    fn test_tick_without_deadline_is_a_noop() {
        let mut manager = TransitionManager::new(style_600ms());
        assert!(!manager.tick(Instant::now()));
        assert_eq!(manager.phase(), TransitionPhase::Instant);
    }
}
