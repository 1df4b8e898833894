//! Drag gesture state machine
//!
//! A carousel is either idle or being dragged. The transitions are driven
//! by the same event-code pattern widget state machines use: states map
//! `(state, event)` pairs to the next state and return `None` to stay put.

/// Events driving [`DragPhase`] transitions
pub mod gesture_events {
    /// Pointer pressed on the track
    pub const PRESS: u32 = 1;
    /// Pointer moved while pressed
    pub const MOVE: u32 = 2;
    /// Pointer released, touch ended or cancelled, or the pointer left
    /// the window
    pub const RELEASE: u32 = 3;
}

/// Map events to state transitions
pub trait StateTransitions: Sized {
    /// The state to enter for `event`, or `None` to stay in the current
    /// state
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Whether a pointer currently drives the track
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No active gesture; the track sits at (or settles toward) neutral
    #[default]
    Idle,
    /// A pointer is down and moves the track directly
    Dragging,
}

impl DragPhase {
    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging)
    }
}

impl StateTransitions for DragPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (DragPhase::Idle, gesture_events::PRESS) => Some(DragPhase::Dragging),

            // Moves keep the drag alive
            (DragPhase::Dragging, gesture_events::MOVE) => None,
            (DragPhase::Dragging, gesture_events::RELEASE) => Some(DragPhase::Idle),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_starts_a_drag() {
        let phase = DragPhase::Idle;
        assert_eq!(
            phase.on_event(gesture_events::PRESS),
            Some(DragPhase::Dragging)
        );
    }

    #[test]
    fn test_release_returns_to_idle() {
        let phase = DragPhase::Dragging;
        assert_eq!(
            phase.on_event(gesture_events::RELEASE),
            Some(DragPhase::Idle)
        );
    }

    #[test]
    fn test_moves_stay_dragging() {
        let phase = DragPhase::Dragging;
        assert_eq!(phase.on_event(gesture_events::MOVE), None);
        assert!(phase.is_dragging());
    }

    #[test]
    fn test_unmatched_events_are_ignored() {
        assert_eq!(DragPhase::Idle.on_event(gesture_events::RELEASE), None);
        assert_eq!(DragPhase::Idle.on_event(gesture_events::MOVE), None);
        assert_eq!(DragPhase::Dragging.on_event(gesture_events::PRESS), None);
    }
}
