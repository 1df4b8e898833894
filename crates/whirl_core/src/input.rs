//! Pointer event types for mouse and touch input
//!
//! Hosts translate their native events into [`PointerEvent`] values and feed
//! them to the carousel. Coordinates are absolute window coordinates; the
//! carousel derives its own per-sample deltas.

/// Pointer events
#[derive(Clone, Debug)]
pub enum PointerEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Touch event (mobile/touchscreen)
    Touch(TouchEvent),
}

impl PointerEvent {
    /// Get the position carried by this event, if any
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            PointerEvent::Mouse(e) => e.position(),
            PointerEvent::Touch(e) => e.position(),
        }
    }
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Debug)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// X position when pressed
        x: f32,
        /// Y position when pressed
        y: f32,
    },
    /// Mouse button released
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// X position when released
        x: f32,
        /// Y position when released
        y: f32,
    },
    /// Mouse left the tracked element
    Exited {
        /// True when the pointer left the window entirely rather than
        /// moving onto a neighboring element
        left_window: bool,
    },
}

impl MouseEvent {
    /// Get the position carried by this event (None for Exited)
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            MouseEvent::Moved { x, y } => Some((*x, *y)),
            MouseEvent::ButtonPressed { x, y, .. } => Some((*x, *y)),
            MouseEvent::ButtonReleased { x, y, .. } => Some((*x, *y)),
            MouseEvent::Exited { .. } => None,
        }
    }
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Touch Events
// ============================================================================

/// Touch events for touchscreens
#[derive(Clone, Debug)]
pub enum TouchEvent {
    /// A touch started
    Started {
        /// Unique identifier for this touch
        id: u64,
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// A touch moved
    Moved {
        /// Unique identifier for this touch
        id: u64,
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// A touch ended
    Ended {
        /// Unique identifier for this touch
        id: u64,
        /// X position when ended
        x: f32,
        /// Y position when ended
        y: f32,
    },
    /// A touch was cancelled (e.g., by system gesture)
    Cancelled {
        /// Unique identifier for this touch
        id: u64,
    },
}

impl TouchEvent {
    /// Get the touch ID
    pub fn id(&self) -> u64 {
        match self {
            TouchEvent::Started { id, .. } => *id,
            TouchEvent::Moved { id, .. } => *id,
            TouchEvent::Ended { id, .. } => *id,
            TouchEvent::Cancelled { id } => *id,
        }
    }

    /// Get the position (returns None for Cancelled)
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            TouchEvent::Started { x, y, .. } => Some((*x, *y)),
            TouchEvent::Moved { x, y, .. } => Some((*x, *y)),
            TouchEvent::Ended { x, y, .. } => Some((*x, *y)),
            TouchEvent::Cancelled { .. } => None,
        }
    }
}
