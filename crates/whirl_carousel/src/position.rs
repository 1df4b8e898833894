//! Track position state and the commit decision
//!
//! The position controller owns the numbers behind a carousel: the offset
//! currently applied to the track, the movement accumulated over the
//! active drag, and the active slide index. The neutral offset for slide
//! `i` is always `-i * slide_width`, recomputed on demand so it can never
//! drift, and every settle snaps the applied offset back onto it.

/// Which neighbor a committed drag moves to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward the previous slide (track displaced rightward)
    Previous,
    /// Toward the next slide (track displaced leftward)
    Next,
}

/// Offset, accumulator, and index state for one carousel
#[derive(Clone, Copy, Debug)]
pub struct PositionController {
    /// Offset currently applied to the track
    pub current_offset: f32,
    /// Signed x movement accumulated since the drag began
    pub accumulated_x: f32,
    /// Signed y movement accumulated since the drag began (bookkeeping
    /// only, never consulted by the commit decision)
    pub accumulated_y: f32,
    /// Width of one slide panel
    pub slide_width: f32,
    /// The settled slide index
    pub active_slide: usize,
    /// Number of slide panels
    pub slide_count: usize,
    /// Commit threshold as a percentage of slide width
    pub threshold_percent: f32,
}

impl PositionController {
    /// Create a controller settled on slide 0
    pub fn new(slide_count: usize, slide_width: f32, threshold_percent: f32) -> Self {
        Self {
            current_offset: 0.0,
            accumulated_x: 0.0,
            accumulated_y: 0.0,
            slide_width,
            active_slide: 0,
            slide_count,
            threshold_percent,
        }
    }

    /// The offset where the active slide sits flush
    pub fn neutral_offset(&self) -> f32 {
        -(self.active_slide as f32) * self.slide_width
    }

    /// The commit threshold in pixels
    pub fn threshold_px(&self) -> f32 {
        self.slide_width * self.threshold_percent / 100.0
    }

    /// How far the applied offset has diverged from neutral
    pub fn offset_from_neutral(&self) -> f32 {
        self.current_offset - self.neutral_offset()
    }

    /// Adopt the track's rendered offset as a drag begins
    ///
    /// A drag that starts mid-animation continues from where the track is
    /// actually rendered, not from where the settle was heading.
    pub fn begin_drag(&mut self, rendered_offset: f32) {
        self.current_offset = rendered_offset;
        self.accumulated_x = 0.0;
        self.accumulated_y = 0.0;
    }

    /// Apply one pointer movement sample
    pub fn apply_delta(&mut self, dx: f32, dy: f32) {
        self.current_offset += dx;
        self.accumulated_x += dx;
        self.accumulated_y += dy;
    }

    /// Decide whether the finished drag commits a slide change
    ///
    /// Commits only when the accumulated drag distance strictly exceeds
    /// the threshold and the net displacement from neutral reaches it.
    /// Positive displacement points at the previous slide, negative at
    /// the next.
    pub fn evaluate_commit(&self) -> Option<Direction> {
        let threshold = self.threshold_px();
        if self.accumulated_x.abs() <= threshold {
            return None;
        }
        let displacement = self.offset_from_neutral();
        if displacement.abs() < threshold {
            return None;
        }
        Some(if displacement > 0.0 {
            Direction::Previous
        } else {
            Direction::Next
        })
    }

    /// Move the active index one slide in `direction`, clamped to the
    /// index space
    ///
    /// Returns true when the index actually changed.
    pub fn commit(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Previous => self.active_slide.saturating_sub(1),
            Direction::Next => (self.active_slide + 1).min(self.slide_count.saturating_sub(1)),
        };
        let changed = target != self.active_slide;
        self.active_slide = target;
        changed
    }

    /// Snap the applied offset back to neutral and reset the accumulators
    pub fn settle(&mut self) {
        self.current_offset = self.neutral_offset();
        self.accumulated_x = 0.0;
        self.accumulated_y = 0.0;
    }

    /// Adopt a new slide width and settle
    ///
    /// A stale offset after a layout change would leave the track parked
    /// between slides, so recalibration always settles.
    pub fn recalc_slide_width(&mut self, new_width: f32) {
        self.slide_width = new_width;
        self.settle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_300x4() -> PositionController {
        PositionController::new(4, 300.0, 10.0)
    }

    #[test]
    fn test_neutral_offset_tracks_index() {
        let mut position = controller_300x4();
        assert_eq!(position.neutral_offset(), 0.0);
        position.active_slide = 2;
        assert_eq!(position.neutral_offset(), -600.0);
    }

    #[test]
    fn test_threshold_from_percent() {
        let position = controller_300x4();
        assert_eq!(position.threshold_px(), 30.0);
    }

    #[test]
    fn test_drag_past_threshold_commits_next() {
        let mut position = controller_300x4();
        position.begin_drag(0.0);
        position.apply_delta(-50.0, 0.0);

        assert_eq!(position.evaluate_commit(), Some(Direction::Next));
        assert!(position.commit(Direction::Next));
        assert_eq!(position.active_slide, 1);

        position.settle();
        assert_eq!(position.current_offset, -300.0);
        assert_eq!(position.accumulated_x, 0.0);
    }

    #[test]
    fn test_short_drag_rejects() {
        let mut position = controller_300x4();
        position.begin_drag(0.0);
        position.apply_delta(-20.0, 0.0);

        assert_eq!(position.evaluate_commit(), None);
        position.settle();
        assert_eq!(position.current_offset, 0.0);
    }

    #[test]
    fn test_exact_threshold_distance_rejects() {
        // The accumulated-distance condition is strict
        let mut position = controller_300x4();
        position.begin_drag(0.0);
        position.apply_delta(-30.0, 0.0);
        assert_eq!(position.evaluate_commit(), None);
    }

    #[test]
    fn test_wander_back_near_neutral_rejects() {
        // Lots of accumulated movement but the track ended close to where
        // it started
        let mut position = controller_300x4();
        position.begin_drag(0.0);
        position.apply_delta(-100.0, 0.0);
        position.apply_delta(110.0, 0.0);
        position.apply_delta(-15.0, 0.0);

        assert!(position.accumulated_x.abs() > position.threshold_px());
        assert!(position.offset_from_neutral().abs() < position.threshold_px());
        assert_eq!(position.evaluate_commit(), None);
    }

    #[test]
    fn test_inherited_displacement_alone_rejects() {
        // A drag adopted mid-animation starts far from neutral; without
        // enough new movement of its own it must not commit
        let mut position = controller_300x4();
        position.active_slide = 1;
        position.begin_drag(-150.0);
        position.apply_delta(10.0, 0.0);

        assert!(position.offset_from_neutral().abs() >= position.threshold_px());
        assert_eq!(position.evaluate_commit(), None);
    }

    #[test]
    fn test_positive_displacement_commits_previous() {
        let mut position = controller_300x4();
        position.active_slide = 2;
        position.begin_drag(position.neutral_offset());
        position.apply_delta(45.0, 0.0);

        assert_eq!(position.evaluate_commit(), Some(Direction::Previous));
        assert!(position.commit(Direction::Previous));
        assert_eq!(position.active_slide, 1);
    }

    #[test]
    fn test_commit_clamps_at_bounds() {
        let mut position = controller_300x4();
        assert!(!position.commit(Direction::Previous));
        assert_eq!(position.active_slide, 0);

        position.active_slide = 3;
        assert!(!position.commit(Direction::Next));
        assert_eq!(position.active_slide, 3);
    }

    #[test]
    fn test_vertical_movement_never_commits() {
        let mut position = controller_300x4();
        position.begin_drag(0.0);
        position.apply_delta(0.0, -80.0);

        assert_eq!(position.accumulated_y, -80.0);
        assert_eq!(position.current_offset, 0.0);
        assert_eq!(position.evaluate_commit(), None);
    }

    #[test]
    fn test_recalc_slide_width_settles() {
        let mut position = controller_300x4();
        position.active_slide = 2;
        position.current_offset = -640.0;

        position.recalc_slide_width(500.0);
        assert_eq!(position.slide_width, 500.0);
        assert_eq!(position.current_offset, -1000.0);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut position = PositionController::new(0, 0.0, 10.0);
        assert!(!position.commit(Direction::Next));
        assert!(!position.commit(Direction::Previous));
        assert_eq!(position.active_slide, 0);
        assert_eq!(position.neutral_offset(), 0.0);
    }
}
