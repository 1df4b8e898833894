//! Carousel configuration
//!
//! A carousel is configured with a commit threshold (percentage of slide
//! width a drag must exceed) and the settle transition style. Hosts that
//! discover carousels from markup-like attribute maps can parse them with
//! [`CarouselConfig::from_attrs`]; missing or invalid values fall back to
//! the defaults with a warning.

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use whirl_animation::{Easing, TransitionStyle};

/// Default commit threshold as a percentage of slide width
pub const DEFAULT_THRESHOLD_PERCENT: f32 = 10.0;

/// Attribute keys recognized by [`CarouselConfig::from_attrs`]
pub mod attr_keys {
    /// Commit threshold as a percentage of slide width
    pub const THRESHOLD: &str = "threshold";
    /// Settle duration in milliseconds
    pub const DURATION: &str = "duration";
    /// Settle timing curve (`linear`, `ease-out`, `ease-in`, `ease-in-out`,
    /// or `cubic-bezier(x1, y1, x2, y2)`)
    pub const TIMING: &str = "timing";
}

/// Configuration for carousel behavior
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Percentage of slide width a drag must exceed to commit a slide
    /// change (default: 10)
    pub threshold_percent: f32,
    /// Settle animation style
    pub transition: TransitionStyle,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            transition: TransitionStyle::default(),
        }
    }
}

impl CarouselConfig {
    /// Set the commit threshold percentage (negative values clamp to 0)
    pub fn with_threshold_percent(mut self, percent: f32) -> Self {
        self.threshold_percent = percent.max(0.0);
        self
    }

    /// Replace the settle transition style
    pub fn with_transition(mut self, transition: TransitionStyle) -> Self {
        self.transition = transition;
        self
    }

    /// Set the settle duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.transition.duration = duration;
        self
    }

    /// Set the settle timing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.transition.easing = easing;
        self
    }

    /// Build a configuration from a host attribute map
    ///
    /// Recognized keys are listed in [`attr_keys`]; anything else is
    /// ignored. A value that fails to parse logs a warning and leaves the
    /// default for that key in place.
    pub fn from_attrs(attrs: &FxHashMap<String, String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = attrs.get(attr_keys::THRESHOLD) {
            match value.trim().parse::<f32>() {
                Ok(percent) if percent >= 0.0 => config.threshold_percent = percent,
                _ => {
                    tracing::warn!(value, "invalid threshold attribute, using default");
                }
            }
        }

        if let Some(value) = attrs.get(attr_keys::DURATION) {
            match value.trim().parse::<u64>() {
                Ok(ms) => config.transition.duration = Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(value, "invalid duration attribute, using default");
                }
            }
        }

        if let Some(value) = attrs.get(attr_keys::TIMING) {
            match parse_timing(value) {
                Some(easing) => config.transition.easing = easing,
                None => {
                    tracing::warn!(value, "invalid timing attribute, using default");
                }
            }
        }

        config
    }
}

/// Parse a timing curve declaration
///
/// Accepts the keyword forms `linear`, `ease-out`, `ease-in`, and
/// `ease-in-out`, plus `cubic-bezier(x1, y1, x2, y2)`.
pub fn parse_timing(value: &str) -> Option<Easing> {
    let value = value.trim();
    match value {
        "linear" => return Some(Easing::Linear),
        "ease-out" => return Some(Easing::ease_out()),
        "ease-in" => return Some(Easing::ease_in()),
        "ease-in-out" => return Some(Easing::ease_in_out()),
        _ => {}
    }

    let args = value
        .strip_prefix("cubic-bezier(")
        .and_then(|rest| rest.strip_suffix(')'))?;
    let mut points = [0.0_f32; 4];
    let mut count = 0;
    for part in args.split(',') {
        if count == 4 {
            return None;
        }
        points[count] = part.trim().parse::<f32>().ok()?;
        count += 1;
    }
    if count != 4 {
        return None;
    }
    let [x1, y1, x2, y2] = points;
    Some(Easing::cubic_bezier(x1, y1, x2, y2))
}
