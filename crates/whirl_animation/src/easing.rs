//! Easing curves for settle transitions
//!
//! Cubic bezier timing functions in the same form hosts declare them.
//! Evaluation solves the curve parameter for a given time fraction with
//! Newton iteration, falling back to bisection when the slope degenerates.

use serde::{Deserialize, Serialize};

/// A timing curve mapping elapsed-time fraction to progress fraction
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant-rate motion
    Linear,
    /// Cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Create a cubic bezier curve
    ///
    /// The x control values are clamped to [0, 1] so the curve stays a
    /// function of time; y values may overshoot.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Easing::CubicBezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2)
    }

    /// A fast start that glides to a stop (the default settle curve)
    pub fn ease_out() -> Self {
        Easing::CubicBezier(0.23, 1.0, 0.32, 1.0)
    }

    /// A gentle start and end with a quicker middle
    pub fn ease_in_out() -> Self {
        Easing::CubicBezier(0.42, 0.0, 0.58, 1.0)
    }

    /// A slow start that accelerates away
    pub fn ease_in() -> Self {
        Easing::CubicBezier(0.42, 0.0, 1.0, 1.0)
    }

    /// The control points in declaration order (x1, y1, x2, y2)
    ///
    /// `Linear` lowers to the identity bezier.
    pub fn control_points(&self) -> [f32; 4] {
        match self {
            Easing::Linear => [0.0, 0.0, 1.0, 1.0],
            Easing::CubicBezier(x1, y1, x2, y2) => [*x1, *y1, *x2, *y2],
        }
    }

    /// Rebuild a curve from declaration control points
    pub fn from_control_points(points: [f32; 4]) -> Self {
        if points == [0.0, 0.0, 1.0, 1.0] {
            Easing::Linear
        } else {
            let [x1, y1, x2, y2] = points;
            Easing::cubic_bezier(x1, y1, x2, y2)
        }
    }

    /// Evaluate the curve at time fraction `t` in [0, 1]
    ///
    /// Inputs outside the range are clamped. Returns the progress fraction;
    /// for curves with y overshoot the result may leave [0, 1].
    pub fn eval(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                let s = solve_curve_x(*x1, *x2, t);
                sample_axis(*y1, *y2, s)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::ease_out()
    }
}

/// Evaluate one bezier axis at parameter `s`, endpoints pinned at 0 and 1
fn sample_axis(p1: f32, p2: f32, s: f32) -> f32 {
    // Polynomial coefficients from the control values
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

/// Derivative of one bezier axis at parameter `s`
fn sample_axis_derivative(p1: f32, p2: f32, s: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}

/// Find the parameter `s` where the curve's x coordinate equals `x`
fn solve_curve_x(x1: f32, x2: f32, x: f32) -> f32 {
    const NEWTON_ITERATIONS: usize = 8;
    const NEWTON_MIN_SLOPE: f32 = 1e-6;
    const BISECTION_PRECISION: f32 = 1e-6;
    const BISECTION_MAX_ITERATIONS: usize = 32;

    // Newton converges in a few steps on well-behaved curves
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = sample_axis(x1, x2, s) - x;
        if error.abs() < BISECTION_PRECISION {
            return s;
        }
        let slope = sample_axis_derivative(x1, x2, s);
        if slope.abs() < NEWTON_MIN_SLOPE {
            break;
        }
        s -= error / slope;
    }

    // Flat-slope regions (control x values at the extremes) need bisection
    let mut lo = 0.0_f32;
    let mut hi = 1.0_f32;
    s = s.clamp(lo, hi);
    for _ in 0..BISECTION_MAX_ITERATIONS {
        if (hi - lo) < BISECTION_PRECISION {
            break;
        }
        s = 0.5 * (lo + hi);
        if sample_axis(x1, x2, s) < x {
            lo = s;
        } else {
            hi = s;
        }
    }
    s
}
