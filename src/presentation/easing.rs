// SPDX-License-Identifier: MPL-2.0
//! Monotonic easing curves for the rotation animation.

use serde::{Deserialize, Serialize};

/// Newton iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f32 = 1e-6;

/// Easing curve applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Material "standard" curve: fast start, long gentle landing.
    #[default]
    FastOutSlowIn,
}

impl Easing {
    /// Maps linear progress to eased progress.
    ///
    /// `t` is clamped to `[0, 1]`; the result is monotonic in `t` with
    /// `apply(0) == 0` and `apply(1) == 1`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::FastOutSlowIn => CubicBezier::FAST_OUT_SLOW_IN.solve(t),
        }
    }
}

/// CSS-style cubic Bézier timing function anchored at (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const FAST_OUT_SLOW_IN: Self = Self::new(0.4, 0.0, 0.2, 1.0);

    /// Control point x coordinates must lie in `[0, 1]` for the curve to be a
    /// function of time.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns the eased value for input progress `x` in `[0, 1]`.
    #[must_use]
    pub fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.parameter_for_x(x);
        sample(self.y1, self.y2, t)
    }

    fn parameter_for_x(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = sample(self.x1, self.x2, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = derivative(self.x1, self.x2, t);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Newton stalled on a flat section; bisection always converges.
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(self.x1, self.x2, t);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }
}

/// One coordinate of the Bézier curve at parameter `t`.
fn sample(p1: f32, p2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::FastOutSlowIn] {
            assert!((easing.apply(0.0) - 0.0).abs() < f32::EPSILON);
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert!((Easing::FastOutSlowIn.apply(-3.0)).abs() < f32::EPSILON);
        assert!((Easing::FastOutSlowIn.apply(7.5) - 1.0).abs() < f32::EPSILON);
        assert!((Easing::Linear.apply(f32::NAN)).abs() < f32::EPSILON);
    }

    #[test]
    fn fast_out_slow_in_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=200 {
            let value = Easing::FastOutSlowIn.apply(step as f32 / 200.0);
            assert!(value + 1e-4 >= previous, "dropped at step {step}");
            previous = value;
        }
    }

    #[test]
    fn fast_out_slow_in_leads_linear_at_midpoint() {
        // The curve front-loads motion.
        assert!(Easing::FastOutSlowIn.apply(0.5) > 0.7);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let curve = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for step in 1..10 {
            let x = step as f32 / 10.0;
            assert!((curve.solve(x) - x).abs() < 1e-3);
        }
    }

    #[test]
    fn easing_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: Easing,
        }
        let parsed: Wrapper = toml::from_str("easing = \"fast-out-slow-in\"").unwrap();
        assert_eq!(parsed.easing, Easing::FastOutSlowIn);
        let parsed: Wrapper = toml::from_str("easing = \"linear\"").unwrap();
        assert_eq!(parsed.easing, Easing::Linear);
    }
}
