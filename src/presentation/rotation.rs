// SPDX-License-Identifier: MPL-2.0
//! Visibility-driven rotation animation.
//!
//! The animator is a small timed state machine. Showing the image snaps the
//! angle to 0° and starts an eased sweep to a full turn; hiding it cancels any
//! sweep in flight and snaps back to 0° without animating. Progress is driven
//! by an external clock through [`RotationAnimator::tick`], so the machine
//! never owns a timer and is trivially testable.
//!
//! # Example
//!
//! ```
//! use iced_showcase::presentation::RotationAnimator;
//! use std::time::{Duration, Instant};
//!
//! let mut animator = RotationAnimator::default();
//! let start = Instant::now();
//!
//! animator.set_visible(true, start);
//! assert!(animator.is_animating());
//!
//! animator.tick(start + Duration::from_millis(500));
//! assert!(animator.current_angle() > 0.0);
//!
//! // Completed sweeps are normalised back to 0°.
//! animator.tick(start + Duration::from_secs(2));
//! assert_eq!(animator.current_angle(), 0.0);
//! assert!(!animator.is_animating());
//! ```

use super::easing::Easing;
use crate::config::DEFAULT_ROTATION_DURATION_MS;
use std::fmt;
use std::time::{Duration, Instant};

/// One full turn, the target of every sweep.
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Observable snapshot of the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Current angle, always in `[0, 360)`.
    pub angle_degrees: f32,
    pub is_animating: bool,
}

impl AnimationState {
    pub const IDLE: Self = Self {
        angle_degrees: 0.0,
        is_animating: false,
    };

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        self.angle_degrees.to_radians()
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::IDLE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Animating {
        started_at: Instant,
        from: f32,
        to: f32,
        duration: Duration,
    },
}

/// Handle returned by [`RotationAnimator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(AnimationState)>;

/// Rotation controller owned by exactly one host screen.
pub struct RotationAnimator {
    visible: bool,
    phase: Phase,
    angle: f32,
    duration: Duration,
    easing: Easing,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
}

impl fmt::Debug for RotationAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationAnimator")
            .field("visible", &self.visible)
            .field("phase", &self.phase)
            .field("angle", &self.angle)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for RotationAnimator {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_ROTATION_DURATION_MS),
            Easing::default(),
        )
    }
}

impl RotationAnimator {
    /// Creates an idle, hidden animator at 0°.
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            visible: false,
            phase: Phase::Idle,
            angle: 0.0,
            duration,
            easing,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Applies a change of the host's visibility flag.
    ///
    /// Repeating the current value is a no-op. Any other call cancels the
    /// sweep in flight before applying the new state, so at most one rotation
    /// ever runs.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        self.angle = 0.0;

        if visible && !self.duration.is_zero() {
            self.phase = Phase::Animating {
                started_at: now,
                from: 0.0,
                to: FULL_TURN_DEGREES,
                duration: self.duration,
            };
            tracing::debug!(duration_ms = self.duration.as_millis() as u64, "rotation started");
        } else {
            self.phase = Phase::Idle;
        }

        self.notify();
    }

    /// Advances the sweep in flight to `now` and returns the new state.
    ///
    /// Idle animators ignore ticks. A tick earlier than the start time is
    /// treated as zero progress.
    pub fn tick(&mut self, now: Instant) -> AnimationState {
        let Phase::Animating {
            started_at,
            from,
            to,
            duration,
        } = self.phase
        else {
            return self.state();
        };

        let elapsed = now.saturating_duration_since(started_at);
        let progress = elapsed.as_secs_f32() / duration.as_secs_f32();

        if progress >= 1.0 {
            self.phase = Phase::Idle;
            self.angle = normalize(to);
            tracing::debug!("rotation finished");
        } else {
            let eased = self.easing.apply(progress);
            self.angle = normalize(from + (to - from) * eased);
        }

        self.notify();
        self.state()
    }

    /// Latest angle in degrees, in `[0, 360)`.
    #[must_use]
    pub fn current_angle(&self) -> f32 {
        self.angle
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        AnimationState {
            angle_degrees: self.angle,
            is_animating: self.is_animating(),
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Registers a callback invoked after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(AnimationState) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let state = self.state();
        for (_, observer) in &mut self.observers {
            observer(state);
        }
    }
}

/// Folds an angle into `[0, 360)`.
fn normalize(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360 for values just below it
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn linear(ms: u64) -> RotationAnimator {
        RotationAnimator::new(Duration::from_millis(ms), Easing::Linear)
    }

    #[test]
    fn starts_idle_at_zero() {
        let animator = RotationAnimator::default();
        assert_eq!(animator.state(), AnimationState::IDLE);
        assert!(!animator.is_visible());
        assert_eq!(animator.duration(), Duration::from_millis(1000));
    }

    #[test]
    fn show_starts_sweep_from_zero() {
        let mut animator = linear(1000);
        let start = Instant::now();
        animator.set_visible(true, start);

        assert!(animator.is_animating());
        assert_eq!(animator.current_angle(), 0.0);

        let state = animator.tick(start + Duration::from_millis(250));
        assert!((state.angle_degrees - 90.0).abs() < 0.5);
        assert!(state.is_animating);
    }

    #[test]
    fn completed_sweep_normalizes_to_zero() {
        let mut animator = linear(1000);
        let start = Instant::now();
        animator.set_visible(true, start);

        let state = animator.tick(start + Duration::from_millis(1000));
        assert_eq!(state, AnimationState::IDLE);
        assert!(animator.is_visible());
    }

    #[test]
    fn hide_mid_sweep_snaps_to_zero() {
        let mut animator = linear(1000);
        let start = Instant::now();
        animator.set_visible(true, start);
        animator.tick(start + Duration::from_millis(400));
        assert!(animator.current_angle() > 0.0);

        animator.set_visible(false, start + Duration::from_millis(450));
        assert_eq!(animator.state(), AnimationState::IDLE);

        // Late ticks from the cancelled sweep do nothing.
        animator.tick(start + Duration::from_millis(700));
        assert_eq!(animator.state(), AnimationState::IDLE);
    }

    #[test]
    fn show_then_hide_immediately_ends_at_zero() {
        let mut animator = RotationAnimator::default();
        let start = Instant::now();
        animator.set_visible(true, start);
        animator.set_visible(false, start);
        assert_eq!(animator.current_angle(), 0.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn repeated_show_does_not_double_advance() {
        let start = Instant::now();
        let later = start + Duration::from_millis(300);

        let mut once = linear(1000);
        once.set_visible(true, start);
        once.tick(later);

        let mut twice = linear(1000);
        twice.set_visible(true, start);
        twice.set_visible(true, start + Duration::from_millis(100));
        twice.tick(later);

        assert_eq!(once.state(), twice.state());

        once.tick(start + Duration::from_secs(5));
        twice.tick(start + Duration::from_secs(5));
        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn reshow_after_hide_restarts_from_zero() {
        let mut animator = linear(1000);
        let start = Instant::now();
        animator.set_visible(true, start);
        animator.tick(start + Duration::from_millis(800));
        animator.set_visible(false, start + Duration::from_millis(850));

        let restart = start + Duration::from_millis(900);
        animator.set_visible(true, restart);
        assert_eq!(animator.current_angle(), 0.0);
        assert!(animator.is_animating());

        let state = animator.tick(restart + Duration::from_millis(500));
        assert!((state.angle_degrees - 180.0).abs() < 0.5);
    }

    #[test]
    fn redundant_hide_is_noop() {
        let mut animator = RotationAnimator::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        animator.subscribe(move |_| *counter.borrow_mut() += 1);

        animator.set_visible(false, Instant::now());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn angle_stays_below_full_turn() {
        let mut animator = RotationAnimator::default();
        let start = Instant::now();
        animator.set_visible(true, start);
        for ms in (0..=1100).step_by(7) {
            let state = animator.tick(start + Duration::from_millis(ms));
            assert!((0.0..FULL_TURN_DEGREES).contains(&state.angle_degrees));
        }
    }

    #[test]
    fn eased_angle_is_monotonic_during_sweep() {
        let mut animator = RotationAnimator::default();
        let start = Instant::now();
        animator.set_visible(true, start);
        let mut previous = 0.0;
        for ms in (0..1000).step_by(16) {
            let angle = animator.tick(start + Duration::from_millis(ms)).angle_degrees;
            assert!(angle + 1e-3 >= previous);
            previous = angle;
        }
    }

    #[test]
    fn tick_before_start_is_zero_progress() {
        let mut animator = linear(1000);
        let start = Instant::now() + Duration::from_secs(1);
        animator.set_visible(true, start);
        let state = animator.tick(start - Duration::from_millis(500));
        assert_eq!(state.angle_degrees, 0.0);
        assert!(state.is_animating);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut animator = linear(0);
        animator.set_visible(true, Instant::now());
        assert!(animator.is_visible());
        assert_eq!(animator.state(), AnimationState::IDLE);
    }

    #[test]
    fn observers_receive_every_change() {
        let mut animator = linear(1000);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        animator.subscribe(move |state| sink.borrow_mut().push(state));

        let start = Instant::now();
        animator.set_visible(true, start);
        animator.tick(start + Duration::from_millis(500));
        animator.set_visible(false, start + Duration::from_millis(600));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].is_animating);
        assert!((seen[1].angle_degrees - 180.0).abs() < 0.5);
        assert_eq!(seen[2], AnimationState::IDLE);
    }

    #[test]
    fn unsubscribed_observers_are_silent() {
        let mut animator = RotationAnimator::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = animator.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(animator.unsubscribe(id));
        assert!(!animator.unsubscribe(id));

        animator.set_visible(true, Instant::now());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn radians_conversion() {
        let state = AnimationState {
            angle_degrees: 180.0,
            is_animating: true,
        };
        assert!((state.radians() - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize(360.0), 0.0);
        assert_eq!(normalize(720.0), 0.0);
        assert!((normalize(370.0) - 10.0).abs() < 1e-4);
        assert!((normalize(-90.0) - 270.0).abs() < 1e-4);
    }
}
