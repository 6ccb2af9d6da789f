// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture tracking and dismissal rules.
//!
//! A drag is sampled while the pointer button is held; the decision to
//! dismiss happens only at release, from the total translation plus the
//! release velocity along the vertical axis. Thresholds are asymmetric:
//! top-anchored toasts dismiss on an upward fling, bottom-anchored ones on a
//! downward fling.

use crate::toast::Anchor;
use iced::{Point, Vector};
use std::time::Instant;

/// Combined translation + velocity a release must exceed to dismiss.
pub const DISMISS_THRESHOLD: f32 = 100.0;

/// Accumulates pointer samples for an in-flight drag gesture.
///
/// Translation is measured from the first sample; release velocity comes
/// from the last two samples, in pixels per second.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<Point>,
    previous: Option<(Point, Instant)>,
    last: Option<(Point, Instant)>,
}

impl SwipeTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer sample.
    pub fn record(&mut self, position: Point, at: Instant) {
        if self.origin.is_none() {
            self.origin = Some(position);
        }
        self.previous = self.last.take();
        self.last = Some((position, at));
    }

    /// Total translation since the drag began.
    #[must_use]
    pub fn translation(&self) -> Vector {
        match (self.origin, self.last) {
            (Some(origin), Some((last, _))) => last - origin,
            _ => Vector::ZERO,
        }
    }

    /// Instantaneous velocity at the latest sample, in pixels per second.
    #[must_use]
    pub fn velocity(&self) -> Vector {
        let (Some((previous, previous_at)), Some((last, last_at))) = (self.previous, self.last)
        else {
            return Vector::ZERO;
        };

        let dt = last_at.duration_since(previous_at).as_secs_f32();
        if dt <= 0.0 {
            return Vector::ZERO;
        }

        let delta = last - previous;
        Vector::new(delta.x / dt, delta.y / dt)
    }
}

/// Decides whether a released drag dismisses the toast.
///
/// The release "throw" is `translation_y + velocity_y`; a bottom-anchored
/// toast needs a throw greater than [`DISMISS_THRESHOLD`] downward, a
/// top-anchored one the mirror image upward.
#[must_use]
pub fn should_dismiss(anchor: Anchor, translation_y: f32, velocity_y: f32) -> bool {
    let throw = translation_y + velocity_y;
    match anchor {
        Anchor::Bottom => throw > DISMISS_THRESHOLD,
        Anchor::Top => throw < -DISMISS_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn bottom_anchor_dismisses_past_threshold() {
        // 80 + 30 = 110 > 100
        assert!(should_dismiss(Anchor::Bottom, 80.0, 30.0));
        // 50 + 30 = 80, stays
        assert!(!should_dismiss(Anchor::Bottom, 50.0, 30.0));
    }

    #[test]
    fn top_anchor_mirrors_the_threshold() {
        assert!(should_dismiss(Anchor::Top, -80.0, -30.0));
        assert!(!should_dismiss(Anchor::Top, -50.0, -30.0));
    }

    #[test]
    fn wrong_direction_never_dismisses() {
        assert!(!should_dismiss(Anchor::Top, 300.0, 500.0));
        assert!(!should_dismiss(Anchor::Bottom, -300.0, -500.0));
    }

    #[test]
    fn exact_threshold_is_not_enough() {
        assert!(!should_dismiss(Anchor::Bottom, 100.0, 0.0));
        assert!(!should_dismiss(Anchor::Top, -100.0, 0.0));
    }

    #[test]
    fn translation_spans_first_to_last_sample() {
        let start = Instant::now();
        let mut tracker = SwipeTracker::new();
        tracker.record(Point::new(10.0, 20.0), start);
        tracker.record(Point::new(14.0, 60.0), start + Duration::from_millis(50));
        tracker.record(Point::new(12.0, 140.0), start + Duration::from_millis(100));

        let translation = tracker.translation();
        assert_eq!(translation.x, 2.0);
        assert_eq!(translation.y, 120.0);
    }

    #[test]
    fn velocity_uses_the_last_two_samples() {
        let start = Instant::now();
        let mut tracker = SwipeTracker::new();
        tracker.record(Point::new(0.0, 0.0), start);
        tracker.record(Point::new(0.0, 50.0), start + Duration::from_millis(100));
        // 50 px over the last 100 ms => 500 px/s downward.
        let velocity = tracker.velocity();
        assert!((velocity.y - 500.0).abs() < 1.0);
        assert_eq!(velocity.x, 0.0);
    }

    #[test]
    fn single_sample_has_no_velocity() {
        let mut tracker = SwipeTracker::new();
        tracker.record(Point::new(5.0, 5.0), Instant::now());
        assert_eq!(tracker.velocity(), Vector::ZERO);
        assert_eq!(tracker.translation(), Vector::ZERO);
    }

    #[test]
    fn empty_tracker_reports_zero() {
        let tracker = SwipeTracker::new();
        assert_eq!(tracker.translation(), Vector::ZERO);
        assert_eq!(tracker.velocity(), Vector::ZERO);
    }

    #[test]
    fn zero_time_delta_yields_zero_velocity() {
        let now = Instant::now();
        let mut tracker = SwipeTracker::new();
        tracker.record(Point::new(0.0, 0.0), now);
        tracker.record(Point::new(0.0, 99.0), now);
        assert_eq!(tracker.velocity(), Vector::ZERO);
    }
}
