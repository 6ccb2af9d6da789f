// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Manager`] owns the ordered queue of active toasts and drives every
//! state transition: showing, auto-expiry, swipe dismissal, and the exit
//! animation. It is plain owned state meant to live inside the host
//! application's model; there is no global instance.
//!
//! Each entry carries its own cancellable [`DismissTimer`], armed exactly
//! once when the toast is shown. Every removal path cancels the timer first
//! and removal itself is idempotent, so the benign race between a firing
//! timer and an in-flight swipe resolves to a single dismissal.

use crate::stack;
use crate::swipe::{self, SwipeTracker};
use crate::toast::{Toast, ToastId};
use iced::Point;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
///
/// Produced by the overlay widgets and the subscriptions in this crate; the
/// host application forwards them to [`Manager::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Periodic tick driving auto-expiry and animation pruning.
    Tick,
    /// The pointer was pressed on a toast capsule.
    DragStarted(ToastId),
    /// The pointer moved while a drag is in flight.
    DragMoved(Point),
    /// The pointer button was released, ending the drag.
    DragEnded,
}

/// A one-shot, cancellable deadline for a toast's auto-dismissal.
///
/// Arming is idempotent: once a deadline is set, later calls are ignored, so
/// re-renders can never re-arm an item's timer.
#[derive(Debug, Default)]
pub struct DismissTimer {
    deadline: Option<Instant>,
}

impl DismissTimer {
    /// Arms the timer to fire after `duration`, if not already armed.
    pub fn arm(&mut self, duration: Duration) {
        self.arm_at(Instant::now(), duration);
    }

    pub(crate) fn arm_at(&mut self, now: Instant, duration: Duration) {
        if self.deadline.is_none() {
            self.deadline = Some(now + duration);
        }
    }

    /// Cancels the pending deadline. Called before every removal path.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

/// A queued toast together with its lifecycle bookkeeping.
#[derive(Debug)]
pub(crate) struct Entry {
    toast: Toast,
    shown_at: Instant,
    timer: DismissTimer,
    /// Set when the toast starts its exit slide; pruned once it finishes.
    leaving_since: Option<Instant>,
}

impl Entry {
    pub(crate) fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Whether this entry still counts as an active toast.
    pub(crate) fn is_active(&self) -> bool {
        self.leaving_since.is_none()
    }

    /// Visibility of this entry at `now`: 0.0 off-screen, 1.0 settled.
    pub(crate) fn visibility_at(&self, now: Instant) -> f32 {
        if let Some(leaving_since) = self.leaving_since {
            let elapsed = now.saturating_duration_since(leaving_since);
            1.0 - stack::progress(elapsed, stack::EXIT_TRANSITION)
        } else {
            let elapsed = now.saturating_duration_since(self.shown_at);
            stack::progress(elapsed, stack::ENTER_TRANSITION)
        }
    }

    fn is_settled_at(&self, now: Instant) -> bool {
        self.is_active()
            && now.saturating_duration_since(self.shown_at) >= stack::ENTER_TRANSITION
    }
}

#[derive(Debug)]
struct Drag {
    id: ToastId,
    tracker: SwipeTracker,
}

/// Manages the ordered queue of toasts and their dismissal.
///
/// Insertion order is display order: the newest toast renders last, on top
/// of the stack. The queue is deliberately unbounded; every item expires on
/// its own, so growth is self-limiting.
#[derive(Debug, Default)]
pub struct Manager {
    entries: Vec<Entry>,
    drag: Option<Drag>,
}

impl Manager {
    /// Creates a new empty toast manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast, arming its dismiss timer, and returns its ID.
    pub fn show(&mut self, toast: Toast) -> ToastId {
        self.show_at(toast, Instant::now())
    }

    pub(crate) fn show_at(&mut self, toast: Toast, now: Instant) -> ToastId {
        let id = toast.id();
        let mut timer = DismissTimer::default();
        timer.arm_at(now, toast.duration_class().as_duration());
        self.entries.push(Entry {
            toast,
            shown_at: now,
            timer,
            leaving_since: None,
        });
        id
    }

    /// Dismisses a toast by its ID, cancelling its pending timer and
    /// starting the exit transition.
    ///
    /// Returns `true` if the toast was active. Dismissing an unknown or
    /// already-dismissed ID is a no-op, which makes the timer-versus-swipe
    /// race harmless.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    pub(crate) fn dismiss_at(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.toast.id() == id && entry.is_active())
        else {
            return false;
        };

        entry.timer.cancel();
        entry.leaving_since = Some(now);

        if self.drag.as_ref().is_some_and(|drag| drag.id == id) {
            self.drag = None;
        }

        true
    }

    /// Processes a tick: dismisses expired toasts and prunes entries whose
    /// exit transition has finished.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub(crate) fn tick_at(&mut self, now: Instant) {
        let expired: Vec<ToastId> = self
            .entries
            .iter()
            .filter(|entry| entry.is_active() && entry.timer.is_expired_at(now))
            .map(|entry| entry.toast.id())
            .collect();

        for id in expired {
            self.dismiss_at(id, now);
        }

        self.entries.retain(|entry| match entry.leaving_since {
            Some(leaving_since) => {
                now.saturating_duration_since(leaving_since) < stack::EXIT_TRANSITION
            }
            None => true,
        });
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick => {
                self.tick();
            }
            Message::DragStarted(id) => {
                self.begin_drag(id);
            }
            Message::DragMoved(position) => {
                if let Some(drag) = &mut self.drag {
                    drag.tracker.record(position, Instant::now());
                }
            }
            Message::DragEnded => {
                self.end_drag_at(Instant::now());
            }
        }
    }

    fn begin_drag(&mut self, id: ToastId) {
        let interactive = self
            .entries
            .iter()
            .find(|entry| entry.toast.id() == id && entry.is_active())
            .is_some_and(|entry| entry.toast.is_interactive());

        if interactive {
            self.drag = Some(Drag {
                id,
                tracker: SwipeTracker::new(),
            });
        }
    }

    pub(crate) fn end_drag_at(&mut self, now: Instant) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        let Some(entry) = self
            .entries
            .iter()
            .find(|entry| entry.toast.id() == drag.id && entry.is_active())
        else {
            return;
        };

        let translation = drag.tracker.translation();
        let velocity = drag.tracker.velocity();

        if swipe::should_dismiss(entry.toast.anchor_edge(), translation.y, velocity.y) {
            self.dismiss_at(drag.id, now);
        }
    }

    pub(crate) fn record_drag_sample(&mut self, position: Point, at: Instant) {
        if let Some(drag) = &mut self.drag {
            drag.tracker.record(position, at);
        }
    }

    /// Returns the number of active toasts (entries sliding out are no
    /// longer counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_active()).count()
    }

    /// Returns whether no toast is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether anything still needs rendering, including exit
    /// animations.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns whether a drag gesture is currently in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns whether an entrance or exit transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating_at(Instant::now())
    }

    pub(crate) fn is_animating_at(&self, now: Instant) -> bool {
        self.entries.iter().any(|entry| !entry.is_settled_at(now))
    }

    /// Returns the active toasts in display order, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.entries
            .iter()
            .filter(|entry| entry.is_active())
            .map(Entry::toast)
    }

    /// All renderable entries, including those sliding out.
    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Anchor, ToastDuration};

    fn medium_toast(title: &str) -> Toast {
        Toast::new(title)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
        assert!(!manager.has_toasts());
    }

    #[test]
    fn show_appends_in_insertion_order() {
        let mut manager = Manager::new();
        let first = manager.show(medium_toast("first"));
        let second = manager.show(medium_toast("second"));

        assert_eq!(manager.len(), 2);
        let order: Vec<ToastId> = manager.toasts().map(Toast::id).collect();
        assert_eq!(order, vec![first, second]);
    }

    #[test]
    fn show_arms_the_timer_exactly_once() {
        let now = Instant::now();
        let mut timer = DismissTimer::default();
        timer.arm_at(now, Duration::from_secs(2));
        // A second arm must not push the deadline back.
        timer.arm_at(now + Duration::from_secs(1), Duration::from_secs(2));
        assert!(timer.is_expired_at(now + Duration::from_millis(2001)));
    }

    #[test]
    fn dismiss_removes_exactly_once() {
        let mut manager = Manager::new();
        let id = manager.show(medium_toast("bye"));

        assert!(manager.dismiss(id));
        assert_eq!(manager.len(), 0);
        // Second trigger (the losing side of the timer/swipe race) is a no-op.
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn dismiss_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        let stray = Toast::new("never shown").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn expired_toast_is_dismissed_by_tick() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show_at(medium_toast("short lived").duration(ToastDuration::Short), now);

        manager.tick_at(now + Duration::from_millis(500));
        assert_eq!(manager.len(), 1);

        manager.tick_at(now + Duration::from_millis(1001));
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn long_toast_expires_after_three_and_a_half_seconds() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let before = manager.len();
        manager.show_at(
            medium_toast("Deleted")
                .glyph("🗑")
                .duration(ToastDuration::Long),
            now,
        );

        manager.tick_at(now + Duration::from_millis(3499));
        assert_eq!(manager.len(), before + 1);

        manager.tick_at(now + Duration::from_millis(3500));
        assert_eq!(manager.len(), before);
    }

    #[test]
    fn leaving_entries_are_pruned_after_the_exit_transition() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at(medium_toast("going"), now);

        manager.dismiss_at(id, now);
        assert!(manager.has_toasts());
        assert_eq!(manager.len(), 0);

        manager.tick_at(now + stack::EXIT_TRANSITION);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn timer_fires_then_swipe_lands_is_harmless() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at(medium_toast("raced"), now);

        // Timer path wins.
        manager.tick_at(now + Duration::from_millis(2001));
        assert_eq!(manager.len(), 0);

        // The swipe release arrives afterward.
        manager.update(Message::DragStarted(id));
        assert!(!manager.is_dragging());
        manager.update(Message::DragEnded);
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn qualifying_swipe_dismisses_and_cancels_the_timer() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at(medium_toast("flung").anchor(Anchor::Bottom), now);

        manager.update(Message::DragStarted(id));
        assert!(manager.is_dragging());
        manager.record_drag_sample(Point::new(0.0, 0.0), now);
        manager.record_drag_sample(Point::new(0.0, 120.0), now + Duration::from_millis(100));
        manager.end_drag_at(now + Duration::from_millis(100));

        assert_eq!(manager.len(), 0);
        // The timer was cancelled; its deadline passing changes nothing.
        manager.tick_at(now + Duration::from_secs(3));
        assert!(!manager.has_toasts());
    }

    #[test]
    fn weak_swipe_leaves_the_toast_in_place() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at(medium_toast("stays").anchor(Anchor::Bottom), now);

        manager.update(Message::DragStarted(id));
        manager.record_drag_sample(Point::new(0.0, 0.0), now);
        // 50 px translation with a 30 px/s release velocity: throw of 80.
        manager.record_drag_sample(Point::new(0.0, 47.0), now + Duration::from_millis(100));
        manager.record_drag_sample(Point::new(0.0, 50.0), now + Duration::from_millis(200));
        manager.end_drag_at(now + Duration::from_millis(200));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn non_interactive_toast_ignores_drags() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at(
            medium_toast("hands off")
                .interactive(false)
                .anchor(Anchor::Bottom),
            now,
        );

        manager.update(Message::DragStarted(id));
        assert!(!manager.is_dragging());

        manager.record_drag_sample(Point::new(0.0, 0.0), now);
        manager.record_drag_sample(Point::new(0.0, 900.0), now + Duration::from_millis(10));
        manager.end_drag_at(now + Duration::from_millis(10));

        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn entrance_then_settle_reports_animation_state() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show_at(medium_toast("sliding"), now);

        assert!(manager.is_animating_at(now + Duration::from_millis(100)));
        assert!(!manager.is_animating_at(now + stack::ENTER_TRANSITION));
    }

    #[test]
    fn visibility_ramps_up_then_down() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at(medium_toast("fade"), now);

        let entry = &manager.entries()[0];
        assert_eq!(entry.visibility_at(now), 0.0);
        assert_eq!(entry.visibility_at(now + stack::ENTER_TRANSITION), 1.0);

        manager.dismiss_at(id, now + Duration::from_secs(1));
        let entry = &manager.entries()[0];
        assert_eq!(entry.visibility_at(now + Duration::from_secs(1)), 1.0);
        assert_eq!(
            entry.visibility_at(now + Duration::from_secs(1) + stack::EXIT_TRANSITION),
            0.0
        );
    }
}
