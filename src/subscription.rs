// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the toast overlay.
//!
//! Three sources are batched, each active only while needed: a coarse tick
//! for auto-expiry, a frame-rate tick while a slide transition runs, and a
//! raw window-event listener while a drag gesture is in flight. The raw
//! listener is what lets a swipe keep tracking after the pointer leaves the
//! capsule bounds, which any dismissal-length swipe does.

use crate::manager::{Manager, Message};
use iced::{event, mouse, time, Event, Subscription};
use std::time::Duration;

/// How often expiry deadlines are checked while toasts are on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Tick rate while a slide transition is running, roughly one frame.
const ANIMATION_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the subscription driving toast expiry, animation, and drags.
///
/// Returns [`Subscription::none`] when the manager is idle, so an embedding
/// application pays nothing while no toast is shown.
pub fn subscription(manager: &Manager) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if manager.has_toasts() {
        let interval = if manager.is_animating() {
            ANIMATION_INTERVAL
        } else {
            TICK_INTERVAL
        };
        subscriptions.push(time::every(interval).map(|_| Message::Tick));
    }

    if manager.is_dragging() {
        subscriptions.push(event::listen_with(|event, _status, _window| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::DragMoved(position))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::DragEnded)
            }
            _ => None,
        }));
    }

    if subscriptions.is_empty() {
        Subscription::none()
    } else {
        Subscription::batch(subscriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Toast;

    // `Subscription` is opaque, so these tests only pin down the state
    // predicates that gate each source.

    #[test]
    fn idle_manager_needs_no_events() {
        let manager = Manager::new();
        assert!(!manager.has_toasts());
        assert!(!manager.is_animating());
        assert!(!manager.is_dragging());
    }

    #[test]
    fn showing_a_toast_requires_ticks() {
        let mut manager = Manager::new();
        manager.show(Toast::new("hello"));
        assert!(manager.has_toasts());
        assert!(manager.is_animating());
    }
}
