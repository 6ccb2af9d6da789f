// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] value describing a single notification,
//! along with its display duration class and screen anchor.

use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// How long a toast stays on screen before it dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastDuration {
    /// 1 second. Quick confirmations.
    Short,
    /// 2 seconds. The default.
    #[default]
    Medium,
    /// 3.5 seconds. Messages worth reading twice.
    Long,
}

impl ToastDuration {
    /// Returns the wall-clock time this duration class maps to.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        match self {
            ToastDuration::Short => Duration::from_millis(1000),
            ToastDuration::Medium => Duration::from_millis(2000),
            ToastDuration::Long => Duration::from_millis(3500),
        }
    }
}

/// Screen edge a toast sticks to.
///
/// The entrance and exit transitions slide past the anchored edge, and the
/// swipe-to-dismiss direction points toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Anchored to the top edge; dismissed by swiping up.
    #[default]
    Top,
    /// Anchored to the bottom edge; dismissed by swiping down.
    Bottom,
}

impl Anchor {
    /// Returns the opposite anchor.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Anchor::Top => Anchor::Bottom,
            Anchor::Bottom => Anchor::Top,
        }
    }
}

/// A single notification to be displayed in the toast stack.
///
/// Toasts are immutable once created; the queue only ever appends and
/// removes them.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    title: String,
    glyph: Option<String>,
    tint: Option<Color>,
    interactive: bool,
    duration: ToastDuration,
    anchor: Anchor,
}

impl Toast {
    /// Creates a new toast with the given title and default presentation.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            title: title.into(),
            glyph: None,
            tint: None,
            interactive: true,
            duration: ToastDuration::default(),
            anchor: Anchor::default(),
        }
    }

    /// Sets a glyph rendered before the title (an emoji or icon-font
    /// character).
    #[must_use]
    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    /// Sets the foreground tint. Defaults to the theme's text color.
    #[must_use]
    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Enables or disables swipe-to-dismiss for this toast.
    ///
    /// A non-interactive toast ignores pointer input entirely and can only
    /// leave the screen by timing out.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Sets the display duration class.
    #[must_use]
    pub fn duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the screen edge the toast is anchored to.
    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional glyph.
    #[must_use]
    pub fn glyph_ref(&self) -> Option<&str> {
        self.glyph.as_deref()
    }

    /// Returns the optional foreground tint.
    #[must_use]
    pub fn tint_color(&self) -> Option<Color> {
        self.tint
    }

    /// Returns whether swipe-to-dismiss is enabled.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Returns the display duration class.
    #[must_use]
    pub fn duration_class(&self) -> ToastDuration {
        self.duration
    }

    /// Returns the anchored screen edge.
    #[must_use]
    pub fn anchor_edge(&self) -> Anchor {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = Toast::new("one");
        let b = Toast::new("one");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn duration_classes_map_to_expected_seconds() {
        assert_eq!(
            ToastDuration::Short.as_duration(),
            Duration::from_secs_f64(1.0)
        );
        assert_eq!(
            ToastDuration::Medium.as_duration(),
            Duration::from_secs_f64(2.0)
        );
        assert_eq!(
            ToastDuration::Long.as_duration(),
            Duration::from_secs_f64(3.5)
        );
    }

    #[test]
    fn defaults_match_contract() {
        let toast = Toast::new("saved");
        assert!(toast.is_interactive());
        assert_eq!(toast.duration_class(), ToastDuration::Medium);
        assert_eq!(toast.anchor_edge(), Anchor::Top);
        assert!(toast.glyph_ref().is_none());
        assert!(toast.tint_color().is_none());
    }

    #[test]
    fn builder_pattern_sets_all_fields() {
        let toast = Toast::new("deleted")
            .glyph("🗑")
            .tint(Color::from_rgb(1.0, 0.0, 0.0))
            .interactive(false)
            .duration(ToastDuration::Long)
            .anchor(Anchor::Bottom);

        assert_eq!(toast.title(), "deleted");
        assert_eq!(toast.glyph_ref(), Some("🗑"));
        assert!(toast.tint_color().is_some());
        assert!(!toast.is_interactive());
        assert_eq!(toast.duration_class(), ToastDuration::Long);
        assert_eq!(toast.anchor_edge(), Anchor::Bottom);
    }

    #[test]
    fn anchor_flips_to_the_opposite_edge() {
        assert_eq!(Anchor::Top.flipped(), Anchor::Bottom);
        assert_eq!(Anchor::Bottom.flipped(), Anchor::Top);
    }
}
