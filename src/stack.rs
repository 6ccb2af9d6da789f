// SPDX-License-Identifier: MPL-2.0
//! Stack layout math.
//!
//! Every visible toast is positioned and scaled from its depth: the distance
//! from the most recently shown toast, counting backward. Depth 0 is the
//! newest item at full size; older items recede behind it, clamped after two
//! layers. All functions here are pure so the layout policy can be tested
//! without a renderer.

use crate::toast::Anchor;
use std::time::Duration;

/// How far off-screen a toast starts and ends its slide transition.
pub const OFFSCREEN_OFFSET: f32 = 150.0;

/// Length of the entrance slide.
pub const ENTER_TRANSITION: Duration = Duration::from_millis(250);

/// Length of the exit slide.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(200);

/// Vertical shift per depth layer, toward the anchored edge.
const DEPTH_STEP: f32 = -10.0;

/// Scale lost per depth layer.
const SCALE_STEP: f32 = 0.1;

/// Layers beyond this depth share the same offset and scale.
const DEPTH_CLAMP: usize = 2;

/// Returns the depth of the item at `index` in a stack of `len` items,
/// counting backward from the newest (last) item.
#[must_use]
pub fn depth(index: usize, len: usize) -> usize {
    len.saturating_sub(1).saturating_sub(index)
}

/// Vertical offset of an item at the given depth.
///
/// Negative values move toward the anchored edge; the newest item sits at 0
/// and anything deeper than two layers is clamped to -20.
#[must_use]
pub fn depth_offset(depth: usize) -> f32 {
    if depth >= DEPTH_CLAMP {
        DEPTH_CLAMP as f32 * DEPTH_STEP
    } else {
        depth as f32 * DEPTH_STEP
    }
}

/// Scale of an item at the given depth, clamped at 0.8.
#[must_use]
pub fn depth_scale(depth: usize) -> f32 {
    if depth >= DEPTH_CLAMP {
        1.0 - DEPTH_CLAMP as f32 * SCALE_STEP
    } else {
        1.0 - depth as f32 * SCALE_STEP
    }
}

/// Normalized progress of a transition, clamped to `0.0..=1.0`.
#[must_use]
pub fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-out curve.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Slide offset of a toast given its visibility.
///
/// `visibility` runs from 0.0 (fully off-screen past the anchored edge) to
/// 1.0 (settled in place). Entrances animate visibility upward, exits
/// downward.
#[must_use]
pub fn slide_offset(anchor: Anchor, visibility: f32) -> f32 {
    let distance = OFFSCREEN_OFFSET * (1.0 - ease_out_cubic(visibility));
    match anchor {
        Anchor::Top => -distance,
        Anchor::Bottom => distance,
    }
}
