// SPDX-License-Identifier: MPL-2.0
//! Default values for toast presentation settings.

use crate::toast::{Anchor, ToastDuration};

/// Duration class used when the settings file does not pick one.
pub const DEFAULT_DURATION: ToastDuration = ToastDuration::Medium;

/// Anchor used when the settings file does not pick one.
pub const DEFAULT_ANCHOR: Anchor = Anchor::Top;
