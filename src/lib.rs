// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` renders transient, stacked toast notifications above any
//! Iced application, with auto-expiry and swipe-to-dismiss.
//!
//! The queue is plain owned state: embed a [`Manager`] in the application
//! model, wrap the top-level view in [`host`], and forward [`Message`]s and
//! the [`subscription`]. Nothing here is global.
//!
//! ```no_run
//! use iced_toasts::{self as toasts, Manager, Toast, ToastDuration};
//!
//! struct App {
//!     toasts: Manager,
//! }
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Toast(toasts::Message),
//! }
//!
//! # impl App {
//! fn notify(&mut self) {
//!     self.toasts
//!         .show(Toast::new("Deleted").glyph("🗑").duration(ToastDuration::Long));
//! }
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod manager;
pub mod stack;
pub mod subscription;
pub mod swipe;
pub mod toast;
mod translate;
pub mod widget;

pub use error::{Error, Result};
pub use manager::{Manager, Message};
pub use subscription::subscription;
pub use toast::{Anchor, Toast, ToastDuration, ToastId};
pub use widget::{host, overlay};
