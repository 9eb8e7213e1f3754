// SPDX-License-Identifier: MPL-2.0
//! Transient toasts in the bottom-right corner of the window.
//!
//! They report problems that do not replace a screen: a favorites write that
//! never reached disk, a settings file that had to be ignored. Screens keep
//! their own error states for failed catalog requests.
//!
//! ```ignore
//! let mut toasts = Toasts::new();
//! toasts.warn("notification-favorites-save-error");
//! let overlay = notifications::overlay(&toasts, &i18n).map(Message::Notification);
//! ```

mod stack;
mod toast;
mod view;

pub use stack::{Message, Toasts};
pub use toast::{Level, Toast, ToastId};
pub use view::overlay;
