// SPDX-License-Identifier: MPL-2.0
//! Time-driven events.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks while toasts are on screen so they can expire; nothing otherwise.
pub fn toast_ticks(toasts_visible: bool) -> Subscription<Message> {
    if toasts_visible {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
