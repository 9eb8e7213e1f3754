// SPDX-License-Identifier: MPL-2.0
use super::toast::{Level, Toast, ToastId};
use std::collections::VecDeque;
use std::time::Instant;

/// Toasts on screen at once; the rest wait their turn.
const MAX_SHOWN: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Close(ToastId),
}

/// The toasts on screen plus the ones waiting for room.
#[derive(Debug, Default)]
pub struct Toasts {
    next_id: u64,
    /// Oldest first, rendered top to bottom.
    shown: Vec<Toast>,
    waiting: VecDeque<Toast>,
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises a warning toast for `key`.
    pub fn warn(&mut self, key: impl Into<String>) -> ToastId {
        self.push(Level::Warning, key)
    }

    pub fn push(&mut self, level: Level, key: impl Into<String>) -> ToastId {
        self.push_at(level, key.into(), Instant::now())
    }

    fn push_at(&mut self, level: Level, key: String, now: Instant) -> ToastId {
        match level {
            Level::Warning => tracing::warn!(key = key.as_str(), "toast raised"),
            Level::Error => tracing::error!(key = key.as_str(), "toast raised"),
            Level::Success | Level::Info => tracing::debug!(key = key.as_str(), "toast raised"),
        }

        let id = ToastId(self.next_id);
        self.next_id += 1;

        let toast = Toast::new(id, level, key, now);
        if self.shown.len() < MAX_SHOWN {
            self.shown.push(toast);
        } else {
            self.waiting.push_back(toast);
        }
        id
    }

    /// Removes the toast `id`. Returns `false` if it was already gone.
    pub fn close(&mut self, id: ToastId) -> bool {
        let before = self.shown.len() + self.waiting.len();
        self.shown.retain(|toast| toast.id != id);
        self.waiting.retain(|toast| toast.id != id);
        let removed = self.shown.len() + self.waiting.len() < before;
        self.refill(Instant::now());
        removed
    }

    /// Drops every shown toast whose lifetime ran out by `now`.
    ///
    /// A toast promoted from the waiting line starts its lifetime when it
    /// becomes visible, not when it was raised.
    pub fn expire(&mut self, now: Instant) {
        self.shown.retain(|toast| !toast.is_expired(now));
        self.refill(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Close(id) => {
                self.close(*id);
            }
        }
    }

    pub fn shown(&self) -> &[Toast] {
        &self.shown
    }

    /// Whether anything is shown or waiting.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    fn refill(&mut self, now: Instant) {
        while self.shown.len() < MAX_SHOWN {
            let Some(toast) = self.waiting.pop_front() else {
                break;
            };
            self.shown
                .push(Toast::new(toast.id(), toast.level(), toast.key().to_string(), now));
        }
    }
}
