// SPDX-License-Identifier: MPL-2.0
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Identifies a toast within its [`Toasts`](super::Toasts) stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    /// The app keeps working in a degraded way.
    Warning,
    Error,
}

impl Level {
    /// How long a toast of this level stays up. Errors stay until closed.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Level::Success | Level::Info => Some(Duration::from_secs(3)),
            Level::Warning => Some(Duration::from_secs(5)),
            Level::Error => None,
        }
    }

    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Level::Success => palette::SUCCESS_500,
            Level::Info => palette::INFO_500,
            Level::Warning => palette::WARNING_500,
            Level::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Level::Success => "✓",
            Level::Info => "i",
            Level::Warning | Level::Error => "!",
        }
    }
}

/// One toast: an i18n key to render and the moment it goes away.
#[derive(Debug, Clone)]
pub struct Toast {
    pub(super) id: ToastId,
    level: Level,
    key: String,
    expires_at: Option<Instant>,
}

impl Toast {
    pub(super) fn new(id: ToastId, level: Level, key: String, shown_at: Instant) -> Self {
        Self {
            id,
            level,
            key,
            expires_at: level.lifetime().map(|lifetime| shown_at + lifetime),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}
