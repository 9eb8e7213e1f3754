// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of a remotely loaded resource.

/// What a screen knows about one remote resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// The request failed; carries the i18n key of the message to show.
    Failed(&'static str),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Stores the outcome of a request, keeping only the error's message key.
    pub fn settle(&mut self, result: Result<T, crate::error::Error>) {
        *self = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(error) => LoadState::Failed(error.i18n_key()),
        };
    }
}
