// SPDX-License-Identifier: MPL-2.0
//! Requests a screen hands back to the application root.

use crate::app::route::Route;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Identifier of the scrollable wrapping every screen's content.
pub const CONTENT_SCROLLABLE_ID: &str = "screen-content-scrollable";

/// Side effects a screen cannot perform on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigate(Route),
    /// Return to the previous route.
    Back,
    /// Flip membership of a card in the favorites store and persist it.
    ToggleFavorite(String),
}

/// Scrolls the screen content back to its top edge.
pub fn scroll_to_top<Message: Send + 'static>() -> Task<Message> {
    operation::snap_to(
        Id::new(CONTENT_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: 0.0 },
    )
}
