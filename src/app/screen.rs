// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.
//!
//! Each variant owns the state of one route. Navigating replaces the screen
//! wholesale, so a screen never sees responses for a route it did not
//! request.

use super::route::Route;
use crate::ui::{card_detail, catalog, favorites, sets};

#[derive(Debug, Clone)]
pub enum Screen {
    Catalog(catalog::State),
    Sets(sets::State),
    Favorites(favorites::State),
    CardDetail(card_detail::State),
    About,
    /// Unknown route; keeps the path that matched nothing.
    NotFound(String),
}

impl Screen {
    /// Fresh, unloaded state for `route`.
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Home => Screen::Catalog(catalog::State::new(catalog::Mode::Browse)),
            Route::Search(query) => {
                Screen::Catalog(catalog::State::new(catalog::Mode::Search(query.clone())))
            }
            Route::Sets => Screen::Sets(sets::State::new()),
            Route::Favorites => Screen::Favorites(favorites::State::new()),
            Route::CardDetail(id) => Screen::CardDetail(card_detail::State::new(id.clone())),
            Route::About => Screen::About,
            Route::NotFound(path) => Screen::NotFound(path.clone()),
        }
    }

    /// Remote images the screen currently displays.
    #[must_use]
    pub fn image_urls(&self) -> Vec<&str> {
        match self {
            Screen::Catalog(state) => state.image_urls(),
            Screen::Sets(state) => state.image_urls(),
            Screen::Favorites(state) => state.image_urls(),
            Screen::CardDetail(state) => state.image_urls(),
            Screen::About | Screen::NotFound(_) => Vec::new(),
        }
    }
}
