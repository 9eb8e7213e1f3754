// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens handle their own messages and hand back an [`Effect`] for
//! anything that reaches beyond them. This module applies those effects:
//! it switches routes, toggles favorites, and fetches the images the
//! current screen shows.

use super::config::Config;
use super::images::ImageCache;
use super::route::{History, Route};
use super::{Message, Screen};
use crate::api::{Client, FilterOptions};
use crate::error::Error;
use crate::favorites::FavoritesStore;
use crate::ui::effect::{scroll_to_top, Effect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Toasts;
use crate::ui::{card_detail, catalog, favorites, not_found, sets};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub client: &'a Client,
    pub screen: &'a mut Screen,
    pub history: &'a mut History,
    pub favorites: &'a mut FavoritesStore,
    pub images: &'a mut ImageCache,
    pub filter_options: &'a mut FilterOptions,
    pub search_input: &'a mut String,
    pub notifications: &'a mut Toasts,
}

impl UpdateContext<'_> {
    fn page_size(&self) -> u32 {
        self.config.catalog.page_size
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.search_input) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(route) => navigate(ctx, route),
    }
}

pub fn handle_catalog_message(
    ctx: &mut UpdateContext<'_>,
    message: catalog::Message,
) -> Task<Message> {
    let page_size = ctx.page_size();
    let Screen::Catalog(state) = &mut *ctx.screen else {
        tracing::debug!("dropping catalog message for an inactive screen");
        return Task::none();
    };
    let (effect, task) = state.handle_message(message, ctx.client, page_size);
    Task::batch([task.map(Message::Catalog), apply_effect(ctx, effect)])
}

pub fn handle_sets_message(ctx: &mut UpdateContext<'_>, message: sets::Message) -> Task<Message> {
    let page_size = ctx.page_size();
    let Screen::Sets(state) = &mut *ctx.screen else {
        tracing::debug!("dropping sets message for an inactive screen");
        return Task::none();
    };
    state
        .handle_message(message, ctx.client, page_size)
        .map(Message::Sets)
}

pub fn handle_favorites_message(
    ctx: &mut UpdateContext<'_>,
    message: favorites::Message,
) -> Task<Message> {
    let Screen::Favorites(state) = &mut *ctx.screen else {
        tracing::debug!("dropping favorites message for an inactive screen");
        return Task::none();
    };
    let (effect, task) = state.handle_message(message, ctx.client, ctx.favorites.ids());
    Task::batch([task.map(Message::Favorites), apply_effect(ctx, effect)])
}

pub fn handle_card_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: card_detail::Message,
) -> Task<Message> {
    let Screen::CardDetail(state) = &mut *ctx.screen else {
        tracing::debug!("dropping card detail message for an inactive screen");
        return Task::none();
    };
    let (effect, task) = state.handle_message(message, ctx.client);
    Task::batch([task.map(Message::CardDetail), apply_effect(ctx, effect)])
}

pub fn handle_not_found_message(
    ctx: &mut UpdateContext<'_>,
    message: not_found::Message,
) -> Task<Message> {
    match message {
        not_found::Message::GoHome => navigate(ctx, Route::Home),
    }
}

/// Stores the filter panel options. A failure leaves the lists empty.
pub fn handle_filter_options_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<FilterOptions, Error>,
) {
    match result {
        Ok(options) => {
            tracing::debug!(
                sets = options.sets.len(),
                types = options.types.len(),
                rarities = options.rarities.len(),
                "filter options loaded"
            );
            *ctx.filter_options = options;
        }
        Err(error) => tracing::error!(%error, "failed to load filter options"),
    }
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>, Error>,
) {
    ctx.images.finish(url, result.ok());
}

pub fn apply_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Navigate(route) => navigate(ctx, route),
        Effect::Back => {
            let route = ctx.history.back().clone();
            tracing::info!(%route, "navigating back");
            open_route(ctx, &route)
        }
        Effect::ToggleFavorite(id) => toggle_favorite(ctx, &id),
    }
}

/// Moves to `route` unless it is already shown.
pub fn navigate(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    if !ctx.history.push(route.clone()) {
        return Task::none();
    }
    tracing::info!(%route, "navigating");
    open_route(ctx, &route)
}

/// Replaces the screen with a fresh one for `route` and starts its load.
pub fn open_route(ctx: &mut UpdateContext<'_>, route: &Route) -> Task<Message> {
    *ctx.screen = Screen::for_route(route);
    Task::batch([load_screen(ctx), scroll_to_top()])
}

/// Issues the initial request of the current screen.
pub fn load_screen(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let page_size = ctx.page_size();
    match &mut *ctx.screen {
        Screen::Catalog(state) => state.load(ctx.client, page_size).map(Message::Catalog),
        Screen::Sets(state) => state.load(ctx.client, page_size).map(Message::Sets),
        Screen::Favorites(state) => state
            .load(ctx.client, ctx.favorites.ids())
            .map(Message::Favorites),
        Screen::CardDetail(state) => state.load(ctx.client).map(Message::CardDetail),
        Screen::About | Screen::NotFound(_) => Task::none(),
    }
}

/// Flips `id` in the favorites store, mirrors it to disk, and refreshes the
/// favorites screen when it is shown.
pub fn toggle_favorite(ctx: &mut UpdateContext<'_>, id: &str) -> Task<Message> {
    let added = ctx.favorites.toggle(id);
    tracing::info!(id, added, total = ctx.favorites.len(), "favorite toggled");

    if let Some(key) = ctx.favorites.save() {
        ctx.notifications.warn(key);
    }

    match &mut *ctx.screen {
        Screen::Favorites(state) => state
            .load(ctx.client, ctx.favorites.ids())
            .map(Message::Favorites),
        _ => Task::none(),
    }
}

/// Starts a fetch for every image on screen that is not cached yet.
pub fn fetch_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let missing = ctx.images.request(ctx.screen.image_urls());
    if missing.is_empty() {
        return Task::none();
    }

    tracing::debug!(count = missing.len(), "fetching images");
    Task::batch(missing.into_iter().map(|url| {
        let client = ctx.client.clone();
        Task::perform(
            async move {
                let result = client.image(&url).await;
                (url, result)
            },
            |(url, result)| Message::ImageLoaded { url, result },
        )
    }))
}
