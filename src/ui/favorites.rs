// SPDX-License-Identifier: MPL-2.0
//! The user's collection: every favorite card, fetched by identifier.
//!
//! The cards are fetched in parallel when the screen opens and again each
//! time the favorites change while it is shown. An empty collection issues
//! no request.

use crate::api::{Card, Client};
use crate::app::images::ImageCache;
use crate::app::route::Route;
use crate::error::Error;
use crate::favorites::FavoritesStore;
use crate::i18n::fluent::I18n;
use crate::ui::card_grid;
use crate::ui::components::error_display::ErrorPanel;
use crate::ui::components::status;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::effect::Effect;
use crate::ui::state::{Generation, GenerationTracker, LoadState};
use iced::widget::{Column, Text};
use iced::{Element, Length, Task};

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        generation: Generation,
        result: Result<Vec<Card>, Error>,
    },
    Grid(card_grid::Message),
    Browse,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub favorites: &'a FavoritesStore,
    pub images: &'a ImageCache,
    pub columns: u32,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    cards: LoadState<Vec<Card>>,
    generation: GenerationTracker,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cards(&self) -> &LoadState<Vec<Card>> {
        &self.cards
    }

    /// Fetches the cards for `ids`, superseding any fetch in flight.
    pub fn load(&mut self, client: &Client, ids: &[String]) -> Task<Message> {
        let generation = self.generation.next();

        if ids.is_empty() {
            self.cards = LoadState::Loaded(Vec::new());
            return Task::none();
        }

        self.cards = LoadState::Loading;
        let client = client.clone();
        let ids = ids.to_vec();
        Task::perform(
            async move { client.cards_by_ids(&ids).await },
            move |result| Message::Loaded { generation, result },
        )
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        client: &Client,
        ids: &[String],
    ) -> (Effect, Task<Message>) {
        match message {
            Message::Loaded { generation, result } => {
                if self.generation.accept(generation, "favorite cards") {
                    self.cards.settle(result);
                }
                (Effect::None, Task::none())
            }
            Message::Grid(card_grid::Message::Open(id)) => {
                (Effect::Navigate(Route::CardDetail(id)), Task::none())
            }
            Message::Grid(card_grid::Message::ToggleFavorite(id)) => {
                (Effect::ToggleFavorite(id), Task::none())
            }
            Message::Grid(card_grid::Message::Retry) => (Effect::None, self.load(client, ids)),
            Message::Browse => (Effect::Navigate(Route::Home), Task::none()),
        }
    }

    #[must_use]
    pub fn image_urls(&self) -> Vec<&str> {
        self.cards
            .loaded()
            .map(|cards| card_grid::image_urls(cards).collect())
            .unwrap_or_default()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let hero = status::hero(
            ctx.i18n.tr("favorites-title"),
            ctx.i18n.tr("favorites-subtitle"),
        );

        let body: Element<'a, Message> = match &self.cards {
            LoadState::Idle | LoadState::Loading => status::loading(ctx.i18n.tr("loading")),
            LoadState::Failed(key) => ErrorPanel::failed(
                ctx.i18n.tr("favorites-error-title"),
                ctx.i18n.tr(key),
                ctx.i18n.tr("action-try-again"),
                Message::Grid(card_grid::Message::Retry),
            )
            .view(),
            LoadState::Loaded(cards) if cards.is_empty() => status::empty_state(
                ctx.i18n.tr("favorites-empty-title"),
                Some(ctx.i18n.tr("favorites-empty-subtitle")),
                Some((ctx.i18n.tr("favorites-browse"), Message::Browse)),
            ),
            LoadState::Loaded(cards) => {
                let grid_ctx = card_grid::ViewContext {
                    i18n: ctx.i18n,
                    favorites: ctx.favorites,
                    images: ctx.images,
                    columns: ctx.columns,
                };
                Column::new()
                    .spacing(spacing::MD)
                    .push(
                        Text::new(ctx.i18n.tr_with_args(
                            "favorites-count",
                            &[("count", &cards.len().to_string())],
                        ))
                        .size(typography::TITLE_MD),
                    )
                    .push(card_grid::grid(&grid_ctx, cards).map(Message::Grid))
                    .into()
            }
        };

        Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(hero)
            .push(body)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ApiConfig;

    fn client() -> Client {
        Client::new(&ApiConfig::default()).expect("client builds")
    }

    #[test]
    fn empty_collection_issues_no_request() {
        let mut state = State::new();
        let _ = state.load(&client(), &[]);
        assert_eq!(state.cards(), &LoadState::Loaded(Vec::new()));
    }

    #[test]
    fn non_empty_collection_starts_loading() {
        let mut state = State::new();
        let _ = state.load(&client(), &["xy1-1".to_string()]);
        assert!(state.cards().is_loading());
    }

    #[test]
    fn reload_supersedes_previous_fetch() {
        let mut state = State::new();
        let ids = vec!["xy1-1".to_string(), "xy1-2".to_string()];
        let stale = state.generation.next();
        let _ = state.load(&client(), &ids);

        let _ = state.handle_message(
            Message::Loaded {
                generation: stale,
                result: Ok(vec![Card::default()]),
            },
            &client(),
            &ids,
        );
        assert!(state.cards().is_loading());
    }

    #[test]
    fn batch_failure_shows_error() {
        let mut state = State::new();
        let _ = state.load(&client(), &["missing".to_string()]);
        let generation = state.generation.next();
        let _ = state.handle_message(
            Message::Loaded {
                generation,
                result: Err(Error::Http("card: HTTP status 404 Not Found".into())),
            },
            &client(),
            &[],
        );
        assert!(state.cards().is_failed());
    }

    #[test]
    fn browse_goes_home() {
        let mut state = State::new();
        let (effect, _) = state.handle_message(Message::Browse, &client(), &[]);
        assert_eq!(effect, Effect::Navigate(Route::Home));
    }
}
