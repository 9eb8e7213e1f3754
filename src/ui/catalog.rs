// SPDX-License-Identifier: MPL-2.0
//! Paginated card listing behind the Home and Search routes.
//!
//! Both screens share the hero banner, filter panel, card grid and page
//! switcher. Home lists every card narrowed by the filters; Search lists
//! cards whose name matches the query. Search shows the filter panel and
//! refetches from page one when it changes, but the filters are not part
//! of the search request.

use crate::api::{Card, Client, FilterOptions, Filters, Page};
use crate::app::images::ImageCache;
use crate::app::route::Route;
use crate::error::Error;
use crate::favorites::FavoritesStore;
use crate::i18n::fluent::I18n;
use crate::pagination::{total_pages_for, PageState};
use crate::ui::components::status;
use crate::ui::design_tokens::spacing;
use crate::ui::effect::{scroll_to_top, Effect};
use crate::ui::state::{Generation, GenerationTracker, LoadState};
use crate::ui::{card_grid, filter_panel, page_switcher};
use iced::widget::Column;
use iced::{Element, Length, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        generation: Generation,
        result: Result<Page<Card>, Error>,
    },
    Filter(filter_panel::Message),
    Grid(card_grid::Message),
    PageSelected(u32),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub favorites: &'a FavoritesStore,
    pub images: &'a ImageCache,
    pub filter_options: &'a FilterOptions,
    pub columns: u32,
}

#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    filters: Filters,
    filters_open: bool,
    pages: PageState,
    cards: LoadState<Vec<Card>>,
    generation: GenerationTracker,
}

impl State {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            filters: Filters::default(),
            filters_open: false,
            pages: PageState::new(),
            cards: LoadState::Idle,
            generation: GenerationTracker::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    #[must_use]
    pub fn pages(&self) -> &PageState {
        &self.pages
    }

    #[must_use]
    pub fn cards(&self) -> &LoadState<Vec<Card>> {
        &self.cards
    }

    /// Requests the current page. A blank search query issues no request
    /// and settles on an empty listing.
    pub fn load(&mut self, client: &Client, page_size: u32) -> Task<Message> {
        let generation = self.generation.next();
        let page = self.pages.current();

        match &self.mode {
            Mode::Browse => {
                self.cards = LoadState::Loading;
                let client = client.clone();
                let filters = self.filters.clone();
                Task::perform(
                    async move { client.cards(page, page_size, &filters).await },
                    move |result| Message::Loaded { generation, result },
                )
            }
            Mode::Search(query) if query.trim().is_empty() => {
                self.cards = LoadState::Loaded(Vec::new());
                Task::none()
            }
            Mode::Search(query) => {
                self.cards = LoadState::Loading;
                let client = client.clone();
                let query = query.clone();
                Task::perform(
                    async move { client.search(&query, page, page_size).await },
                    move |result| Message::Loaded { generation, result },
                )
            }
        }
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        client: &Client,
        page_size: u32,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::Loaded { generation, result } => {
                if !self.generation.accept(generation, "cards") {
                    return (Effect::None, Task::none());
                }
                let result = result.map(|page| {
                    self.pages
                        .set_total(total_pages_for(page.total_count, page_size));
                    page.items
                });
                self.cards.settle(result);
                (Effect::None, Task::none())
            }
            Message::Filter(message) => {
                match filter_panel::update(message, &mut self.filters_open, &self.filters) {
                    filter_panel::Event::None => (Effect::None, Task::none()),
                    filter_panel::Event::FiltersChanged(filters) => {
                        tracing::debug!(?filters, "filters changed");
                        self.filters = filters;
                        self.pages.reset();
                        (Effect::None, self.load(client, page_size))
                    }
                }
            }
            Message::PageSelected(page) => {
                if !self.pages.request(page) {
                    return (Effect::None, Task::none());
                }
                let load = self.load(client, page_size);
                (Effect::None, Task::batch([load, scroll_to_top()]))
            }
            Message::Grid(card_grid::Message::Open(id)) => {
                (Effect::Navigate(Route::CardDetail(id)), Task::none())
            }
            Message::Grid(card_grid::Message::ToggleFavorite(id)) => {
                (Effect::ToggleFavorite(id), Task::none())
            }
            Message::Grid(card_grid::Message::Retry) => (Effect::None, self.load(client, page_size)),
        }
    }

    /// Image URLs the current listing shows.
    #[must_use]
    pub fn image_urls(&self) -> Vec<&str> {
        self.cards
            .loaded()
            .map(|cards| card_grid::image_urls(cards).collect())
            .unwrap_or_default()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let hero = match &self.mode {
            Mode::Browse => status::hero(ctx.i18n.tr("home-title"), ctx.i18n.tr("home-subtitle")),
            Mode::Search(query) => status::hero(
                ctx.i18n
                    .tr_with_args("search-title", &[("query", query.as_str())]),
                self.search_summary(ctx.i18n),
            ),
        };

        let filters = filter_panel::view(filter_panel::ViewContext {
            i18n: ctx.i18n,
            filters: &self.filters,
            options: ctx.filter_options,
            open: self.filters_open,
        })
        .map(Message::Filter);

        let grid_ctx = card_grid::ViewContext {
            i18n: ctx.i18n,
            favorites: ctx.favorites,
            images: ctx.images,
            columns: ctx.columns,
        };
        let grid = card_grid::view(&grid_ctx, &self.cards, "cards-empty").map(Message::Grid);

        let mut content = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(hero)
            .push(filters)
            .push(grid);

        if self.cards.loaded().is_some_and(|cards| !cards.is_empty()) {
            content = content.push(page_switcher::view(
                ctx.i18n,
                &self.pages,
                Message::PageSelected,
            ));
        }

        content.into()
    }

    /// "Searching...", "Found n cards" (cards on this page) or "No cards found".
    fn search_summary(&self, i18n: &I18n) -> String {
        match &self.cards {
            LoadState::Idle | LoadState::Loading => i18n.tr("search-searching"),
            LoadState::Loaded(cards) if !cards.is_empty() => {
                i18n.tr_with_args("search-found", &[("count", &cards.len().to_string())])
            }
            LoadState::Loaded(_) | LoadState::Failed(_) => i18n.tr("search-none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ApiConfig;

    fn client() -> Client {
        Client::new(&ApiConfig::default()).expect("client builds")
    }

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                id: format!("xy1-{i}"),
                ..Card::default()
            })
            .collect()
    }

    fn loaded(state: &mut State, generation: Generation, total_count: u32, n: usize) {
        state.handle_message(
            Message::Loaded {
                generation,
                result: Ok(Page {
                    items: cards(n),
                    total_count,
                }),
            },
            &client(),
            20,
        );
    }

    #[test]
    fn blank_search_issues_no_request() {
        let mut state = State::new(Mode::Search("   ".into()));
        let _ = state.load(&client(), 20);
        assert_eq!(state.cards().loaded().map(Vec::len), Some(0));
    }

    #[test]
    fn response_sets_page_count() {
        let mut state = State::new(Mode::Browse);
        let mut tracker = GenerationTracker::new();
        let generation = tracker.next();
        state.generation = tracker;

        loaded(&mut state, generation, 95, 20);

        assert_eq!(state.pages().total(), 5);
        assert_eq!(state.cards().loaded().map(Vec::len), Some(20));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = State::new(Mode::Browse);
        let stale = state.generation.next();
        let fresh = state.generation.next();
        state.cards = LoadState::Loading;

        loaded(&mut state, stale, 40, 2);
        assert!(state.cards().is_loading());

        loaded(&mut state, fresh, 40, 3);
        assert_eq!(state.cards().loaded().map(Vec::len), Some(3));
    }

    #[test]
    fn failed_response_shows_error_state() {
        let mut state = State::new(Mode::Browse);
        let generation = state.generation.next();
        state.handle_message(
            Message::Loaded {
                generation,
                result: Err(Error::Http("cards: HTTP status 503".into())),
            },
            &client(),
            20,
        );
        assert_eq!(state.cards(), &LoadState::Failed("error-request-failed"));
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut state = State::new(Mode::Browse);
        state.pages.set_total(10);
        assert!(state.pages.request(4));

        let _ = state.handle_message(
            Message::Filter(filter_panel::Message::TypeChanged(Some("Fire".into()))),
            &client(),
            20,
        );

        assert_eq!(state.pages().current(), 1);
        assert_eq!(state.filters().types.as_deref(), Some("Fire"));
        assert!(state.cards().is_loading());
    }

    #[test]
    fn search_filter_change_also_resets_page() {
        let mut state = State::new(Mode::Search("pikachu".into()));
        state.pages.set_total(3);
        assert!(state.pages.request(3));

        let _ = state.handle_message(
            Message::Filter(filter_panel::Message::RarityChanged(Some("Rare".into()))),
            &client(),
            20,
        );

        assert_eq!(state.pages().current(), 1);
    }

    #[test]
    fn selecting_current_page_does_nothing() {
        let mut state = State::new(Mode::Browse);
        state.pages.set_total(3);
        state.cards = LoadState::Loaded(cards(2));

        let _ = state.handle_message(Message::PageSelected(1), &client(), 20);

        assert_eq!(state.cards().loaded().map(Vec::len), Some(2));
    }

    #[test]
    fn selecting_other_page_reloads() {
        let mut state = State::new(Mode::Browse);
        state.pages.set_total(3);
        state.cards = LoadState::Loaded(cards(2));

        let _ = state.handle_message(Message::PageSelected(2), &client(), 20);

        assert_eq!(state.pages().current(), 2);
        assert!(state.cards().is_loading());
    }

    #[test]
    fn grid_events_become_effects() {
        let mut state = State::new(Mode::Browse);
        let (effect, _) = state.handle_message(
            Message::Grid(card_grid::Message::Open("xy1-1".into())),
            &client(),
            20,
        );
        assert_eq!(effect, Effect::Navigate(Route::CardDetail("xy1-1".into())));

        let (effect, _) = state.handle_message(
            Message::Grid(card_grid::Message::ToggleFavorite("xy1-1".into())),
            &client(),
            20,
        );
        assert_eq!(effect, Effect::ToggleFavorite("xy1-1".into()));
    }
}
