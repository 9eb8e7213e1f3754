// SPDX-License-Identifier: MPL-2.0
//! Paginated list of every set, newest first.

use crate::api::{CardSet, Client, Page};
use crate::app::images::ImageCache;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::pagination::{total_pages_for, PageState};
use crate::ui::components::status;
use crate::ui::design_tokens::spacing;
use crate::ui::effect::scroll_to_top;
use crate::ui::state::{Generation, GenerationTracker, LoadState};
use crate::ui::{page_switcher, set_grid};
use iced::widget::Column;
use iced::{Element, Length, Task};

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        generation: Generation,
        result: Result<Page<CardSet>, Error>,
    },
    Grid(set_grid::Message),
    PageSelected(u32),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub columns: u32,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pages: PageState,
    sets: LoadState<Vec<CardSet>>,
    generation: GenerationTracker,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sets(&self) -> &LoadState<Vec<CardSet>> {
        &self.sets
    }

    #[must_use]
    pub fn pages(&self) -> &PageState {
        &self.pages
    }

    pub fn load(&mut self, client: &Client, page_size: u32) -> Task<Message> {
        let generation = self.generation.next();
        let page = self.pages.current();
        self.sets = LoadState::Loading;

        let client = client.clone();
        Task::perform(
            async move { client.set_page(page, page_size).await },
            move |result| Message::Loaded { generation, result },
        )
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        client: &Client,
        page_size: u32,
    ) -> Task<Message> {
        match message {
            Message::Loaded { generation, result } => {
                if self.generation.accept(generation, "sets") {
                    let result = result.map(|page| {
                        self.pages
                            .set_total(total_pages_for(page.total_count, page_size));
                        page.items
                    });
                    self.sets.settle(result);
                }
                Task::none()
            }
            Message::PageSelected(page) => {
                if !self.pages.request(page) {
                    return Task::none();
                }
                Task::batch([self.load(client, page_size), scroll_to_top()])
            }
            Message::Grid(set_grid::Message::Retry) => self.load(client, page_size),
        }
    }

    #[must_use]
    pub fn image_urls(&self) -> Vec<&str> {
        self.sets
            .loaded()
            .map(|sets| set_grid::image_urls(sets).collect())
            .unwrap_or_default()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let grid_ctx = set_grid::ViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
            columns: ctx.columns,
        };

        let mut content = Column::new()
            .spacing(spacing::LG)
            .width(Length::Fill)
            .push(status::hero(
                ctx.i18n.tr("sets-title"),
                ctx.i18n.tr("sets-subtitle"),
            ))
            .push(set_grid::view(&grid_ctx, &self.sets).map(Message::Grid));

        if self.sets.loaded().is_some_and(|sets| !sets.is_empty()) {
            content = content.push(page_switcher::view(
                ctx.i18n,
                &self.pages,
                Message::PageSelected,
            ));
        }

        content.into()
    }
}
