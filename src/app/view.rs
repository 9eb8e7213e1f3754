// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! between the header and the footer, with toasts stacked on top.

use super::images::ImageCache;
use super::route::Route;
use super::{Message, Screen};
use crate::api::FilterOptions;
use crate::favorites::FavoritesStore;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::effect::CONTENT_SCROLLABLE_ID;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::not_found::{self, ViewContext as NotFoundViewContext};
use crate::ui::notifications::{self, Toasts};
use crate::ui::{card_detail, catalog, favorites, sets, styles};
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container, Id, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub current: &'a Route,
    pub search_input: &'a str,
    pub favorites: &'a FavoritesStore,
    pub images: &'a ImageCache,
    pub filter_options: &'a FilterOptions,
    pub notifications: &'a Toasts,
    pub columns: u32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.current,
        search_input: ctx.search_input,
    })
    .map(Message::Navbar);

    let content = Container::new(view_screen(&ctx))
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(spacing::LG);

    let body = scrollable(
        Column::new()
            .width(Length::Fill)
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .push(footer(ctx.i18n)),
    )
    .id(Id::new(CONTENT_SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill);

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body);

    let toasts = notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toasts)
        .into()
}

fn view_screen<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.screen {
        Screen::Catalog(state) => state
            .view(catalog::ViewContext {
                i18n: ctx.i18n,
                favorites: ctx.favorites,
                images: ctx.images,
                filter_options: ctx.filter_options,
                columns: ctx.columns,
            })
            .map(Message::Catalog),
        Screen::Sets(state) => state
            .view(sets::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
                columns: ctx.columns,
            })
            .map(Message::Sets),
        Screen::Favorites(state) => state
            .view(favorites::ViewContext {
                i18n: ctx.i18n,
                favorites: ctx.favorites,
                images: ctx.images,
                columns: ctx.columns,
            })
            .map(Message::Favorites),
        Screen::CardDetail(state) => state
            .view(card_detail::ViewContext {
                i18n: ctx.i18n,
                favorites: ctx.favorites,
                images: ctx.images,
            })
            .map(Message::CardDetail),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }),
        Screen::NotFound(path) => not_found::view(NotFoundViewContext {
            i18n: ctx.i18n,
            path,
        })
        .map(Message::NotFound),
    }
}

fn footer<'a>(i18n: &I18n) -> Element<'a, Message> {
    let year = chrono::Local::now().year().to_string();

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr_with_args("footer-copyright", &[("year", year.as_str())]))
                .size(typography::BODY_SM),
        )
        .push(Text::new(i18n.tr("footer-built-with")).size(typography::BODY_SM));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .style(styles::container::footer)
        .into()
}
