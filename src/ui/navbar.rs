// SPDX-License-Identifier: MPL-2.0
//! Header bar with the app title, the search box and the main links.

use crate::app::route::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: &'a Route,
    pub search_input: &'a str,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    SearchSubmitted,
    Navigate(Route),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Route),
}

/// Process a navbar message and return the corresponding event.
///
/// Submitting trims the input; blank input is ignored, anything else
/// navigates to the search route and clears the box.
pub fn update(message: Message, search_input: &mut String) -> Event {
    match message {
        Message::SearchChanged(value) => {
            *search_input = value;
            Event::None
        }
        Message::SearchSubmitted => {
            let query = search_input.trim();
            if query.is_empty() {
                return Event::None;
            }
            let route = Route::Search(query.to_string());
            search_input.clear();
            Event::Navigate(route)
        }
        Message::Navigate(route) => Event::Navigate(route),
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = button(
        Text::new(ctx.i18n.tr("app-title"))
            .size(typography::TITLE_MD)
            .color(iced::Color::WHITE),
    )
    .on_press(Message::Navigate(Route::Home))
    .style(styles::button::nav_link(false))
    .padding(spacing::XXS);

    let search = text_input(&ctx.i18n.tr("search-placeholder"), ctx.search_input)
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchSubmitted)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_INPUT_WIDTH));

    let links = [
        (Route::Home, "nav-home"),
        (Route::Sets, "nav-sets"),
        (Route::Favorites, "nav-favorites"),
        (Route::About, "nav-about"),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (route, key)| {
        let active = *ctx.current == route;
        row.push(
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .on_press(Message::Navigate(route))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::nav_link(active)),
        )
    });

    let bar = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(search)
        .push(links);

    Container::new(bar)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_and_clears_input() {
        let mut input = "  charizard ".to_string();
        let event = update(Message::SearchSubmitted, &mut input);

        assert_eq!(event, Event::Navigate(Route::Search("charizard".into())));
        assert!(input.is_empty());
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut input = "   ".to_string();
        let event = update(Message::SearchSubmitted, &mut input);

        assert_eq!(event, Event::None);
        assert_eq!(input, "   ");
    }

    #[test]
    fn typing_updates_input() {
        let mut input = String::new();
        let event = update(Message::SearchChanged("pika".into()), &mut input);
        assert_eq!(event, Event::None);
        assert_eq!(input, "pika");
    }

    #[test]
    fn links_navigate() {
        let mut input = String::new();
        assert_eq!(
            update(Message::Navigate(Route::Sets), &mut input),
            Event::Navigate(Route::Sets)
        );
    }
}
