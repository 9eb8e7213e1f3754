// SPDX-License-Identifier: MPL-2.0
//! Catch-all screen for unknown routes.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::Scheme;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The path that matched no route.
    pub path: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GoHome,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new("404")
                .size(typography::HERO * 2.0)
                .style(|theme: &Theme| text::Style {
                    color: Some(Scheme::of(theme).brand),
                }),
        )
        .push(Text::new(ctx.i18n.tr("not-found-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("not-found-message")).size(typography::BODY_LG))
        .push(Text::new(ctx.path).size(typography::CAPTION))
        .push(
            button(Text::new(ctx.i18n.tr("not-found-go-home")))
                .on_press(Message::GoHome)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL * 1.5, spacing::MD])
        .align_x(alignment::Horizontal::Center)
        .into()
}
