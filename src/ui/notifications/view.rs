// SPDX-License-Identifier: MPL-2.0
use super::stack::{Message, Toasts};
use super::toast::Toast;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Column of shown toasts pinned to the bottom-right corner.
///
/// Renders an empty zero-size element when nothing is shown so it can sit
/// permanently in the window's top layer.
pub fn overlay<'a>(toasts: &'a Toasts, i18n: &'a I18n) -> Element<'a, Message> {
    if toasts.shown().is_empty() {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    let column = toasts
        .shown()
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, toast| {
            column.push(card(toast, i18n))
        })
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn card<'a>(toast: &'a Toast, i18n: &I18n) -> Element<'a, Message> {
    let accent = toast.level().accent();

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(toast.level().glyph())
                .size(typography::TITLE_SM)
                .color(accent),
        )
        .push(
            Text::new(i18n.tr(toast.key()))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(typography::TITLE_SM))
                .padding([0.0, spacing::XS])
                .on_press(Message::Close(toast.id()))
                .style(close_style),
        );

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

fn close_style(theme: &Theme, status: button::Status) -> button::Style {
    let highlight = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: highlight.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_border_takes_the_level_accent() {
        let style = card_style(&Theme::Dark, palette::WARNING_500);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn close_button_is_flat_until_hovered() {
        assert!(close_style(&Theme::Light, button::Status::Active).background.is_none());
        assert!(close_style(&Theme::Light, button::Status::Hovered).background.is_some());
    }
}
