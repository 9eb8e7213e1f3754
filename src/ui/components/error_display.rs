// SPDX-License-Identifier: MPL-2.0
//! Panel replacing a screen's content when it has nothing to show.
//!
//! Every panel carries exactly one action, because each place that shows one
//! has a way out: listings retry, the card detail goes back.

use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, Column, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

const PANEL_MAX_WIDTH: f32 = 480.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A request failed.
    Failure,
    /// The request worked but the item does not exist.
    Missing,
}

impl Tone {
    fn accent(self) -> Color {
        match self {
            Tone::Failure => palette::ERROR_500,
            Tone::Missing => palette::INFO_500,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Tone::Failure => "!",
            Tone::Missing => "?",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorPanel<Message> {
    tone: Tone,
    title: String,
    detail: Option<String>,
    action: (String, Message),
}

impl<Message: Clone + 'static> ErrorPanel<Message> {
    /// A failed request: `title` names what failed, `detail` explains it.
    pub fn failed(title: String, detail: String, label: String, on_press: Message) -> Self {
        Self {
            tone: Tone::Failure,
            title,
            detail: Some(detail),
            action: (label, on_press),
        }
    }

    pub fn missing(title: String, label: String, on_press: Message) -> Self {
        Self {
            tone: Tone::Missing,
            title,
            detail: None,
            action: (label, on_press),
        }
    }

    /// Renders the panel centered horizontally in the available width.
    pub fn view(self) -> Element<'static, Message> {
        let accent = self.tone.accent();
        let (label, on_press) = self.action;

        let mut body = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(self.tone.glyph()).size(typography::HERO).color(accent))
            .push(Text::new(self.title).size(typography::TITLE_MD).color(accent));
        if let Some(detail) = self.detail {
            body = body.push(Text::new(detail).size(typography::BODY));
        }
        body = body.push(
            button(Text::new(label))
                .on_press(on_press)
                .padding([spacing::XS, spacing::MD])
                .style(button_styles::primary),
        );

        let panel = Container::new(body)
            .width(Length::Fill)
            .max_width(PANEL_MAX_WIDTH)
            .padding(spacing::LG)
            .style(panel_style);

        Container::new(panel)
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

fn panel_style(theme: &Theme) -> container::Style {
    let background = theme.extended_palette().background;
    container::Style {
        background: Some(Background::Color(background.weak.color)),
        text_color: Some(background.weak.text),
        border: Border {
            color: background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
        Back,
    }

    #[test]
    fn failed_panel_keeps_detail_and_action() {
        let panel = ErrorPanel::failed(
            "Error loading cards".into(),
            "The request failed".into(),
            "Try again".into(),
            TestMessage::Retry,
        );
        assert_eq!(panel.tone, Tone::Failure);
        assert_eq!(panel.detail.as_deref(), Some("The request failed"));
        assert_eq!(panel.action, ("Try again".to_string(), TestMessage::Retry));
    }

    #[test]
    fn missing_panel_has_no_detail() {
        let panel = ErrorPanel::missing("Card not found.".into(), "Go Back".into(), TestMessage::Back);
        assert_eq!(panel.tone, Tone::Missing);
        assert!(panel.detail.is_none());
    }

    #[test]
    fn tones_are_told_apart() {
        assert_ne!(Tone::Failure.accent(), Tone::Missing.accent());
        assert_ne!(Tone::Failure.glyph(), Tone::Missing.glyph());
    }
}
