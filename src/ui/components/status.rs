// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the catalog screens: hero banner, loading and
//! empty states, and remote images with a placeholder.

use crate::app::images::{ImageCache, ImageSlot};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Gradient banner with a title and a subtitle.
pub fn hero<'a, Message: 'a>(title: String, subtitle: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(title).size(typography::HERO))
        .push(Text::new(subtitle).size(typography::BODY_LG));

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::MD])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::hero)
        .into()
}

/// Centered loading label.
pub fn loading<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fixed(256.0))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Centered empty-state message with an optional subtitle and action.
pub fn empty_state<'a, Message: Clone + 'a>(
    title: String,
    subtitle: Option<String>,
    action: Option<(String, Message)>,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_SM));

    if let Some(subtitle) = subtitle {
        content = content.push(Text::new(subtitle).size(typography::BODY));
    }
    if let Some((label, message)) = action {
        content = content.push(
            button(Text::new(label))
                .on_press(message)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Image at `url` from the cache, or a fixed-size placeholder while it
/// loads, after it failed, or when there is no URL at all.
pub fn remote_image<'a, Message: 'a>(
    images: &ImageCache,
    url: Option<&str>,
    width: f32,
    height: f32,
    placeholder: String,
) -> Element<'a, Message> {
    match url.and_then(|url| images.get(url)) {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(ImageSlot::Loading | ImageSlot::Failed) | None => {
            Container::new(Text::new(placeholder).size(typography::CAPTION))
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::image_placeholder)
                .into()
        }
    }
}
