// SPDX-License-Identifier: MPL-2.0
//! Grid of card tiles with loading, error and empty states.

use crate::api::Card;
use crate::app::images::ImageCache;
use crate::favorites::FavoritesStore;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::ErrorPanel;
use crate::ui::components::status;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::LoadState;
use crate::ui::{format, rarity, styles};
use iced::widget::{button, text, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub favorites: &'a FavoritesStore,
    pub images: &'a ImageCache,
    pub columns: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(String),
    ToggleFavorite(String),
    Retry,
}

/// Small image URLs of `cards`, for prefetching.
pub fn image_urls(cards: &[Card]) -> impl Iterator<Item = &str> {
    cards.iter().filter_map(|card| card.images.small.as_deref())
}

/// Renders the grid for `state`. `empty_key` names the message shown when
/// the listing loaded with no cards.
pub fn view<'a>(
    ctx: &ViewContext<'a>,
    state: &'a LoadState<Vec<Card>>,
    empty_key: &str,
) -> Element<'a, Message> {
    match state {
        LoadState::Idle | LoadState::Loading => status::loading(ctx.i18n.tr("loading")),
        LoadState::Failed(key) => ErrorPanel::failed(
            ctx.i18n.tr("cards-error-title"),
            ctx.i18n.tr(key),
            ctx.i18n.tr("action-try-again"),
            Message::Retry,
        )
        .view(),
        LoadState::Loaded(cards) if cards.is_empty() => {
            status::empty_state(ctx.i18n.tr(empty_key), None, None)
        }
        LoadState::Loaded(cards) => grid(ctx, cards),
    }
}

/// Tiles for `cards`, `ctx.columns` per row.
pub fn grid<'a>(ctx: &ViewContext<'a>, cards: &'a [Card]) -> Element<'a, Message> {
    let columns = usize::try_from(ctx.columns.max(1)).unwrap_or(1);

    let rows = cards.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::LG);
        for card in chunk {
            row = row.push(
                Container::new(tile(ctx, card))
                    .width(Length::FillPortion(1))
                    .align_x(alignment::Horizontal::Center),
            );
        }
        // Pad the last row so its tiles keep the same width
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        Element::from(row)
    });

    Column::with_children(rows)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .into()
}

fn tile<'a>(ctx: &ViewContext<'a>, card: &'a Card) -> Element<'a, Message> {
    let image = status::remote_image(
        ctx.images,
        card.images.small.as_deref(),
        sizing::CARD_IMAGE_WIDTH,
        sizing::CARD_IMAGE_HEIGHT,
        card.name.clone(),
    );

    let is_favorite = ctx.favorites.contains(&card.id);
    let heart = button(Text::new(if is_favorite { "♥" } else { "♡" }).size(typography::BODY))
        .on_press(Message::ToggleFavorite(card.id.clone()))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::favorite(is_favorite));

    let mut overlay = Stack::new().push(image).push(
        Container::new(heart)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::XS),
    );

    if let Some(tag) = format::price_tag(card.average_sell_price()) {
        overlay = overlay.push(
            Container::new(
                Container::new(Text::new(tag).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::price_tag),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Left)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::XS),
        );
    }

    let info = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(card.name.as_str()).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(
                    Text::new(card.set.name.as_str())
                        .size(typography::CAPTION)
                        .width(Length::Fill)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().background.strong.text),
                        }),
                )
                .push(rarity::badge(card.rarity.as_deref())),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::CARD_IMAGE_WIDTH + 2.0 * spacing::SM))
        .align_x(alignment::Horizontal::Center)
        .push(overlay)
        .push(info);

    button(
        Container::new(content)
            .padding(spacing::SM)
            .style(styles::container::tile),
    )
    .on_press(Message::Open(card.id.clone()))
    .padding(0)
    .style(styles::button::tile)
    .into()
}
