// SPDX-License-Identifier: MPL-2.0
//! Grid of set tiles.

use crate::api::CardSet;
use crate::app::images::ImageCache;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::ErrorPanel;
use crate::ui::components::status;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::LoadState;
use crate::ui::{format, styles};
use iced::widget::{text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
    pub columns: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Retry,
}

/// Logo (or symbol) URLs of `sets`, for prefetching.
pub fn image_urls(sets: &[CardSet]) -> impl Iterator<Item = &str> {
    sets.iter().filter_map(CardSet::display_image)
}

pub fn view<'a>(ctx: &ViewContext<'a>, state: &'a LoadState<Vec<CardSet>>) -> Element<'a, Message> {
    let sets = match state {
        LoadState::Idle | LoadState::Loading => return status::loading(ctx.i18n.tr("loading")),
        LoadState::Failed(key) => {
            return ErrorPanel::failed(
                ctx.i18n.tr("sets-error-title"),
                ctx.i18n.tr(key),
                ctx.i18n.tr("action-try-again"),
                Message::Retry,
            )
            .view()
        }
        LoadState::Loaded(sets) if sets.is_empty() => {
            return status::empty_state(ctx.i18n.tr("sets-empty"), None, None)
        }
        LoadState::Loaded(sets) => sets,
    };

    let columns = usize::try_from(ctx.columns.max(1)).unwrap_or(1);
    let rows = sets.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::LG);
        for set in chunk {
            row = row.push(Container::new(tile(ctx, set)).width(Length::FillPortion(1)));
        }
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

fn tile<'a>(ctx: &ViewContext<'a>, set: &'a CardSet) -> Element<'a, Message> {
    let logo = Container::new(status::remote_image(
        ctx.images,
        set.display_image(),
        sizing::CARD_IMAGE_WIDTH,
        sizing::SET_LOGO_HEIGHT,
        set.name.clone(),
    ))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .padding(spacing::MD);

    let secondary = |theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    };

    let total = set
        .total
        .map(|total| {
            ctx.i18n
                .tr_with_args("sets-card-count", &[("count", &total.to_string())])
        })
        .unwrap_or_default();

    let mut info = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(set.name.as_str()).size(typography::BODY))
        .push(
            Row::new()
                .push(
                    Text::new(set.series.as_str())
                        .size(typography::CAPTION)
                        .width(Length::Fill)
                        .style(secondary),
                )
                .push(Text::new(total).size(typography::CAPTION).style(secondary)),
        );

    if let Some(date) = format::release_date(set) {
        info = info.push(
            Text::new(
                ctx.i18n
                    .tr_with_args("sets-released", &[("date", date.as_str())]),
            )
            .size(typography::CAPTION)
            .style(secondary),
        );
    }

    Container::new(Column::new().spacing(spacing::SM).push(logo).push(info))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::tile)
        .into()
}
