// SPDX-License-Identifier: MPL-2.0
//! Collapsible set / type / rarity filter panel for card listings.
//!
//! The panel never owns the filters: every change is reported as a
//! complete replacement so the listing can reset to its first page.

use crate::api::{FilterOptions, Filters};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub filters: &'a Filters,
    pub options: &'a FilterOptions,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleOpen,
    SetChanged(Option<String>),
    TypeChanged(Option<String>),
    RarityChanged(Option<String>),
    ClearAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    FiltersChanged(Filters),
}

/// Applies a panel message. `open` is the panel's own collapse state.
pub fn update(message: Message, open: &mut bool, filters: &Filters) -> Event {
    let mut next = filters.clone();
    match message {
        Message::ToggleOpen => {
            *open = !*open;
            return Event::None;
        }
        Message::SetChanged(set) => next.set = set,
        Message::TypeChanged(types) => next.types = types,
        Message::RarityChanged(rarity) => next.rarity = rarity,
        Message::ClearAll => next = Filters::default(),
    }
    Event::FiltersChanged(next)
}

/// One pick list entry; `value` is `None` for the "All" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Choice {
    value: Option<String>,
    label: String,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

fn choices(all_label: String, entries: impl Iterator<Item = (String, String)>) -> Vec<Choice> {
    std::iter::once(Choice {
        value: None,
        label: all_label,
    })
    .chain(entries.map(|(value, label)| Choice {
        value: Some(value),
        label,
    }))
    .collect()
}

fn selected(options: &[Choice], current: Option<&String>) -> Option<Choice> {
    let current = current.filter(|v| !v.is_empty());
    options
        .iter()
        .find(|choice| choice.value.as_ref() == current)
        .cloned()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("filters-title"))
        .size(typography::TITLE_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        });

    let mut header = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(title)
        .push(Space::new().width(Length::Fill));

    if ctx.filters.is_active() {
        header = header.push(
            button(Text::new(ctx.i18n.tr("filters-clear-all")).size(typography::BODY_SM))
                .on_press(Message::ClearAll)
                .style(styles::button::text_link),
        );
    }

    let toggle_label = if ctx.open {
        ctx.i18n.tr("filters-hide")
    } else {
        ctx.i18n.tr("filters-show")
    };
    header = header.push(
        button(Text::new(toggle_label).size(typography::BODY_SM))
            .on_press(Message::ToggleOpen)
            .style(styles::button::outline),
    );

    let mut content = Column::new().spacing(spacing::MD).push(header);

    if ctx.open {
        let sets = choices(
            ctx.i18n.tr("filters-all-sets"),
            ctx.options
                .sets
                .iter()
                .map(|set| (set.id.clone(), set.name.clone())),
        );
        let types = choices(
            ctx.i18n.tr("filters-all-types"),
            ctx.options.types.iter().map(|t| (t.clone(), t.clone())),
        );
        let rarities = choices(
            ctx.i18n.tr("filters-all-rarities"),
            ctx.options.rarities.iter().map(|r| (r.clone(), r.clone())),
        );

        let set_selected = selected(&sets, ctx.filters.set.as_ref());
        let type_selected = selected(&types, ctx.filters.types.as_ref());
        let rarity_selected = selected(&rarities, ctx.filters.rarity.as_ref());

        let pickers = Row::new()
            .spacing(spacing::MD)
            .push(labeled(
                ctx.i18n.tr("filters-set"),
                pick_list(sets, set_selected, |choice: Choice| {
                    Message::SetChanged(choice.value)
                })
                .padding(spacing::XS)
                .width(Length::Fill),
            ))
            .push(labeled(
                ctx.i18n.tr("filters-type"),
                pick_list(types, type_selected, |choice: Choice| {
                    Message::TypeChanged(choice.value)
                })
                .padding(spacing::XS)
                .width(Length::Fill),
            ))
            .push(labeled(
                ctx.i18n.tr("filters-rarity"),
                pick_list(rarities, rarity_selected, |choice: Choice| {
                    Message::RarityChanged(choice.value)
                })
                .padding(spacing::XS)
                .width(Length::Fill),
            ));
        content = content.push(pickers);
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn labeled<'a>(label: String, picker: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(picker)
        .into()
}
