// SPDX-License-Identifier: MPL-2.0
//! Previous / numbered / next page buttons under a listing.

use crate::i18n::fluent::I18n;
use crate::pagination::{PageEntry, PageState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the switcher for `state`; `on_page` builds the message for a
/// page button. The current page and ellipsis markers are inert, as are
/// *Previous* on the first page and *Next* on the last.
pub fn view<'a, Message: Clone + 'a>(
    i18n: &I18n,
    state: &PageState,
    on_page: impl Fn(u32) -> Message,
) -> Element<'a, Message> {
    let current = state.current();

    let mut previous = button(Text::new(i18n.tr("pagination-previous")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::outline);
    if state.has_previous() {
        previous = previous.on_press(on_page(current - 1));
    }

    let mut next = button(Text::new(i18n.tr("pagination-next")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::outline);
    if state.has_next() {
        next = next.on_press(on_page(current + 1));
    }

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(previous);

    for entry in state.window() {
        let label = Container::new(Text::new(entry.to_string()).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);
        let page_button = button(label)
            .width(Length::Fixed(sizing::PAGE_BUTTON_WIDTH))
            .padding([spacing::XS, 0.0]);

        row = row.push(match entry {
            PageEntry::Page(page) if page == current => page_button.style(styles::button::current_page),
            PageEntry::Page(page) => page_button
                .on_press(on_page(page))
                .style(styles::button::outline),
            PageEntry::Ellipsis => page_button.style(styles::button::outline),
        });
    }

    let row = row.push(next);

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::MD)
        .into()
}
