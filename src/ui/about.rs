// SPDX-License-Identifier: MPL-2.0
//! About screen: application name and version, what the app is for, where
//! its data comes from, and the non-affiliation notice.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{rule, Column, Container, Row, Text},
    Element, Length,
};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Home page of the catalog API.
pub const API_URL: &str = "https://pokemontcg.io/";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the about screen. It has no interactive elements, so it fits any
/// message type.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::HERO))
        .push(Text::new(format!("v{APP_VERSION}")).size(typography::BODY));

    let credit = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("about-api-credit")).size(typography::BODY_LG))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new(format!("{}:", ctx.i18n.tr("about-api-link"))).size(typography::BODY))
                .push(Text::new(API_URL).size(typography::BODY)),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(rule::horizontal(1))
        .push(Text::new(ctx.i18n.tr("about-purpose")).size(typography::BODY_LG))
        .push(credit)
        .push(Text::new(ctx.i18n.tr("about-disclaimer")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .align_x(Horizontal::Center)
        .style(styles::container::hero)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_for_any_message_type() {
        let i18n = I18n::default();
        let _unit: Element<'_, ()> = view(ViewContext { i18n: &i18n });
        let _text: Element<'_, String> = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
        assert!(APP_VERSION.split('.').count() >= 3);
    }

    #[test]
    fn api_url_is_https() {
        assert!(API_URL.starts_with("https://"));
    }
}
