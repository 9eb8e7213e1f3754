// SPDX-License-Identifier: MPL-2.0
//! Backgrounds and frames for `container` widgets.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::Scheme;
use iced::gradient::{self, Gradient};
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Theme};

/// Translucent surface behind the filter panel and the detail sections.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Recessed block inside a panel (price table, attack entry).
pub fn section(theme: &Theme) -> container::Style {
    let colors = Scheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.raised)),
        text_color: Some(colors.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card and set tiles in the catalog grids.
pub fn tile(theme: &Theme) -> container::Style {
    let colors = Scheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.page)),
        text_color: Some(colors.text),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Red header band carrying the title, search box and links.
pub fn header(theme: &Theme) -> container::Style {
    let colors = Scheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_strong)),
        text_color: Some(palette::WHITE),
        shadow: shadow::MD,
        ..Default::default()
    }
}

pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Red-to-blue banner on top of listing screens.
pub fn hero(_theme: &Theme) -> container::Style {
    let gradient = gradient::Linear::new(Degrees(90.0))
        .add_stop(0.0, palette::PRIMARY_500)
        .add_stop(1.0, palette::SECONDARY_500);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Pill badge with explicit colors (rarity, attack damage).
pub fn badge(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Average sell price tag overlaid on a card tile.
pub fn price_tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder drawn while an image is loading or after it failed.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let colors = Scheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.raised)),
        text_color: Some(colors.faint),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_given_colors() {
        let style = badge(palette::GREEN_100, palette::GREEN_800)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::GREEN_100))
        );
        assert_eq!(style.text_color, Some(palette::GREEN_800));
    }

    #[test]
    fn hero_is_a_gradient_with_white_text() {
        let style = hero(&Theme::Light);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn tile_follows_theme_surface() {
        let light = tile(&Theme::Light);
        let dark = tile(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
