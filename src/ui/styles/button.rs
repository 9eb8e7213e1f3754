// SPDX-License-Identifier: MPL-2.0
//! Button styles.
//!
//! Stateless styles are plain functions; styles depending on view state
//! (active link, favorite flag) return closures.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::Scheme;
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

fn shape(background: Option<Color>, text_color: Color, edge: Option<Color>, corner: f32, shadow: Shadow) -> Style {
    Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            color: edge.unwrap_or(Color::TRANSPARENT),
            width: if edge.is_some() { border::WIDTH_SM } else { 0.0 },
            radius: corner.into(),
        },
        shadow,
        snap: true,
    }
}

/// Solid red call to action (*Try again*, *Go Home*, *Add to Favorites*).
pub fn primary(_theme: &Theme, status: Status) -> Style {
    match status {
        Status::Hovered => shape(
            Some(palette::PRIMARY_600),
            palette::WHITE,
            Some(palette::PRIMARY_600),
            radius::SM,
            shadow::MD,
        ),
        Status::Disabled => shape(
            Some(palette::GRAY_200),
            palette::GRAY_400,
            Some(palette::GRAY_400),
            radius::SM,
            shadow::NONE,
        ),
        Status::Active | Status::Pressed => shape(
            Some(palette::PRIMARY_500),
            palette::WHITE,
            Some(palette::PRIMARY_600),
            radius::SM,
            shadow::SM,
        ),
    }
}

/// Page switcher button of the page being shown. It is disabled, so it
/// would otherwise render greyed out.
pub fn current_page(theme: &Theme, status: Status) -> Style {
    match status {
        Status::Disabled => Style {
            shadow: shadow::NONE,
            ..primary(theme, Status::Active)
        },
        _ => primary(theme, status),
    }
}

/// Bordered secondary action on the page surface: other pages, filter
/// toggle, *Remove from Favorites*.
pub fn outline(theme: &Theme, status: Status) -> Style {
    let colors = Scheme::of(theme);
    match status {
        Status::Hovered => shape(
            Some(colors.raised),
            colors.text,
            Some(palette::PRIMARY_500),
            radius::SM,
            shadow::SM,
        ),
        Status::Disabled => shape(
            Some(colors.raised),
            colors.faint,
            Some(colors.faint),
            radius::SM,
            shadow::NONE,
        ),
        Status::Active | Status::Pressed => shape(
            Some(colors.page),
            colors.text,
            Some(colors.faint),
            radius::SM,
            shadow::NONE,
        ),
    }
}

/// Link in the red header band; the current route is outlined.
pub fn nav_link(active: bool) -> impl Fn(&Theme, Status) -> Style {
    move |_theme: &Theme, status: Status| {
        let lit = active || matches!(status, Status::Hovered);
        let text_color = if lit {
            palette::WHITE
        } else {
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            }
        };
        let edge = active.then_some(palette::WHITE);
        shape(None, text_color, edge, radius::SM, shadow::NONE)
    }
}

/// Invisible wrapper around a catalog tile; lifts it on hover.
pub fn tile(_theme: &Theme, status: Status) -> Style {
    let lift = match status {
        Status::Hovered => shadow::MD,
        _ => shadow::NONE,
    };
    shape(None, Color::TRANSPARENT, None, radius::MD, lift)
}

/// Round heart toggle, filled red while the card is a favorite.
pub fn favorite(is_favorite: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let colors = Scheme::of(theme);
        let (fill, glyph) = if is_favorite {
            (palette::PRIMARY_500, palette::WHITE)
        } else {
            (colors.page, colors.muted)
        };
        let edge = match status {
            Status::Hovered => palette::PRIMARY_500,
            _ => palette::GRAY_200,
        };
        shape(Some(fill), glyph, Some(edge), radius::FULL, shadow::SM)
    }
}

/// Bare text action such as *Back to results*.
pub fn text_link(theme: &Theme, status: Status) -> Style {
    let colors = Scheme::of(theme);
    let text_color = match status {
        Status::Hovered => colors.brand_strong,
        _ => colors.muted,
    };
    shape(None, text_color, None, 0.0, shadow::NONE)
}
