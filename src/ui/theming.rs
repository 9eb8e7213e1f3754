// SPDX-License-Identifier: MPL-2.0
//! Color roles per theme, and the configured theme preference.
//!
//! Styles never pick palette entries for surfaces or text directly; they ask
//! [`Scheme::of`] so both the light and dark themes stay legible.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheme {
    /// Window and tile background.
    pub page: Color,
    /// Set apart from `page`: footer strips, placeholders, empty states.
    pub raised: Color,
    pub text: Color,
    pub muted: Color,
    pub faint: Color,
    /// Favorites and primary actions.
    pub brand: Color,
    /// Header band and active navigation.
    pub brand_strong: Color,
    /// Marketplace links.
    pub link: Color,
}

impl Scheme {
    pub const LIGHT: Scheme = Scheme {
        page: palette::WHITE,
        raised: palette::GRAY_100,
        text: palette::GRAY_900,
        muted: palette::GRAY_700,
        faint: palette::GRAY_400,
        brand: palette::PRIMARY_500,
        brand_strong: palette::PRIMARY_600,
        link: palette::SECONDARY_600,
    };

    pub const DARK: Scheme = Scheme {
        page: palette::GRAY_900,
        raised: palette::GRAY_800,
        text: palette::WHITE,
        muted: palette::GRAY_200,
        faint: palette::GRAY_400,
        brand: palette::PRIMARY_400,
        brand_strong: palette::PRIMARY_500,
        link: palette::SECONDARY_500,
    };

    /// The scheme for a resolved iced theme. Anything but light is dark.
    #[must_use]
    pub fn of(theme: &Theme) -> &'static Scheme {
        match theme {
            Theme::Light => &Self::LIGHT,
            _ => &Self::DARK,
        }
    }
}

/// The `theme_mode` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the desktop preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode to an iced theme. `System` reads the desktop
    /// preference each time and falls back to light when it cannot.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        let dark = match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        };
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(color: Color) -> f32 {
        0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
    }

    #[test]
    fn text_contrasts_with_page_in_both_schemes() {
        for scheme in [Scheme::LIGHT, Scheme::DARK] {
            assert!((luminance(scheme.page) - luminance(scheme.text)).abs() > 0.7);
        }
    }

    #[test]
    fn brand_stays_red() {
        for scheme in [Scheme::LIGHT, Scheme::DARK] {
            assert!(scheme.brand.r > scheme.brand.b);
            assert!(scheme.brand_strong.r > scheme.brand_strong.g);
        }
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(Scheme::of(&Theme::Light), &Scheme::LIGHT);
        assert_eq!(Scheme::of(&Theme::Dark), &Scheme::DARK);
        assert_eq!(Scheme::of(&Theme::Nord), &Scheme::DARK);
    }

    #[test]
    fn modes_resolve_to_light_or_dark() {
        assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
        assert!(matches!(ThemeMode::System.to_theme(), Theme::Light | Theme::Dark));
    }

    #[test]
    fn mode_uses_lowercase_names() {
        let encoded = serde_json::to_string(&ThemeMode::System).expect("encode");
        assert_eq!(encoded, "\"system\"");
    }
}
