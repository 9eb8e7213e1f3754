// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by every screen.
//!
//! Colors follow the Tailwind scale the catalog's web front-end was styled
//! with (`red-600` header, `blue-500` accents, pastel rarity badges), so a
//! screenshot of either reads as the same product. Lengths are logical
//! pixels on a 4 px grid.
//!
//! ```
//! use tcg_market::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! let gutter = spacing::MD;
//! # let _ = (scrim, gutter);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Tailwind `gray`.
    pub const GRAY_100: Color = Color::from_rgb8(0xF3, 0xF4, 0xF6);
    pub const GRAY_200: Color = Color::from_rgb8(0xE5, 0xE7, 0xEB);
    pub const GRAY_400: Color = Color::from_rgb8(0x9C, 0xA3, 0xAF);
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_800: Color = Color::from_rgb8(0x1F, 0x29, 0x37);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

    /// Brand red: header band, favorites, primary buttons.
    pub const PRIMARY_400: Color = Color::from_rgb8(0xF8, 0x71, 0x71);
    pub const PRIMARY_500: Color = Color::from_rgb8(0xEF, 0x44, 0x44);
    pub const PRIMARY_600: Color = Color::from_rgb8(0xDC, 0x26, 0x26);

    /// Brand blue: hero gradient end, marketplace links.
    pub const SECONDARY_500: Color = Color::from_rgb8(0x3B, 0x82, 0xF6);
    pub const SECONDARY_600: Color = Color::from_rgb8(0x25, 0x63, 0xEB);

    // Rarity badges: a `-100` background under `-800` text
    pub const GREEN_100: Color = Color::from_rgb8(0xDC, 0xFC, 0xE7);
    pub const GREEN_800: Color = Color::from_rgb8(0x16, 0x65, 0x34);
    pub const BLUE_100: Color = Color::from_rgb8(0xDB, 0xEA, 0xFE);
    pub const BLUE_800: Color = Color::from_rgb8(0x1E, 0x40, 0xAF);
    pub const PURPLE_100: Color = Color::from_rgb8(0xF3, 0xE8, 0xFF);
    pub const PURPLE_800: Color = Color::from_rgb8(0x6B, 0x21, 0xA8);
    pub const PINK_100: Color = Color::from_rgb8(0xFC, 0xE7, 0xF3);
    pub const PINK_800: Color = Color::from_rgb8(0x9D, 0x17, 0x4D);
    pub const INDIGO_100: Color = Color::from_rgb8(0xE0, 0xE7, 0xFF);
    pub const INDIGO_800: Color = Color::from_rgb8(0x37, 0x30, 0xA3);
    pub const YELLOW_100: Color = Color::from_rgb8(0xFE, 0xF9, 0xC3);
    pub const YELLOW_800: Color = Color::from_rgb8(0x85, 0x4D, 0x0E);

    // Status accents (toasts, error panels)
    pub const ERROR_500: Color = Color::from_rgb8(0xDC, 0x26, 0x26);
    pub const WARNING_500: Color = Color::from_rgb8(0xF5, 0x9E, 0x0B);
    pub const SUCCESS_500: Color = Color::from_rgb8(0x10, 0xB9, 0x81);
    pub const INFO_500: Color = Color::from_rgb8(0x0E, 0xA5, 0xE9);
}

/// Alpha values for overlays laid over artwork.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.15;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.75;
    /// Tiles and panels, barely see-through.
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

/// Gaps and paddings. Tailwind step in brackets.
pub mod spacing {
    pub const XXS: f32 = 4.0; // [1]
    pub const XS: f32 = 8.0; // [2]
    pub const SM: f32 = 12.0; // [3]
    pub const MD: f32 = 16.0; // [4]
    pub const LG: f32 = 24.0; // [6]
    pub const XL: f32 = 32.0; // [8]
    pub const XXL: f32 = 48.0; // [12]
}

pub mod sizing {
    // Glyph sizes (heart toggle, 404 heading)
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const SEARCH_INPUT_WIDTH: f32 = 240.0;
    pub const PAGE_BUTTON_WIDTH: f32 = 40.0;

    // Card art is printed at 63 x 88 mm
    pub const CARD_IMAGE_WIDTH: f32 = 180.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 252.0;
    pub const DETAIL_IMAGE_WIDTH: f32 = 360.0;
    pub const DETAIL_IMAGE_HEIGHT: f32 = 504.0;

    pub const SET_LOGO_HEIGHT: f32 = 96.0;
    pub const PRICE_PANEL_WIDTH: f32 = 300.0;

    /// Widest the page content grows before it is centered.
    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Banner headline on listing screens.
    pub const HERO: f32 = 36.0;
    /// Card name, About heading.
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    /// Section headings inside the card detail.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Badges, prices, tile captions.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pills and round buttons.
    pub const FULL: f32 = 9999.0;
}

/// Drop shadows modelled on Tailwind's `shadow-sm` / `shadow-md`.
pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const fn drop(alpha: f32, y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: Color {
                a: alpha,
                ..palette::BLACK
            },
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0, 0.0);
    pub const SM: Shadow = drop(0.08, 1.0, 3.0);
    pub const MD: Shadow = drop(0.12, 4.0, 8.0);
}

const fn strictly_ascending(scale: &[f32]) -> bool {
    let mut i = 1;
    while i < scale.len() {
        if scale[i] <= scale[i - 1] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    assert!(strictly_ascending(&[
        spacing::XXS,
        spacing::XS,
        spacing::SM,
        spacing::MD,
        spacing::LG,
        spacing::XL,
        spacing::XXL,
    ]));
    assert!(strictly_ascending(&[
        typography::CAPTION,
        typography::BODY_SM,
        typography::BODY,
        typography::BODY_LG,
        typography::TITLE_SM,
        typography::TITLE_MD,
        typography::TITLE_LG,
        typography::HERO,
    ]));
    assert!(strictly_ascending(&[
        opacity::TRANSPARENT,
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
        opacity::SURFACE,
        opacity::OPAQUE,
    ]));
    assert!(strictly_ascending(&[sizing::ICON_MD, sizing::ICON_LG, sizing::ICON_XL]));
    assert!(strictly_ascending(&[radius::SM, radius::MD, radius::LG, radius::FULL]));
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
