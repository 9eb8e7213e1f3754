// SPDX-License-Identifier: MPL-2.0
//! Rarity tiers and their badge colors.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{container, text};
use iced::{Color, Element};

/// Visual tier of a rarity label. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RarityTier {
    Common,
    Uncommon,
    Rare,
    Holo,
    Rainbow,
    Amazing,
    Legendary,
}

impl RarityTier {
    /// Tier of `rarity`; unknown and missing labels fall back to common.
    #[must_use]
    pub fn of(rarity: Option<&str>) -> Self {
        let Some(rarity) = rarity else {
            return RarityTier::Common;
        };
        match rarity.to_lowercase().as_str() {
            "uncommon" => RarityTier::Uncommon,
            "rare" => RarityTier::Rare,
            "rare holo" | "rare ultra" | "rare secret" => RarityTier::Holo,
            "rare rainbow" => RarityTier::Rainbow,
            "amazing rare" => RarityTier::Amazing,
            "legendary" | "ultra rare" => RarityTier::Legendary,
            _ => RarityTier::Common,
        }
    }

    /// `(background, text)` of the badge.
    #[must_use]
    pub fn colors(self) -> (Color, Color) {
        match self {
            RarityTier::Common => (palette::GRAY_200, palette::GRAY_800),
            RarityTier::Uncommon => (palette::GREEN_100, palette::GREEN_800),
            RarityTier::Rare => (palette::BLUE_100, palette::BLUE_800),
            RarityTier::Holo => (palette::PURPLE_100, palette::PURPLE_800),
            RarityTier::Rainbow => (palette::PINK_100, palette::PINK_800),
            RarityTier::Amazing => (palette::INDIGO_100, palette::INDIGO_800),
            RarityTier::Legendary => (palette::YELLOW_100, palette::YELLOW_800),
        }
    }
}

/// Pill showing the rarity label in its tier colors. Renders nothing
/// visible for cards without a rarity.
pub fn badge<'a, Message: 'a>(rarity: Option<&'a str>) -> Element<'a, Message> {
    let (background, foreground) = RarityTier::of(rarity).colors();
    container(text(rarity.unwrap_or_default()).size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(container_styles::badge(background, foreground))
        .into()
}
