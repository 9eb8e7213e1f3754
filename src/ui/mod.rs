// SPDX-License-Identifier: MPL-2.0
//! Screens, widgets and styling.
//!
//! Each screen owns its load state, turns its own messages into an
//! [`effect::Effect`] for the application, and renders from a borrowed
//! `ViewContext`. Cross-screen concerns (navigation, favorites) only travel
//! through effects.
//!
//! Screens: [`catalog`] (home and search), [`sets`], [`favorites`],
//! [`card_detail`], [`about`] and [`not_found`]. The listing widgets they
//! share are [`card_grid`], [`set_grid`], [`filter_panel`] and
//! [`page_switcher`].

pub mod about;
pub mod card_detail;
pub mod card_grid;
pub mod catalog;
pub mod components;
pub mod design_tokens;
pub mod effect;
pub mod favorites;
pub mod filter_panel;
pub mod format;
pub mod navbar;
pub mod not_found;
pub mod notifications;
pub mod page_switcher;
pub mod rarity;
pub mod set_grid;
pub mod sets;
pub mod state;
pub mod styles;
pub mod theming;
