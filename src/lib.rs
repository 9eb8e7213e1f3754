// SPDX-License-Identifier: MPL-2.0
//! `tcg_market` is a desktop catalog of the Pokémon Trading Card Game built
//! with the Iced GUI framework.
//!
//! It browses cards and sets from the public Pokémon TCG API with
//! pagination and filters, searches cards by name, shows card details with
//! market prices, and keeps a locally persisted list of favorite cards.

#![doc(html_root_url = "https://docs.rs/tcg_market/0.1.0")]

pub mod api;
pub mod app;
pub mod error;
pub mod favorites;
pub mod i18n;
pub mod pagination;
pub mod storage;
pub mod ui;
