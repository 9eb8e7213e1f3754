// SPDX-License-Identifier: MPL-2.0
//! The root message type and the command-line flags.

use crate::api::FilterOptions;
use crate::error::Error;
use crate::ui::navbar;
use crate::ui::not_found;
use crate::ui::notifications;
use crate::ui::{card_detail, catalog, favorites, sets};
use std::time::Instant;

/// Everything `App::update` reacts to. Screen and widget messages arrive
/// wrapped in the variant of the component that produced them.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Catalog(catalog::Message),
    Sets(sets::Message),
    Favorites(favorites::Message),
    CardDetail(card_detail::Message),
    NotFound(not_found::Message),
    Notification(notifications::Message),
    /// Sets, types and rarities for the filter panel, fetched once at startup.
    FilterOptionsLoaded(Result<FilterOptions, Error>),
    /// Result of fetching one remote image.
    ImageLoaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Drives toast expiry; only subscribed while a toast is up.
    Tick(Instant),
}

/// Parsed command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// `--lang`, a language identifier such as `fr` or `en-US`.
    pub lang: Option<String>,
    /// `--route`, the first screen to show, e.g. `/sets` or `/card/xy1-1`.
    pub route: Option<String>,
    /// `--data-dir`; wins over `TCG_MARKET_DATA_DIR`.
    pub data_dir: Option<String>,
    /// `--config-dir`; wins over `TCG_MARKET_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
