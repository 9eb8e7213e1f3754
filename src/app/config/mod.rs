// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! The file has three tables, each of which may be omitted:
//!
//! ```toml
//! [general]
//! language = "fr"          # optional, falls back to the OS locale
//! theme_mode = "system"    # light | dark | system
//!
//! [api]
//! base_url = "https://api.pokemontcg.io/v2"
//! api_key = "..."          # optional, sent as X-Api-Key
//! timeout_secs = 20
//! user_agent = "TcgMarket/0.1.0"
//!
//! [catalog]
//! page_size = 20
//! grid_columns = 4
//! image_cache_capacity = 256
//! ```
//!
//! Numbers outside their accepted range are pulled back to the nearest bound
//! when the file is read. The directory comes from [`paths::AppDir::Config`],
//! so `--config-dir` and `TCG_MARKET_CONFIG_DIR` both move it.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "settings.toml";

/// i18n key of the toast raised when an existing file cannot be used.
const UNREADABLE_WARNING: &str = "notification-config-load-error";

/// Whole settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Language identifier such as `en-US`; `None` means "detect".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "theme_mode_any_case")]
    pub theme_mode: ThemeMode,
}

/// Where and how the catalog is queried.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL every endpoint path is appended to.
    pub base_url: String,
    /// Sent as `X-Api-Key` when present; raises the upstream rate limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_secs: u32,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            api_key: None,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub page_size: u32,
    /// Tiles per row in the card and set grids.
    pub grid_columns: u32,
    /// Decoded images held by the LRU before the oldest is evicted.
    pub image_cache_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            grid_columns: DEFAULT_GRID_COLUMNS,
            image_cache_capacity: DEFAULT_IMAGE_CACHE_CAPACITY,
        }
    }
}

impl Config {
    fn clamp_values(&mut self) {
        let api = &mut self.api;
        api.timeout_secs = api
            .timeout_secs
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);

        let catalog = &mut self.catalog;
        catalog.page_size = catalog.page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        catalog.grid_columns = catalog
            .grid_columns
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);
        catalog.image_cache_capacity = catalog.image_cache_capacity.max(MIN_IMAGE_CACHE_CAPACITY);
    }
}

/// Accepts `Dark`, `DARK` and `dark` alike.
fn theme_mode_any_case<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<ThemeMode, D::Error> {
    let raw = String::deserialize(deserializer)?;
    [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
        .into_iter()
        .find(|mode| format!("{mode:?}").eq_ignore_ascii_case(&raw))
        .ok_or_else(|| {
            serde::de::Error::custom(format!(
                "theme_mode must be light, dark or system, got {raw:?}"
            ))
        })
}

fn settings_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::AppDir::Config
        .resolve(base_dir)
        .map(|dir| dir.join(FILE_NAME))
}

/// Reads the settings from the resolved config directory.
///
/// The second element is the i18n key of a warning to surface when a file
/// exists but could not be used. A missing file is not worth a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Same as [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_file(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "settings unreadable, using defaults");
            (Config::default(), Some(UNREADABLE_WARNING.to_owned()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let mut config: Config = toml::from_str(&fs::read_to_string(path)?)?;
    config.clamp_values();
    Ok(config)
}

/// Writes the settings into the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Same as [`save`], writing under `base_dir` when given. Does nothing when
/// no directory can be resolved at all.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_file(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => {
            tracing::warn!("no config directory available, settings not saved");
            Ok(())
        }
    }
}

/// Serializes `config` to `path`, creating missing parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
